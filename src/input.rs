//! Input loading: read the whole document up front, parse with JSON-path
//! context in error messages.
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

/// Read `path` as UTF-8 and parse it as a single JSON document.
///
/// Key order inside objects is preserved (serde_json `preserve_order`), which
/// the schema builder relies on for field ordering.
pub fn load_json(path: &Path) -> Result<Value, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;
    from_str_with_path::<Value>(&source).map_err(|message| Error::MalformedJson {
        path: path.to_path_buf(),
        message,
    })
}
