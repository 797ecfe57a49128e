//! Fatal error kinds for a single run. None are retried; all surface to
//! `main` and terminate the process with a non-zero status.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input file `{path}`: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse failure. `message` carries the JSON path of the offending node.
    #[error("failed to parse JSON in `{path}`: {message}")]
    MalformedJson { path: PathBuf, message: String },

    #[error("failed to write output file `{path}`: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
