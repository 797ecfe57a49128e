//! Minimal CLI: read JSON → build schema → emit Java.
use std::path::PathBuf;

use clap::Parser;

use crate::error::Error;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Infer a Java POJO class hierarchy from an example JSON document.
#[derive(Parser, Debug)]
#[command(name = "json-pojo")]
pub struct CommandLineInterface {
    /// input JSON file to convert
    in_file: PathBuf,

    /// output Java file (created or overwritten)
    out_file: PathBuf,

    /// generate getter and setter methods (fields become private)
    #[arg(long = "getter-setter", default_value_t = false)]
    getter_setter: bool,

    /// name of the top-level class
    #[arg(long, default_value = "MainClass")]
    root_name: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<(), Error> {
        let json_value = crate::input::load_json(&self.in_file)?;

        let root = crate::schema::build(&json_value, &self.root_name, self.getter_setter);
        let java_src = crate::emit::render(&root);

        std::fs::write(&self.out_file, &java_src).map_err(|source| Error::OutputWrite {
            path: self.out_file.clone(),
            source,
        })?;

        println!(
            "Java POJO has been successfully generated to '{}'.",
            self.out_file.display()
        );
        Ok(())
    }
}
