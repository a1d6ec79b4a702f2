use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use shorthand_core::{SchemaError, SchemaNode};
use shorthand_lib::Config;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Config(#[from] shorthand_lib::Error),
}

/// Load a schema from a file, or from stdin when `path` is `-`.
pub fn load_schema(path: &Path) -> Result<SchemaNode, LoadError> {
    let text = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        read_file(path)?
    };
    parse_schema_text(&text)
}

pub fn parse_schema_text(text: &str) -> Result<SchemaNode, LoadError> {
    Ok(shorthand_core::parse_schema(text)?)
}

/// Load the config file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, LoadError> {
    match path {
        Some(path) => Ok(Config::from_json(&read_file(path)?)?),
        None => Ok(Config::default()),
    }
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}
