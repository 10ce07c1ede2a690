use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode invoice: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Line item '{0}' not found. Use 'items' to see the rows.")]
    RowNotFound(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
