use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TroubleshootError {
    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Command '{0}' not found. Use --list-commands to see available options.")]
    UnknownCommand(String),

    #[error("Failed to spawn shell for '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open run log at {path}: {reason}")]
    LogInit { path: PathBuf, reason: String },

    #[error("Failed to delete log file {path}: {source}")]
    LogDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TroubleshootError>;
