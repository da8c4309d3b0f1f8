use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid key binding '{key}': {reason}")]
    KeyBinding { key: String, reason: String },

    #[error("unknown action '{0}' in key binding")]
    UnknownAction(String),

    #[error("game component disconnected")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, ShellError>;
