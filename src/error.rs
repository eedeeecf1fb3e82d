// src/error.rs
//
// Crate-wide error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    #[error("invalid placeholder file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid font shorthand {0:?}")]
    InvalidFont(String),

    #[error("failed to load font {path}: {reason}")]
    Font { path: PathBuf, reason: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
