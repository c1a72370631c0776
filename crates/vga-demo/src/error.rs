//! Errors from the demo's outer layers (config, capture).
//!
//! The signal core itself cannot fail; everything here comes from files
//! and user-supplied settings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "native")]
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl DemoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
