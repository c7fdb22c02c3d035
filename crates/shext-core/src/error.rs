//! Error type shared by every helper in the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a helper. Helpers fail fast; nothing is retried.
#[derive(Debug, Error)]
pub enum ShextError {
    /// Out-of-range numeric parameter, empty alphabet, bad pattern.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed hexadecimal input.
    #[error("malformed hex {input:?}: {source}")]
    Format {
        input: String,
        #[source]
        source: hex::FromHexError,
    },

    /// Path missing or not readable/writable.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Markup that does not parse, or does not fit the requested shape.
    #[error("{context}: {message}")]
    Serialization { context: String, message: String },
}

impl ShextError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ShextError::InvalidArgument(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShextError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ShextError::Serialization {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShextError>;
