//! Error types for the fallible layers around the rotation core.
//!
//! Rotation functions never fail. These errors come from configuration, the
//! plan document, command-line validation and sprint dates that leave the
//! supported calendar range.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised outside the pure rotation core.
#[derive(Debug, Error)]
pub enum RotaError {
    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The plan document is not valid JSON for the expected shape.
    #[error("invalid plan document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no sprint with id '{0}'")]
    UnknownSprint(String),
    #[error("no member with id or name '{0}'")]
    UnknownMember(String),
    #[error("no role with id or name '{0}'")]
    UnknownRole(String),
    /// A command-line value could not be understood.
    #[error("{0}")]
    InvalidArgument(String),
}

impl RotaError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RotaError>;
