//! Error types shared across the crate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A generation policy that cannot be used as requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Please select at least one character type.")]
    NoCharacterClass,

    #[error("minimum length must be at least 1")]
    MinLengthZero,

    #[error("minimum length {min} exceeds maximum length {max}")]
    MinExceedsMax { min: usize, max: usize },

    #[error("maximum length {max} exceeds the limit of {ceiling}")]
    ExceedsCeiling { max: usize, ceiling: usize },
}

/// Failures of the preference store or the history log.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn unavailable(path: &Path, source: io::Error) -> Self {
        StoreError::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Top-level error returned by the interactive shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
