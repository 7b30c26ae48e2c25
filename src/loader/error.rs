//! Loader errors.

use crate::record::ValidationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single line was rejected. Never fatal to the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A failure that stops the whole batch. Nothing is inserted.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
}
