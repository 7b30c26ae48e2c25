//! Interactive entry errors.

use crate::record::ValidationError;
use std::io;
use thiserror::Error;

/// Why interactive entry produced no record.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the record was complete")]
    EndOfInput,

    #[error("{field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
