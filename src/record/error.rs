//! Field validation errors.

use thiserror::Error;

/// A record field lies outside its accepted domain.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("urgency must be between 1 and 3, got {0}")]
    UrgencyOutOfRange(i32),

    #[error("weight must be greater than or equal to zero, got {0}")]
    NegativeWeight(i32),
}
