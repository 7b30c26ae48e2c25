//! Outcome of a batch load.

use super::error::LineError;

/// A line that was skipped, with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub content: String,
    pub error: LineError,
}

/// Summary of a batch load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted into the heap.
    pub loaded: usize,

    /// Lines skipped, in input order.
    pub rejected: Vec<RejectedLine>,
}

impl LoadReport {
    /// Returns `true` if every data line was loaded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
