//! Batch loading of records from comma-separated text.
//!
//! # Format
//!
//! ```text
//! id,category,urgency,weight,description
//! 1,2,3,10,Medical supplies
//! 2,1,1,5,Office paper
//! ```
//!
//! The first line is a header and is always skipped. Every other line must
//! have exactly five comma-separated fields once trailing empty fields are
//! dropped; surrounding whitespace is trimmed. Invalid UTF-8 is replaced
//! rather than rejected. Lines that fail to parse or validate are collected into the
//! [`LoadReport`] and the batch carries on with the next line. Only I/O
//! failures abort a load.
//!
//! With the `parallel` feature, lines are parsed on the rayon pool before
//! being inserted in file order.

mod error;
mod parse;
mod report;

pub use error::{LineError, LoadError};
pub use parse::{load_from_path, load_from_reader, parse_line, FIELD_COUNT};
pub use report::{LoadReport, RejectedLine};
