//! Interactive entry of a single record.
//!
//! Prompts for the five fields one at a time over caller-supplied input and
//! output handles, validating urgency and weight as soon as they are typed.

mod error;
mod prompt;

pub use error::EntryError;
pub use prompt::read_record;
