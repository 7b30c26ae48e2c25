//! Load records and their ranking.
//!
//! A [`LoadRecord`] is an immutable description of a single load: who it
//! is (`id`), what kind of load it is (`category`), how urgent it is and
//! how heavy it is. Its priority is derived once at construction:
//!
//! ```text
//! priority = urgency * 10 + weight * 2 + category * 5
//! ```
//!
//! Records are compared by *rank*, a strict total order that refines the
//! raw priority: priority first, then urgency, then weight, and finally the
//! smaller identifier wins.
//!
//! The [`Ranked`] trait is the seam between records and the heap: any type
//! that can answer "do I rank higher than you?" can be stored in a
//! [`PriorityHeap`](crate::heap::PriorityHeap).

mod error;
mod types;

pub use error::ValidationError;
pub use types::{LoadRecord, RankKey, Ranked, RecordFields, MAX_URGENCY, MIN_URGENCY};
