//! Menu-driven console session.
//!
//! [`Session`] ties the pieces together: it owns a
//! [`PriorityHeap`](crate::heap::PriorityHeap) of records plus explicit
//! input and output handles, and maps each menu choice onto the loader,
//! interactive entry, heap and display modules.

mod menu;
mod runner;

pub use menu::MenuOption;
pub use runner::Session;
