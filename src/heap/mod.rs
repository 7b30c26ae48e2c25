//! Array-backed binary max-heap.
//!
//! [`PriorityHeap`] stores its elements in a single growable vector using
//! the implicit binary-tree layout: the root lives at index 0 and the
//! children of slot `i` live at `2i + 1` and `2i + 2`. The element at every
//! slot never ranks higher than its parent, so the root is always the
//! highest-ranking element.
//!
//! | Operation           | Cost                 |
//! |---------------------|----------------------|
//! | `insert`            | O(log n) amortized   |
//! | `extract_max`       | O(log n)             |
//! | `peek`, `len`       | O(1)                 |
//! | `iter_descending`   | O(n log n) total     |
//!
//! Capacity starts at [`HeapConfig::initial_capacity`] and doubles whenever
//! an insert finds the heap full. It never shrinks.
//!
//! # References
//!
//! Williams (1964), "Algorithm 232: Heapsort"

mod config;
mod iter;
mod queue;
mod sift;

pub use config::HeapConfig;
pub use iter::Descending;
pub use queue::PriorityHeap;
