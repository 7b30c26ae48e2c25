//! Priority queue of load records backed by an array-based binary max-heap.
//!
//! - **Record**: an immutable load with a derived priority
//!   (`urgency * 10 + weight * 2 + category * 5`) and a strict rank order
//!   that breaks ties by urgency, weight and finally the smaller id.
//! - **Heap**: a growable array-backed max-heap with O(log n) insert and
//!   extract-max, O(1) peek, and a non-destructive descending traversal.
//! - **Loader**: batch loading from comma-separated text, skipping and
//!   reporting bad lines without aborting.
//! - **Entry**: field-by-field interactive entry over explicit I/O handles.
//! - **Display**: fixed-width table rendering.
//! - **Session**: the menu loop that ties everything together.
//!
//! # Architecture
//!
//! `record` and `heap` form the core and do no I/O. `loader`, `entry`,
//! `display` and `session` are thin layers that produce records for the
//! heap or render what it returns. Nothing here is synchronized; the heap
//! assumes a single owner.

pub mod display;
pub mod entry;
pub mod heap;
pub mod loader;
pub mod record;
pub mod session;
