//! Heap configuration.

/// Configuration for a [`PriorityHeap`](super::PriorityHeap).
///
/// # Examples
///
/// ```
/// use u_loadheap::heap::{HeapConfig, PriorityHeap};
/// use u_loadheap::record::LoadRecord;
///
/// let config = HeapConfig::default().with_initial_capacity(64);
/// let heap: PriorityHeap<LoadRecord> = PriorityHeap::with_config(&config);
/// assert_eq!(heap.capacity(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct HeapConfig {
    /// Number of slots allocated up front. Must be at least 1.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
        }
    }
}

impl HeapConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity == 0 {
            return Err("initial_capacity must be at least 1".into());
        }
        Ok(())
    }
}
