//! The priority heap itself.

use super::config::HeapConfig;
use super::iter::Descending;
use super::sift::{pop_root, sift_up};
use crate::record::{LoadRecord, Ranked};
use log::debug;

/// Binary max-heap over any [`Ranked`] element type.
///
/// The heap owns every inserted element until it is handed back by
/// [`extract_max`](Self::extract_max). It performs no validation of its
/// own; whatever the caller inserts is kept.
///
/// Not synchronized. Wrap it in a `Mutex` to share it across threads.
///
/// # Examples
///
/// ```
/// use u_loadheap::heap::PriorityHeap;
/// use u_loadheap::record::LoadRecord;
///
/// let mut heap = PriorityHeap::new();
/// heap.insert(LoadRecord::new(1, 2, 3, 10, "A")); // priority 60
/// heap.insert(LoadRecord::new(2, 1, 1, 5, "B"));  // priority 25
///
/// assert_eq!(heap.peek().map(|r| r.id()), Some(1));
/// assert_eq!(heap.extract_max().map(|r| r.id()), Some(1));
/// assert_eq!(heap.extract_max().map(|r| r.id()), Some(2));
/// assert!(heap.extract_max().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<T = LoadRecord> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T: Ranked> PriorityHeap<T> {
    /// Creates an empty heap with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&HeapConfig::default())
    }

    /// Creates an empty heap from a configuration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`HeapConfig::validate`]
    /// first to get a descriptive error).
    pub fn with_config(config: &HeapConfig) -> Self {
        config.validate().expect("invalid HeapConfig");
        Self::with_capacity(config.initial_capacity)
    }

    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// A capacity of zero is raised to one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots available before the next doubling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an element, doubling the capacity first if the heap is full.
    pub fn insert(&mut self, item: T) {
        if self.slots.len() == self.capacity {
            self.grow();
        }
        self.slots.push(item);
        let last = self.slots.len() - 1;
        sift_up(&mut self.slots, last);
    }

    /// Removes and returns the highest-ranking element.
    ///
    /// Returns `None` when the heap is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        pop_root(&mut self.slots)
    }

    /// Returns the highest-ranking element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Iterates over all elements from highest to lowest rank.
    ///
    /// The heap is left untouched: the iterator sorts a private vector of
    /// references, so it can be run as often as needed.
    pub fn iter_descending(&self) -> Descending<'_, T> {
        Descending::new(&self.slots)
    }

    /// Collects [`iter_descending`](Self::iter_descending) into a vector.
    pub fn to_sorted_vec(&self) -> Vec<&T> {
        self.iter_descending().collect()
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2);
        self.slots.reserve_exact(new_capacity - self.slots.len());
        debug!(
            "heap capacity grown from {} to {}",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Ranked> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ranked> Extend<T> for PriorityHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ranked> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::super::sift::is_heap;
    use super::*;
    use proptest::prelude::*;

    fn rec(id: i32, category: i32, urgency: i32, weight: i32) -> LoadRecord {
        LoadRecord::new(id, category, urgency, weight, format!("load-{id}"))
    }

    fn drain_ids(heap: &mut PriorityHeap<LoadRecord>) -> Vec<i32> {
        std::iter::from_fn(|| heap.extract_max())
            .map(|r| r.id())
            .collect()
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: PriorityHeap = PriorityHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(heap.peek().is_none());
        assert!(heap.extract_max().is_none());
        assert_eq!(heap.iter_descending().count(), 0);
    }

    #[test]
    fn test_two_record_example() {
        let mut heap = PriorityHeap::new();
        heap.insert(rec(1, 2, 3, 10));
        heap.insert(rec(2, 1, 1, 5));

        let top = heap.peek().unwrap();
        assert_eq!(top.id(), 1);
        assert_eq!(top.priority(), 60);
        assert_eq!(heap.len(), 2);

        assert_eq!(heap.extract_max().unwrap().id(), 1);
        assert_eq!(heap.extract_max().unwrap().id(), 2);
        assert!(heap.extract_max().is_none());
    }

    #[test]
    fn test_tie_break_by_smaller_id() {
        let mut heap = PriorityHeap::new();
        heap.insert(rec(5, 1, 2, 4));
        heap.insert(rec(3, 1, 2, 4));
        assert_eq!(drain_ids(&mut heap), vec![3, 5]);

        heap.insert(rec(7, 3, 1, 1));
        heap.insert(rec(2, 3, 1, 1));
        assert_eq!(drain_ids(&mut heap), vec![2, 7]);
    }

    #[test]
    fn test_growth_beyond_initial_capacity() {
        let mut heap = PriorityHeap::with_config(&HeapConfig::default());
        assert_eq!(heap.capacity(), 10);

        for id in 0..11 {
            heap.insert(rec(id, 1, 1, id));
        }
        assert_eq!(heap.len(), 11);
        assert_eq!(heap.capacity(), 20);

        // Weight grows with id, so extraction runs from id 10 down to 0.
        assert_eq!(drain_ids(&mut heap), (0..11).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_capacity_doubles_exactly() {
        let mut heap = PriorityHeap::with_capacity(1);
        let mut seen = vec![heap.capacity()];
        for id in 0..9 {
            heap.insert(rec(id, 0, 1, 0));
            if *seen.last().unwrap() != heap.capacity() {
                seen.push(heap.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut heap = PriorityHeap::with_capacity(0);
        assert_eq!(heap.capacity(), 1);
        heap.insert(rec(1, 1, 1, 1));
        heap.insert(rec(2, 1, 1, 1));
        assert_eq!(heap.capacity(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid HeapConfig")]
    fn test_invalid_config_panics() {
        let _heap: PriorityHeap = PriorityHeap::with_config(&HeapConfig {
            initial_capacity: 0,
        });
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut heap = PriorityHeap::with_capacity(2);
        for id in 0..5 {
            heap.insert(rec(id, 1, 1, 1));
        }
        let grown = heap.capacity();
        while heap.extract_max().is_some() {}
        assert_eq!(heap.capacity(), grown);
    }

    #[test]
    fn test_iter_descending_leaves_heap_intact() {
        let mut heap: PriorityHeap = [rec(1, 2, 3, 10), rec(2, 1, 1, 5), rec(3, 9, 2, 0)]
            .into_iter()
            .collect();
        let before: Vec<LoadRecord> = heap.slots().to_vec();

        let listed: Vec<i32> = heap.iter_descending().map(|r| r.id()).collect();
        let again: Vec<i32> = heap.to_sorted_vec().iter().map(|r| r.id()).collect();

        assert_eq!(listed, again);
        assert_eq!(heap.slots(), &before[..]);
        assert_eq!(heap.len(), 3);
        assert_eq!(drain_ids(&mut heap), listed);
    }

    #[test]
    fn test_iter_descending_size_hint() {
        let heap: PriorityHeap = (0..4).map(|id| rec(id, 1, 2, id)).collect();
        let mut iter = heap.iter_descending();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_equivalent_records_both_kept() {
        let mut heap = PriorityHeap::new();
        heap.insert(LoadRecord::new(4, 1, 1, 1, "first"));
        heap.insert(LoadRecord::new(4, 1, 1, 1, "second"));
        assert_eq!(heap.len(), 2);
        let mut descriptions: Vec<String> = std::iter::from_fn(|| heap.extract_max())
            .map(|r| r.description().to_string())
            .collect();
        descriptions.sort();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    // ---- Property tests ----

    fn arb_record() -> impl Strategy<Value = LoadRecord> {
        (0..40i32, 0..10i32, 1..=3i32, 0..30i32)
            .prop_map(|(id, category, urgency, weight)| rec(id, category, urgency, weight))
    }

    proptest! {
        #[test]
        fn prop_heap_property_after_each_insert(records in prop::collection::vec(arb_record(), 0..80)) {
            let mut heap = PriorityHeap::with_capacity(1);
            for r in records {
                heap.insert(r);
                prop_assert!(is_heap(heap.slots()));
                prop_assert!(heap.len() <= heap.capacity());
            }
        }

        #[test]
        fn prop_extraction_is_non_increasing(records in prop::collection::vec(arb_record(), 0..80)) {
            let mut heap: PriorityHeap = records.iter().cloned().collect();
            let mut previous: Option<LoadRecord> = None;
            while let Some(r) = heap.extract_max() {
                prop_assert!(is_heap(heap.slots()));
                if let Some(p) = &previous {
                    prop_assert!(!r.ranks_higher_than(p));
                }
                previous = Some(r);
            }
            prop_assert!(heap.is_empty());
        }

        #[test]
        fn prop_size_tracks_inserts_and_extractions(
            records in prop::collection::vec(arb_record(), 0..60),
            extractions in 0usize..60,
        ) {
            let k = records.len();
            let j = extractions.min(k);
            let mut heap: PriorityHeap = records.into_iter().collect();
            for _ in 0..j {
                prop_assert!(heap.extract_max().is_some());
            }
            prop_assert_eq!(heap.len(), k - j);
            prop_assert_eq!(heap.extract_max().is_none(), k == j);
        }

        #[test]
        fn prop_listing_matches_extraction(records in prop::collection::vec(arb_record(), 0..80)) {
            let heap: PriorityHeap = records.into_iter().collect();
            let peeked = heap.peek().cloned();

            let listed: Vec<LoadRecord> = heap.iter_descending().cloned().collect();
            prop_assert_eq!(listed.len(), heap.len());
            prop_assert_eq!(heap.peek().cloned(), peeked);

            let mut clone = heap.clone();
            let extracted: Vec<LoadRecord> = std::iter::from_fn(|| clone.extract_max()).collect();
            prop_assert_eq!(&listed, &extracted);

            // Repeatable.
            let relisted: Vec<LoadRecord> = heap.iter_descending().cloned().collect();
            prop_assert_eq!(listed, relisted);
        }

        #[test]
        fn prop_unique_ids_list_strictly_descending(
            fields in prop::collection::vec((0..10i32, 1..=3i32, 0..30i32), 0..60),
        ) {
            let heap: PriorityHeap = fields
                .into_iter()
                .enumerate()
                .map(|(id, (c, u, w))| rec(id as i32, c, u, w))
                .collect();
            let listed = heap.to_sorted_vec();
            for pair in listed.windows(2) {
                prop_assert!(pair[0].ranks_higher_than(pair[1]));
            }
        }
    }
}
