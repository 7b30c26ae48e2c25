//! Heap-property restoration on 0-indexed slices.
//!
//! Both the live heap and the descending iterator go through these two
//! functions, so extraction order and listing order cannot diverge.

use crate::record::Ranked;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Moves the element at `i` towards the root while it outranks its parent.
pub(crate) fn sift_up<T: Ranked>(data: &mut [T], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if data[i].ranks_higher_than(&data[p]) {
            data.swap(i, p);
            i = p;
        } else {
            break;
        }
    }
}

/// Moves the element at `i` towards the leaves while a child outranks it.
///
/// The right child is chosen only when it strictly outranks the left one.
pub(crate) fn sift_down<T: Ranked>(data: &mut [T], mut i: usize) {
    let len = data.len();
    loop {
        let left = left_child(i);
        if left >= len {
            break;
        }
        let right = left + 1;
        let mut larger = left;
        if right < len && data[right].ranks_higher_than(&data[left]) {
            larger = right;
        }
        if data[larger].ranks_higher_than(&data[i]) {
            data.swap(i, larger);
            i = larger;
        } else {
            break;
        }
    }
}

/// Removes and returns the root, moving the last element into its place.
pub(crate) fn pop_root<T: Ranked>(data: &mut Vec<T>) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    let last = data.len() - 1;
    data.swap(0, last);
    let root = data.pop();
    if !data.is_empty() {
        sift_down(data, 0);
    }
    root
}

/// Returns `true` if no slot outranks its parent.
#[cfg(test)]
pub(crate) fn is_heap<T: Ranked>(data: &[T]) -> bool {
    (1..data.len()).all(|i| !data[i].ranks_higher_than(&data[parent(i)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Num(i32);

    impl Ranked for Num {
        fn ranks_higher_than(&self, other: &Self) -> bool {
            self.0 > other.0
        }
    }

    #[test]
    fn test_sift_up_to_root() {
        let mut data = vec![Num(5), Num(3), Num(4), Num(1), Num(9)];
        sift_up(&mut data, 4);
        assert_eq!(data[0], Num(9));
        assert!(is_heap(&data));
    }

    #[test]
    fn test_sift_up_stops_at_valid_parent() {
        let mut data = vec![Num(9), Num(5), Num(4), Num(2)];
        sift_up(&mut data, 3);
        assert_eq!(data, vec![Num(9), Num(5), Num(4), Num(2)]);
    }

    #[test]
    fn test_sift_down_prefers_right_only_when_strictly_higher() {
        // Children tie: left must be chosen.
        let mut data = vec![Num(1), Num(5), Num(5)];
        sift_down(&mut data, 0);
        assert_eq!(data, vec![Num(5), Num(1), Num(5)]);

        let mut data = vec![Num(1), Num(4), Num(6)];
        sift_down(&mut data, 0);
        assert_eq!(data, vec![Num(6), Num(4), Num(1)]);
    }

    #[test]
    fn test_pop_root_order() {
        let mut data = vec![Num(9), Num(7), Num(8), Num(1), Num(3)];
        assert!(is_heap(&data));
        let mut out = Vec::new();
        while let Some(n) = pop_root(&mut data) {
            assert!(is_heap(&data));
            out.push(n.0);
        }
        assert_eq!(out, vec![9, 8, 7, 3, 1]);
        assert!(pop_root(&mut data).is_none());
    }
}
