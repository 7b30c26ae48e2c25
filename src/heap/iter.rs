//! Non-destructive descending traversal.

use super::sift::pop_root;
use crate::record::Ranked;
use std::iter::FusedIterator;

/// Iterator over a heap's elements from highest to lowest rank.
///
/// Created by [`PriorityHeap::iter_descending`](super::PriorityHeap::iter_descending).
/// Holds a copy of the heap layout made of references and pops from that
/// copy lazily, so each step costs O(log n) and the source heap is never
/// touched.
#[derive(Debug)]
pub struct Descending<'a, T> {
    remaining: Vec<&'a T>,
}

impl<'a, T: Ranked> Descending<'a, T> {
    /// `slots` must already satisfy the heap property.
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self {
            remaining: slots.iter().collect(),
        }
    }
}

// Only the references are copied, so `T` need not be `Clone`.
impl<T> Clone for Descending<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining.clone(),
        }
    }
}

impl<'a, T: Ranked> Iterator for Descending<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        pop_root(&mut self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len();
        (n, Some(n))
    }
}

impl<T: Ranked> ExactSizeIterator for Descending<'_, T> {}

impl<T: Ranked> FusedIterator for Descending<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    // Deliberately neither Clone nor Copy.
    #[derive(Debug, PartialEq)]
    struct Token(u8);

    impl Ranked for Token {
        fn ranks_higher_than(&self, other: &Self) -> bool {
            self.0 > other.0
        }
    }

    #[test]
    fn test_clone_without_cloneable_items() {
        let slots = [Token(9), Token(4), Token(7)];
        let mut first = Descending::new(&slots);
        assert_eq!(first.next(), Some(&Token(9)));

        let resumed = first.clone();
        let rest: Vec<u8> = first.map(|t| t.0).collect();
        let rest_again: Vec<u8> = resumed.map(|t| t.0).collect();
        assert_eq!(rest, vec![7, 4]);
        assert_eq!(rest_again, rest);
    }
}
