//! Bounded top-K selection over a stream of candidates.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the `k` greatest items offered so far.
///
/// Backed by a min-heap of at most `k` entries: `offer` is O(log k) and
/// `peek_min` is O(1). A candidate equal to the current minimum of a full
/// structure is discarded, so among equal keys the earliest offered survive.
#[derive(Clone, Debug)]
pub struct TopK<T: Ord> {
    k: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopK<T> {
    pub fn new(k: usize) -> Self {
        Self { k, heap: BinaryHeap::with_capacity(k) }
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest retained item.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(t)| t)
    }

    /// Offer a candidate. Returns the item that did not make (or fell out of) the cut.
    pub fn offer(&mut self, item: T) -> Option<T> {
        if self.heap.len() < self.k {
            self.heap.push(Reverse(item));
            return None;
        }
        match self.heap.peek_mut() {
            Some(mut min) if item > min.0 => Some(std::mem::replace(&mut min.0, item)),
            _ => Some(item),
        }
    }

    /// Retained items in ascending order, drained minimum first.
    pub fn into_ascending(self) -> Vec<T> {
        let mut heap = self.heap;
        let mut out = Vec::with_capacity(heap.len());
        while let Some(Reverse(min)) = heap.pop() {
            out.push(min);
        }
        out
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}
