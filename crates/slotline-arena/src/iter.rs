//! Iterators over an [`IndexedQueue`].
//!
//! [`Iter`] follows the intrusive links without touching the queue.
//! [`Drain`] and [`IntoIter`] consume entities through `dequeue`, so they
//! yield in FIFO order and keep the arena consistent as they go.

use std::iter::FusedIterator;

use slotline_core::{Identified, SlotIndex};

use crate::queue::IndexedQueue;

/// Borrowing front-to-back iterator, created by [`IndexedQueue::iter`].
pub struct Iter<'a, T> {
    queue: &'a IndexedQueue<T>,
    front: Option<SlotIndex>,
    back: Option<SlotIndex>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(queue: &'a IndexedQueue<T>) -> Self {
        Self {
            queue,
            front: queue.head_slot(),
            back: queue.tail_slot(),
            remaining: queue.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front?;
        self.front = self.queue.next_of(slot);
        self.remaining -= 1;
        self.queue.payload_at(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back?;
        self.back = self.queue.prev_of(slot);
        self.remaining -= 1;
        self.queue.payload_at(slot)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Dequeuing iterator, created by [`IndexedQueue::drain`].
///
/// Dropping it clears whatever was not consumed.
pub struct Drain<'a, T: Identified> {
    queue: &'a mut IndexedQueue<T>,
}

impl<'a, T: Identified> Drain<'a, T> {
    pub(crate) fn new(queue: &'a mut IndexedQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T: Identified> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Identified> ExactSizeIterator for Drain<'_, T> {}

impl<T: Identified> FusedIterator for Drain<'_, T> {}

impl<T: Identified> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        if !self.queue.is_empty() {
            self.queue.clear();
        }
    }
}

/// Owning FIFO iterator, created by `IntoIterator for IndexedQueue`.
pub struct IntoIter<T: Identified> {
    queue: IndexedQueue<T>,
}

impl<T: Identified> IntoIter<T> {
    pub(crate) fn new(queue: IndexedQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T: Identified> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Identified> ExactSizeIterator for IntoIter<T> {}

impl<T: Identified> FusedIterator for IntoIter<T> {}
