//! FIFO rotation queue

use std::collections::VecDeque;

/// FIFO queue supporting dequeue-then-requeue (round robin)
///
/// Not synchronized: owners that share it between tasks must wrap it in a
/// lock and draw everything a batch needs in one critical section.
#[derive(Debug, Clone)]
pub struct RotationQueue<T> {
    items: VecDeque<T>,
}

impl<T: Clone> RotationQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append to the tail
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head, `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Dequeue the head and immediately re-enqueue it, returning a copy
    ///
    /// The queue length is unchanged.
    pub fn rotate(&mut self) -> Option<T> {
        let item = self.dequeue()?;
        self.enqueue(item.clone());
        Some(item)
    }

    /// Perform `count` rotations and return the drawn values in order
    ///
    /// Values repeat when `count` exceeds the queue length. Returns `None`
    /// on an empty queue (unless `count` is zero).
    pub fn draw(&mut self, count: usize) -> Option<Vec<T>> {
        (0..count).map(|_| self.rotate()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Default for RotationQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for RotationQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
