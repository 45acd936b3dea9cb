//! A FIFO queue. Items leave in exactly the order they arrived.
//!
//! # Examples
//!
//! ```
//! use dsa::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.size(), 3);
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! ```

use std::collections::VecDeque;

/// A First-In-First-Out container. Backed by a ring buffer so removing from
/// the front is O(1) amortized instead of shifting every remaining item.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds an item at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the item at the front of the queue and returns it, or `None` if
    /// the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.dequeue(), None::<&str>);
    ///
    /// queue.enqueue("first");
    /// queue.enqueue("second");
    /// assert_eq!(queue.dequeue(), Some("first"));
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the item at the front without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Whether the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are waiting in the queue.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
