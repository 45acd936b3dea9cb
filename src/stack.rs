//! A LIFO stack backed by a `Vec`. The end of the `Vec` is the top of the stack.
//!
//! # Examples
//!
//! ```
//! use dsa::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.size(), 3);
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.peek(), Some(&2));
//! ```

/// A Last-In-First-Out container. Every operation works on the same end (the
/// "top"), so the most recently pushed item that hasn't been popped is always
/// the next one out.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the top item and returns it, or `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// assert_eq!(stack.pop(), None::<i32>);
    ///
    /// stack.push(7);
    /// assert_eq!(stack.pop(), Some(7));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether there is nothing on the stack.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in iteration order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
