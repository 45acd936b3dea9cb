//! An unbalanced Binary Search Tree. Each `Node` exclusively owns its two
//! children, so removing a subtree can never leave a dangling parent link.
//!
//! Elements that compare equal to an existing element are inserted into that
//! element's right subtree, so for every `Node` the left subtree holds strictly
//! smaller elements and the right subtree holds elements greater than or equal
//! to its own.
//!
//! There is no rebalancing. Inserting elements in ascending order produces a
//! tree whose height equals its length.
//!
//! # Examples
//!
//! ```
//! use dsa::bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&4).is_none());
//!
//! for x in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.find(&4).map(|node| *node.data()), Some(4));
//! assert!(tree.find(&10).is_none());
//!
//! // Deleting a node returns its element.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [2, 3, 4, 6, 7, 8]);
//! ```

use std::cmp;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one element and up to two children.
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The element stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of this node's left subtree (all strictly smaller elements).
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree (all greater or equal elements).
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Removes the first node equal to `data` found below (or at) `link`.
    fn delete(link: &mut Link<T>, data: &T) -> Option<T>
    where
        T: cmp::Ord,
    {
        // Walk down to the slot holding the match. The direction is decided under a
        // shared borrow so the cursor is only moved when we keep descending.
        let mut link = link;
        loop {
            let go_left = match link.as_deref() {
                None => return None,
                Some(node) => match data.cmp(&node.data) {
                    cmp::Ordering::Less => true,
                    cmp::Ordering::Equal => break,
                    cmp::Ordering::Greater => false,
                },
            };
            if let Some(node) = link {
                link = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }

        let mut node = link.take()?;
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),

            // If we have two children we have to figure out which node to promote. We
            // choose this node's successor, the smallest node in its right subtree.
            // Equal elements only ever sit to the right, so the left subtree stays
            // strictly smaller than whatever is promoted.
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                match Self::take_smallest(&mut right) {
                    Some(successor) => Some(Box::new(Node {
                        data: successor,
                        left: Some(left),
                        right,
                    })),
                    None => Some(left),
                }
            }
        };

        Some(node.data)
    }

    /// Removes the smallest node of the subtree at `link`, splicing its right child
    /// into its place, and returns its element.
    fn take_smallest(link: &mut Link<T>) -> Option<T> {
        let mut link = link;
        while link.as_ref()?.left.is_some() {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }

        let node = link.take()?;
        let Node { data, right, .. } = *node;
        *link = right;

        Some(data)
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// An unbalanced Binary Search Tree. This can be used for inserting, finding,
/// deleting and iterating over elements in sorted order.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Detach children onto a heap stack. A recursive drop takes one frame per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many elements are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `data` as a new leaf. Smaller elements go left and everything else
    /// (including duplicates) goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// let root = tree.root().unwrap();
    /// assert!(root.left().is_none());
    /// assert_eq!(root.right().map(|n| *n.data()), Some(1));
    /// ```
    pub fn insert(&mut self, data: T)
    where
        T: cmp::Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if data < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(data)));
        self.len += 1;
    }

    /// Potentially finds the node holding an element equal to `data`. If no node
    /// matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.data()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, data: &T) -> Option<&Node<T>>
    where
        T: cmp::Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match data.cmp(&node.data) {
                cmp::Ordering::Less => node.left.as_deref(),
                cmp::Ordering::Equal => return Some(node),
                cmp::Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Whether the tree holds an element equal to `data`.
    pub fn contains(&self, data: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.find(data).is_some()
    }

    /// Deletes the first node found holding an element equal to `data` and
    /// returns its element. If the tree holds no such element, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, data: &T) -> Option<T>
    where
        T: cmp::Ord,
    {
        let deleted = Node::delete(&mut self.root, data);
        if deleted.is_some() {
            self.len -= 1;
        }

        deleted
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        stack.extend(self.root().map(|root| (root, 1)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Iterates over the elements in ascending order by visiting the left
    /// subtree, then the node, then the right subtree. Each call starts a fresh
    /// traversal.
    pub fn inorder(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }
}

/// In-order iterator over a [`BinarySearchTree`], created by
/// [`BinarySearchTree::inorder`]. The pending path is kept on a heap stack so a
/// degenerate tree can't overflow the call stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());

        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: cmp::Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert(data);
        }
    }
}
