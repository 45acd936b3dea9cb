//! A singly linked list. Nodes only know about their successor and the list
//! only knows about its head (and, so appending is cheap, its tail).
//!
//! Nodes are stored in an arena owned by the list and linked by index, so a
//! deleted node can never be reached through a dangling link. A [`NodeId`] is a
//! handle to one node. It carries the generation of the arena slot it was
//! issued for, so once its node is deleted the handle simply stops resolving
//! even if the slot is reused by a later node.
//!
//! # Examples
//!
//! ```
//! use dsa::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! let two = list.append(2);
//! list.append(3);
//!
//! assert!(list.search(&2));
//!
//! // Splice a node in after `2`.
//! list.insert(Some(two), 10);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 10, 3]);
//!
//! list.delete_node(&2);
//! assert!(!list.search(&2));
//!
//! // `two` was deleted so inserting after it does nothing.
//! assert_eq!(list.insert(Some(two), 20), None);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 10, 3]);
//! ```

use std::fmt;

/// A handle to a node in a [`LinkedList`]. Handles are only meaningful for the
/// list that issued them and stop resolving once their node is deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

struct Node<T> {
    data: T,
    next: Option<usize>,
}

/// One arena cell. `generation` is bumped every time the cell's node is
/// deleted. It is 64 bits wide so a slot can't cycle back to an old generation
/// within any realistic number of deletes.
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// A singly linked list supporting appends, insertion after a known node,
/// deletion by value and linear search.
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots, reused before the arena grows.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// How many nodes are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Attaches a new node holding `data` at the end of the list and returns
    /// its handle.
    pub fn append(&mut self, data: T) -> NodeId {
        let id = self.alloc(data);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id.index),
            None => self.head = Some(id.index),
        }
        self.tail = Some(id.index);
        self.len += 1;

        id
    }

    /// Splices a new node holding `data` in directly after `prev_node` and
    /// returns its handle. If `prev_node` is `None` or doesn't name a node
    /// currently in this list, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let head = list.append('a');
    /// list.append('c');
    ///
    /// assert!(list.insert(Some(head), 'b').is_some());
    /// assert_eq!(list.insert(None, 'z'), None);
    /// assert_eq!(list.iter().collect::<String>(), "abc");
    /// ```
    pub fn insert(&mut self, prev_node: Option<NodeId>, data: T) -> Option<NodeId> {
        let prev = self.resolve(prev_node?)?;
        let id = self.alloc(data);

        let next = self.node_mut(prev).next.replace(id.index);
        self.node_mut(id.index).next = next;
        if self.tail == Some(prev) {
            self.tail = Some(id.index);
        }
        self.len += 1;

        Some(id)
    }

    /// Removes the first node (counting from the head) whose data equals `key`
    /// and returns its data. Nothing happens if no node matches.
    pub fn delete_node(&mut self, key: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index);
            if node.data == *key {
                let next = node.next;
                match prev {
                    Some(prev) => self.node_mut(prev).next = next,
                    None => self.head = next,
                }
                if self.tail == Some(index) {
                    self.tail = prev;
                }
                self.len -= 1;

                return Some(self.release(index));
            }
            prev = current;
            current = node.next;
        }

        None
    }

    /// Whether any node's data equals `key`.
    pub fn search(&self, key: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|data| data == key)
    }

    /// Returns the handle of the first node whose data equals `key`.
    pub fn find(&self, key: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node(index);
            if node.data == *key {
                return Some(self.id_of(index));
            }
            current = node.next;
        }

        None
    }

    /// The handle of the first node, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|index| self.id_of(index))
    }

    /// The handle of the node after `node`, if `node` is live and has a successor.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let index = self.resolve(node)?;
        self.node(index).next.map(|next| self.id_of(next))
    }

    /// The data stored at `node`, if `node` is still in the list.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        let index = self.resolve(node)?;
        Some(&self.node(index).data)
    }

    /// Iterates over the data from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, data: T) -> NodeId {
        let node = Node { data, next: None };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Empties the slot at `index` and returns the data it held. The caller must
    /// already have unlinked the node.
    fn release(&mut self, index: usize) -> T {
        let slot = &mut self.slots[index];
        let node = slot.node.take().expect("Released slot must hold a node");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);

        node.data
    }

    /// Maps a handle to its slot index if the handle still names a live node.
    fn resolve(&self, id: NodeId) -> Option<usize> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation && slot.node.is_some())
            .map(|_| id.index)
    }

    fn id_of(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .node
            .as_ref()
            .expect("Linked index must point at a live node")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .node
            .as_mut()
            .expect("Linked index must point at a live node")
    }
}

/// Head-to-tail iterator over a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?);
        self.current = node.next;
        self.remaining -= 1;

        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.append(data);
        }
    }
}
