//! Ascending-weight singly linked edge list.
//!
//! Nodes live in an index arena: each slot holds one [`EdgeRecord`] and the
//! index of its successor, and the list tracks the head and tail indices.
//! Removed slots go onto a free list and are reused by later inserts, so node
//! references stay stable for the lifetime of the list and nothing dangles
//! after removal. Draining the list releases the arena.
//!
//! The list doubles as each vertex's adjacency list and as the MST frontier.

use std::iter::FusedIterator;

use crate::edge::EdgeRecord;
use crate::error::{MstError, Result};

#[derive(Clone, Debug)]
struct Node {
    edge: EdgeRecord,
    next: Option<usize>,
}

/// Singly linked list of [`EdgeRecord`]s kept in non-decreasing weight order.
///
/// Edges with equal weight keep their insertion order. No duplicate
/// elimination takes place.
///
/// # Examples
/// ```
/// use sortprim_core::{EdgeRecord, OrderedEdgeList, VertexId};
///
/// let a = VertexId::new(0, 2).expect("in range");
/// let b = VertexId::new(1, 2).expect("in range");
/// let mut list = OrderedEdgeList::new();
/// list.insert(EdgeRecord::new(a, b, 7));
/// list.insert(EdgeRecord::new(b, a, 3));
///
/// let first = list.remove_front().expect("list holds two edges");
/// assert_eq!(first.weight(), 3);
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrderedEdgeList {
    slots: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl OrderedEdgeList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns `true` when the list holds no edges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of edges in the list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns the lightest edge without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&EdgeRecord> {
        self.head.map(|head| &self.slots[head].edge)
    }

    /// Inserts `edge`, keeping weights non-decreasing from head to tail.
    ///
    /// The edge is placed after every edge whose weight is not greater than
    /// its own, so equal weights stay in insertion order. Appending behind
    /// the tail costs O(1); anything else scans from the head.
    pub fn insert(&mut self, edge: EdgeRecord) {
        let weight = edge.weight();
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            let slot = self.allocate(edge, None);
            self.head = Some(slot);
            self.tail = Some(slot);
            return;
        };

        if self.slots[tail].edge.weight() <= weight {
            let slot = self.allocate(edge, None);
            self.slots[tail].next = Some(slot);
            self.tail = Some(slot);
            return;
        }

        if weight < self.slots[head].edge.weight() {
            let slot = self.allocate(edge, Some(head));
            self.head = Some(slot);
            return;
        }

        // The tail is strictly heavier, so the scan stops before running off
        // the end and the tail never moves here.
        let mut cursor = head;
        while let Some(next) = self.slots[cursor].next {
            if self.slots[next].edge.weight() > weight {
                break;
            }
            cursor = next;
        }
        let successor = self.slots[cursor].next;
        let slot = self.allocate(edge, successor);
        self.slots[cursor].next = Some(slot);
    }

    /// Removes and returns the lightest edge.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyQueue`] when the list is empty; the list is
    /// left untouched.
    pub fn remove_front(&mut self) -> Result<EdgeRecord> {
        let head = self.head.ok_or(MstError::EmptyQueue)?;
        let Node { edge, next } = self.slots[head].clone();
        self.head = next;
        self.len = self.len.saturating_sub(1);
        if next.is_none() {
            self.release_all();
        } else {
            self.free.push(head);
        }
        Ok(edge)
    }

    /// Removes every edge and releases the arena.
    pub fn clear(&mut self) {
        self.release_all();
        self.head = None;
        self.len = 0;
    }

    /// Returns an iterator over the edges from head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn allocate(&mut self, edge: EdgeRecord, next: Option<usize>) -> usize {
        self.len = self.len.saturating_add(1);
        let node = Node { edge, next };
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = node;
            slot
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    fn release_all(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.tail = None;
    }
}

impl PartialEq for OrderedEdgeList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for OrderedEdgeList {}

impl Extend<EdgeRecord> for OrderedEdgeList {
    fn extend<I: IntoIterator<Item = EdgeRecord>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl FromIterator<EdgeRecord> for OrderedEdgeList {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a OrderedEdgeList {
    type Item = &'a EdgeRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`OrderedEdgeList`], lightest edge first.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    slots: &'a [Node],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
