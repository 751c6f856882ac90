//! `FrontierQueue`: the search frontier.
//!
//! # Ordering
//!
//! Entries are kept in a `BTreeMap` keyed by `(priority, sequence)`, where
//! `sequence` is a counter bumped on every insert.  Iteration order is
//! therefore ascending priority, and among equal priorities the entry that
//! was enqueued first comes first: a new entry never displaces an existing
//! one of the same priority.
//!
//! # Lazy deletion
//!
//! There is no decrease-key.  When the search finds a cheaper route to a node
//! it enqueues that node again; the older, more expensive entry stays in the
//! map until it surfaces, and the caller discards it because the node is
//! already settled.  The same element may therefore appear several times.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Total-ordered wrapper so `f64` priorities can key a `BTreeMap`.
#[derive(Copy, Clone, Debug)]
struct Priority(f64);

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Min-priority queue with stable ties and duplicate entries allowed.
#[derive(Clone, Debug)]
pub struct FrontierQueue<T> {
    inner: BTreeMap<(Priority, u64), T>,
    next_seq: u64,
}

impl<T> FrontierQueue<T> {
    pub fn new() -> Self {
        Self { inner: BTreeMap::new(), next_seq: 0 }
    }

    /// Insert `element` with `priority`.
    ///
    /// Re-inserting an element that is already queued (or was dequeued
    /// earlier) adds a second, independent entry.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.insert((Priority(priority), seq), element);
    }

    /// Remove and return the minimum-priority element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.pop_first().map(|(_, element)| element)
    }

    /// Priority of the entry [`dequeue`](Self::dequeue) would return next.
    pub fn peek_priority(&self) -> Option<f64> {
        self.inner.keys().next().map(|(p, _)| p.0)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Clone> FrontierQueue<T> {
    /// Copy of every queued element in dequeue order.  Does not mutate.
    pub fn peek_all(&self) -> Vec<T> {
        self.inner.values().cloned().collect()
    }
}

impl<T> Default for FrontierQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
