//! Standard library compatibility layer
//!
//! Provides a mutable, `BinaryHeap`-shaped handle around a persistent
//! [`PriorityQueue`].
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<K>` to get max-heap behavior.
//! - **Key/value pairs**: Elements are `(key, value)` pairs ordered by key only.
//! - **Snapshots**: [`MinHeap::snapshot`] hands out the current contents as an
//!   immutable queue in O(1). Later pushes and pops don't affect it.
//!
//! A `MinHeap` is a single owner's handle. To share one logical queue between
//! threads, guard the handle with a lock; snapshots themselves can be read from
//! any thread without one.
//!
//! # Example
//!
//! ```rust
//! use pairing_queue::stdlib_compat::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(5, "five");
//! heap.push(3, "three");
//! let before = heap.snapshot();
//!
//! assert_eq!(heap.pop(), Some((3, "three")));
//! assert_eq!(heap.peek(), Some((&5, &"five")));
//! assert_eq!(before.len(), 2); // snapshot unaffected
//! ```

use crate::queue::PriorityQueue;

/// A mutable min-heap handle backed by a persistent queue
pub struct MinHeap<K, V> {
    queue: PriorityQueue<K, V>,
}

impl<K, V> MinHeap<K, V> {
    /// Creates a new empty heap
    pub const fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the smallest key and its value without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.queue.min()
    }

    /// Returns the current contents as an immutable queue - O(1)
    pub fn snapshot(&self) -> PriorityQueue<K, V> {
        self.queue.clone()
    }

    /// Consumes the handle, returning the queue it wraps
    pub fn into_queue(self) -> PriorityQueue<K, V> {
        self.queue
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.queue = PriorityQueue::new();
    }
}

impl<K: Ord + Clone, V: Clone> MinHeap<K, V> {
    /// Pushes an element onto the heap - O(1)
    pub fn push(&mut self, key: K, value: V) {
        self.queue.replace_with_put(key, value);
    }

    /// Removes and returns the smallest key and its value - O(log n) amortized
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.queue.replace_with_pop()
    }

    /// Moves every element of `other` into this heap - O(1)
    pub fn append(&mut self, other: &mut Self) {
        let other = std::mem::take(&mut other.queue);
        self.queue = self.queue.merge(&other);
    }
}

impl<K, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<PriorityQueue<K, V>> for MinHeap<K, V> {
    fn from(queue: PriorityQueue<K, V>) -> Self {
        Self { queue }
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for MinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> Extend<(K, V)> for MinHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
