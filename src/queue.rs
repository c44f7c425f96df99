//! Persistent priority queue with an element count
//!
//! [`PriorityQueue`] wraps a [`PairingHeap`] and tracks how many elements it
//! holds, so [`len`](PriorityQueue::len) is O(1). Every operation delegates to
//! exactly one heap operation and adjusts the count.
//!
//! Like the heap, the queue is a value: operations return a new queue and leave
//! the one they were called on unchanged. Cloning is O(1).
//!
//! # Operation families
//!
//! | Operation    | Empty queue behaviour                     |
//! |--------------|-------------------------------------------|
//! | `min`        | `None`                                    |
//! | `min_or`     | returns the supplied default              |
//! | `try_min`    | `Err(QueueError::EmptyQueue)`             |
//! | `pop`        | `None`                                    |
//! | `pop_or`     | returns the default and the queue as-is   |
//! | `try_pop`    | `Err(QueueError::EmptyQueue)`             |
//! | `delete_min` | returns the queue as-is                   |
//! | `try_delete_min` | `Err(QueueError::EmptyQueue)`         |

use crate::element::Element;
use crate::error::QueueError;
use crate::pairing::PairingHeap;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Persistent min-priority queue of `(key, value)` pairs
///
/// # Example
///
/// ```rust
/// use pairing_queue::{Element, PriorityQueue};
///
/// let queue: PriorityQueue<i32, Option<&str>> = PriorityQueue::from_elements([
///     Element::Key(4),
///     Element::Pair(8, None),
///     Element::Key(3),
///     Element::Pair(1, Some("first")),
/// ]);
///
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.min(), Some((&1, &Some("first"))));
/// assert_eq!(queue.keys(), vec![1, 3, 4, 8]);
///
/// let smaller = queue.delete_min();
/// assert_eq!(smaller.len(), 3);
/// assert_eq!(queue.len(), 4);
/// ```
pub struct PriorityQueue<K, V> {
    size: usize,
    heap: PairingHeap<K, V>,
}

impl<K, V> PriorityQueue<K, V> {
    /// Creates a new empty queue
    pub const fn new() -> Self {
        PriorityQueue {
            size: 0,
            heap: PairingHeap::new(),
        }
    }

    /// Returns the number of elements in the queue - O(1)
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the queue holds no elements - O(1)
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the minimum key and its value - O(1)
    pub fn min(&self) -> Option<(&K, &V)> {
        self.heap.min()
    }

    /// Returns the minimum key and its value, failing on an empty queue - O(1)
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn try_min(&self) -> Result<(&K, &V), QueueError> {
        self.heap.min().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the underlying heap
    pub fn as_heap(&self) -> &PairingHeap<K, V> {
        &self.heap
    }
}

impl<K: Ord + Clone, V: Clone> PriorityQueue<K, V> {
    /// Builds a queue from elements of any accepted shape
    ///
    /// Bare keys get `V::default()` as their value.
    pub fn from_elements<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element<K, V>>,
        V: Default,
    {
        elements
            .into_iter()
            .map(|element| element.into().into_pair())
            .collect()
    }

    /// Inserts an element - O(1)
    pub fn put(&self, key: K, value: V) -> Self {
        PriorityQueue {
            size: self.size + 1,
            heap: self.heap.put(key, value),
        }
    }

    /// Inserts an element given in any accepted shape - O(1)
    ///
    /// ```rust
    /// use pairing_queue::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32, Option<char>> = PriorityQueue::new()
    ///     .put_element((2, Some('b')))
    ///     .put_element([1]);
    /// assert_eq!(queue.to_vec(), vec![(1, None), (2, Some('b'))]);
    /// ```
    pub fn put_element(&self, element: impl Into<Element<K, V>>) -> Self
    where
        V: Default,
    {
        let (key, value) = element.into().into_pair();
        self.put(key, value)
    }

    /// Returns a copy of the minimum element, or `default` if empty - O(1)
    pub fn min_or(&self, default: (K, V)) -> (K, V) {
        self.heap.min_or(default)
    }

    /// Removes the minimum element, returning it with the remaining queue - O(log n) amortized
    pub fn pop(&self) -> Option<((K, V), Self)> {
        self.clone().into_pop()
    }

    /// Like [`pop`](Self::pop), but returns `default` and this queue unchanged when empty
    pub fn pop_or(&self, default: (K, V)) -> ((K, V), Self) {
        self.pop().unwrap_or_else(|| (default, self.clone()))
    }

    /// Removes the minimum element, failing on an empty queue - O(log n) amortized
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn try_pop(&self) -> Result<((K, V), Self), QueueError> {
        self.pop().ok_or(QueueError::EmptyQueue)
    }

    /// Removes the minimum element - O(log n) amortized
    ///
    /// An empty queue is returned unchanged.
    pub fn delete_min(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        PriorityQueue {
            size: self.size - 1,
            heap: self.heap.delete_min(),
        }
    }

    /// Removes the minimum element, failing on an empty queue - O(log n) amortized
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn try_delete_min(&self) -> Result<Self, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(self.delete_min())
    }

    /// Merges two queues - O(1)
    ///
    /// Duplicate keys are all kept. On equal minimum keys, the minimum of
    /// `other` becomes the minimum of the result.
    pub fn merge(&self, other: &Self) -> Self {
        PriorityQueue {
            size: self.size + other.size,
            heap: self.heap.meld(&other.heap),
        }
    }

    /// Returns every element in ascending key order - O(n log n)
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.iter().collect()
    }

    /// Returns every key in ascending order - O(n log n)
    pub fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns every value in ascending key order - O(n log n)
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns an iterator that pops elements in ascending key order
    ///
    /// The iterator works on its own copy, so this queue is unaffected however
    /// far the iteration gets. Dropping the iterator early halts it; keeping it
    /// around and calling `next` later resumes where it stopped.
    pub fn iter(&self) -> Iter<K, V> {
        Iter {
            queue: self.clone(),
        }
    }

    /// Checks whether the exact `(key, value)` pair is in the queue
    ///
    /// Drains a copy in ascending order and gives up as soon as a key greater
    /// than `key` comes out.
    pub fn contains(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter()
            .take_while(|(k, _)| k <= key)
            .any(|(k, v)| k == *key && v == *value)
    }

    fn into_put(self, key: K, value: V) -> Self {
        PriorityQueue {
            size: self.size + 1,
            heap: self.heap.into_meld(PairingHeap::singleton(key, value)),
        }
    }

    fn into_pop(self) -> Option<((K, V), Self)> {
        let (element, heap) = self.heap.into_pop()?;
        let rest = PriorityQueue {
            size: self.size - 1,
            heap,
        };
        Some((element, rest))
    }

    pub(crate) fn replace_with_put(&mut self, key: K, value: V) {
        *self = mem::take(self).into_put(key, value);
    }

    pub(crate) fn replace_with_pop(&mut self) -> Option<(K, V)> {
        let (element, rest) = mem::take(self).into_pop()?;
        *self = rest;
        Some(element)
    }
}

impl<K, V> Clone for PriorityQueue<K, V> {
    fn clone(&self) -> Self {
        PriorityQueue {
            size: self.size,
            heap: self.heap.clone(),
        }
    }
}

impl<K, V> Default for PriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for PriorityQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("size", &self.size)
            .field("elements", &self.to_vec())
            .finish()
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for PriorityQueue<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<K: Ord + Clone, V: Clone> Extend<(K, V)> for PriorityQueue<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.replace_with_put(key, value);
        }
    }
}

impl<K: Ord + Clone, V: Clone> IntoIterator for PriorityQueue<K, V> {
    type Item = (K, V);
    type IntoIter = Iter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { queue: self }
    }
}

impl<K: Ord + Clone, V: Clone> IntoIterator for &PriorityQueue<K, V> {
    type Item = (K, V);
    type IntoIter = Iter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator popping elements from a queue in ascending key order
///
/// Created by [`PriorityQueue::iter`] or by `into_iter`.
pub struct Iter<K, V> {
    queue: PriorityQueue<K, V>,
}

impl<K, V> Iter<K, V> {
    /// Returns the elements not yet yielded, as a queue
    pub fn remaining(&self) -> &PriorityQueue<K, V> {
        &self.queue
    }
}

impl<K: Ord + Clone, V: Clone> Iterator for Iter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.replace_with_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<K: Ord + Clone, V: Clone> ExactSizeIterator for Iter<K, V> {}

impl<K: Ord + Clone, V: Clone> FusedIterator for Iter<K, V> {}

impl<K, V> Clone for Iter<K, V> {
    fn clone(&self) -> Self {
        Iter {
            queue: self.queue.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::ControlFlow;

    fn assert_consistent<K: Ord + Clone, V: Clone>(queue: &PriorityQueue<K, V>) {
        assert_eq!(queue.len(), queue.heap.node_count());
        assert_eq!(queue.is_empty(), queue.heap.is_empty());
        assert!(queue.heap.is_heap_ordered());
    }

    fn sample() -> PriorityQueue<i32, Option<&'static str>> {
        PriorityQueue::from_elements([
            Element::Key(4),
            Element::Pair(8, None),
            Element::Key(3),
            Element::Pair(1, Some("first")),
        ])
    }

    #[test]
    fn test_new_is_empty() {
        let queue: PriorityQueue<i32, ()> = PriorityQueue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.min(), None);
        assert_consistent(&queue);
    }

    #[test]
    fn test_sample_scenario() {
        let queue = sample();
        assert_consistent(&queue);
        assert_eq!(queue.keys(), vec![1, 3, 4, 8]);
        assert_eq!(queue.min(), Some((&1, &Some("first"))));
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.delete_min().len(), 3);
    }

    #[test]
    fn test_as_heap_exposes_same_minimum() {
        let queue = sample();
        assert_eq!(queue.as_heap().min(), queue.min());

        let ((key, value), rest) = queue.as_heap().pop().unwrap();
        assert_eq!((key, value), (1, Some("first")));
        assert_eq!(rest.min(), queue.delete_min().min());

        let empty: PriorityQueue<i32, ()> = PriorityQueue::new();
        assert!(empty.as_heap().is_empty());
    }

    #[test]
    fn test_values_follow_key_order() {
        assert_eq!(sample().values(), vec![Some("first"), None, None, None]);
    }

    #[test]
    fn test_fail_fast_on_empty() {
        let queue: PriorityQueue<i32, ()> = PriorityQueue::new();
        assert_eq!(queue.try_min(), Err(QueueError::EmptyQueue));
        assert!(matches!(queue.try_pop(), Err(QueueError::EmptyQueue)));
        assert!(matches!(
            queue.try_delete_min(),
            Err(QueueError::EmptyQueue)
        ));
    }

    #[test]
    fn test_fail_fast_on_non_empty() {
        let queue = sample();
        assert_eq!(queue.try_min(), Ok((&1, &Some("first"))));

        let (element, rest) = queue.try_pop().unwrap();
        assert_eq!(element, (1, Some("first")));
        assert_eq!(rest.len(), 3);

        let rest = queue.try_delete_min().unwrap();
        assert_eq!(rest.min(), Some((&3, &None)));
    }

    #[test]
    fn test_defaults_on_empty() {
        let queue: PriorityQueue<i32, Option<&str>> = PriorityQueue::new();
        assert_eq!(queue.min_or((0, Some("none"))), (0, Some("none")));

        let (element, rest) = queue.pop_or((-1, None));
        assert_eq!(element, (-1, None));
        assert!(rest.is_empty());

        let rest = queue.delete_min();
        assert!(rest.is_empty());
        assert_consistent(&rest);
    }

    #[test]
    fn test_pop_last_element_leaves_empty_queue() {
        let queue: PriorityQueue<i32, Option<()>> = PriorityQueue::new().put_element([1]);
        let (element, rest) = queue.pop().unwrap();
        assert_eq!(element, (1, None));
        assert!(rest.is_empty());
        assert_eq!(rest.len(), 0);
        assert_consistent(&rest);
    }

    #[test]
    fn test_merge_scenario() {
        let a: PriorityQueue<i32, Option<&str>> =
            PriorityQueue::from_elements([Element::Key(4), Element::Pair(8, None)]);
        let b = PriorityQueue::from_elements([Element::Key(3), Element::Pair(1, Some("first"))]);

        let merged = a.merge(&b);
        assert_consistent(&merged);
        assert_eq!(merged.len(), 4);
        assert_eq!(
            merged.to_vec(),
            vec![(1, Some("first")), (3, None), (4, None), (8, None)]
        );
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let a: PriorityQueue<i32, ()> = [(1, ()), (2, ())].into_iter().collect();
        let merged = a.merge(&a);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.keys(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_merge_tie_prefers_other() {
        let a = PriorityQueue::new().put(1, "a");
        let b = PriorityQueue::new().put(1, "b");
        assert_eq!(a.merge(&b).min(), Some((&1, &"b")));
    }

    #[test]
    fn test_operations_leave_original_untouched() {
        let queue = sample();
        let _ = queue.put(0, None);
        let _ = queue.pop();
        let _ = queue.delete_min();
        let _ = queue.merge(&sample());
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.keys(), vec![1, 3, 4, 8]);
    }

    #[test]
    fn test_iter_halt_and_resume() {
        let queue = sample();
        let mut iter = queue.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((1, Some("first"))));
        assert_eq!(iter.remaining().len(), 3);

        // Suspended here; resume later.
        let rest: Vec<i32> = iter.map(|(key, _)| key).collect();
        assert_eq!(rest, vec![3, 4, 8]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_try_fold_stops_on_break() {
        let queue = sample();
        let sum = queue.iter().try_fold(0, |acc, (key, _)| {
            if key > 3 {
                ControlFlow::Break(acc)
            } else {
                ControlFlow::Continue(acc + key)
            }
        });
        assert_eq!(sum, ControlFlow::Break(4));
    }

    #[test]
    fn test_iter_is_fused() {
        let mut iter = PriorityQueue::new().put(1, ()).into_iter();
        assert_eq!(iter.next(), Some((1, ())));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_contains() {
        let queue = sample();
        assert!(queue.contains(&1, &Some("first")));
        assert!(queue.contains(&8, &None));
        assert!(!queue.contains(&1, &None));
        assert!(!queue.contains(&2, &None));
        assert!(!queue.contains(&9, &None));
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_contains_among_duplicate_keys() {
        let queue = PriorityQueue::new().put(5, 'a').put(5, 'b').put(5, 'c');
        assert!(queue.contains(&5, &'a'));
        assert!(queue.contains(&5, &'c'));
        assert!(!queue.contains(&5, &'d'));
    }

    #[test]
    fn test_extend_counts_every_element() {
        let mut queue = PriorityQueue::new().put(10, 'x');
        let snapshot = queue.clone();
        queue.extend([(3, 'a'), (7, 'b'), (3, 'c')]);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.keys(), vec![3, 3, 7, 10]);
        assert_eq!(snapshot.len(), 1);
        assert_consistent(&queue);
    }

    #[test]
    fn test_debug_lists_ascending() {
        let queue = PriorityQueue::new().put(2, 'b').put(1, 'a');
        assert_eq!(
            format!("{:?}", queue),
            "PriorityQueue { size: 2, elements: [(1, 'a'), (2, 'b')] }"
        );
    }
}
