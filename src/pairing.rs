//! Persistent Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multiway tree with:
//! - O(1) insert, meld and find_min
//! - O(log n) amortized delete_min
//!
//! # Persistence
//!
//! Every operation takes `&self` and returns a new heap; the heap it was called
//! on is left untouched. Nodes are shared through [`Arc`], so cloning a heap is
//! O(1) and old versions stay valid for as long as anyone holds them. When a
//! node turns out to be uniquely owned it is updated in place instead of being
//! copied, which keeps single-owner workloads close to an imperative heap.
//!
//! # Delete-min
//!
//! Removing the root leaves its children as a list of sub-heaps. They are
//! combined in two passes:
//!
//! 1. **Pairing pass**: meld adjacent children left to right, `(h0, h1)`,
//!    `(h2, h3)`, ...
//! 2. **Folding pass**: meld the resulting pairs right to left into one heap.
//!
//! Melding the children naively in one left-to-right pass can cost linear time
//! per delete_min; pairing first is what bounds the amortized cost.
//!
//! # Ties
//!
//! When two roots compare equal, the root of the *second* meld operand wins.
//! Since [`PairingHeap::put`] melds the new singleton in as the second operand,
//! the most recently inserted of several equal minimum keys surfaces first.
//!
//! # References
//!
//! - Fredman, M.L., Sedgewick, R., Sleator, D.D., and Tarjan, R.E. (1986).
//!   "The pairing heap: A new form of self-adjusting heap". Algorithmica 1(1):111-129.
//! - Okasaki, C. (1998). "Purely Functional Data Structures". Cambridge University Press.

use smallvec::SmallVec;
use std::fmt;
use std::mem;
use std::sync::Arc;

/// Buffer for the sub-heaps released by a delete_min
type SubHeaps<K, V> = SmallVec<[Arc<Node<K, V>>; 8]>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    children: Children<K, V>,
}

/// Persistent list of sub-heaps, most recently linked first
///
/// Tails are shared between versions, so prepending a child never copies the
/// siblings already in the list.
struct Children<K, V> {
    head: Option<Arc<Link<K, V>>>,
}

struct Link<K, V> {
    heap: Arc<Node<K, V>>,
    rest: Children<K, V>,
}

impl<K, V> Children<K, V> {
    const fn new() -> Self {
        Children { head: None }
    }

    fn push_front(self, heap: Arc<Node<K, V>>) -> Self {
        Children {
            head: Some(Arc::new(Link { heap, rest: self })),
        }
    }

    /// Detaches every sub-heap, in list order, leaving this list empty
    ///
    /// Links that nobody else references are dismantled and their heaps moved
    /// out; shared links are only read, so other versions keep their view.
    fn take_all(&mut self) -> SubHeaps<K, V> {
        let mut heaps = SubHeaps::new();
        let mut next = self.head.take();

        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut link) => {
                    next = link.rest.head.take();
                    heaps.push(link.heap);
                }
                Err(shared) => {
                    next = shared.rest.head.clone();
                    heaps.push(Arc::clone(&shared.heap));
                }
            }
        }

        heaps
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = &Node<K, V>> {
        std::iter::successors(self.head.as_deref(), |link| link.rest.head.as_deref())
            .map(|link| &*link.heap)
    }
}

impl<K, V> Clone for Children<K, V> {
    fn clone(&self) -> Self {
        Children {
            head: self.head.clone(),
        }
    }
}

impl<K, V> Default for Children<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Children<K, V> {
    fn drop(&mut self) {
        // Sorted input builds child lists and parent chains as long as the heap
        // itself, so tear down with an explicit stack instead of recursing.
        let mut pending: Vec<Arc<Link<K, V>>> = self.head.take().into_iter().collect();

        while let Some(link) = pending.pop() {
            let Ok(mut link) = Arc::try_unwrap(link) else {
                continue;
            };
            pending.extend(link.rest.head.take());
            if let Ok(mut node) = Arc::try_unwrap(link.heap) {
                pending.extend(node.children.head.take());
            }
        }
    }
}

/// Persistent Pairing Heap
///
/// A min-heap of `(key, value)` pairs ordered by key. Values are opaque
/// payloads and never compared.
///
/// # Example
///
/// ```rust
/// use pairing_queue::PairingHeap;
///
/// let empty = PairingHeap::new();
/// let heap = empty.put(5, "five").put(3, "three").put(7, "seven");
///
/// assert_eq!(heap.min(), Some((&3, &"three")));
/// assert!(empty.is_empty());
///
/// let ((key, value), rest) = heap.pop().unwrap();
/// assert_eq!((key, value), (3, "three"));
/// assert_eq!(rest.min(), Some((&5, &"five")));
/// assert_eq!(heap.min(), Some((&3, &"three")));
/// ```
pub struct PairingHeap<K, V> {
    root: Option<Arc<Node<K, V>>>,
}

impl<K, V> PairingHeap<K, V> {
    /// Creates a new empty heap
    pub const fn new() -> Self {
        PairingHeap { root: None }
    }

    /// Creates a heap holding a single element
    pub fn singleton(key: K, value: V) -> Self {
        PairingHeap {
            root: Some(Arc::new(Node {
                key,
                value,
                children: Children::new(),
            })),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the minimum key and its value - O(1)
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(|node| (&node.key, &node.value))
    }
}

impl<K: Ord + Clone, V: Clone> PairingHeap<K, V> {
    /// Melds two heaps into one - O(1)
    ///
    /// On equal root keys, the root of `other` becomes the new root.
    pub fn meld(&self, other: &Self) -> Self {
        self.clone().into_meld(other.clone())
    }

    /// Inserts an element - O(1)
    pub fn put(&self, key: K, value: V) -> Self {
        self.clone().into_meld(PairingHeap::singleton(key, value))
    }

    /// Returns a copy of the minimum element, or `default` if the heap is empty - O(1)
    pub fn min_or(&self, default: (K, V)) -> (K, V) {
        match self.min() {
            Some((key, value)) => (key.clone(), value.clone()),
            None => default,
        }
    }

    /// Removes the minimum element - O(log n) amortized
    ///
    /// Deleting from an empty heap returns an empty heap.
    pub fn delete_min(&self) -> Self {
        self.clone().into_delete_min()
    }

    /// Removes the minimum element, returning it with the remaining heap - O(log n) amortized
    pub fn pop(&self) -> Option<((K, V), Self)> {
        self.clone().into_pop()
    }

    /// Like [`pop`](Self::pop), but returns `default` and an empty heap when empty
    pub fn pop_or(&self, default: (K, V)) -> ((K, V), Self) {
        self.pop().unwrap_or((default, PairingHeap::new()))
    }

    pub(crate) fn into_meld(self, other: Self) -> Self {
        match (self.root, other.root) {
            (None, root) | (root, None) => PairingHeap { root },
            (Some(first), Some(second)) => PairingHeap {
                root: Some(link(first, second)),
            },
        }
    }

    pub(crate) fn into_delete_min(self) -> Self {
        let Some(root) = self.root else {
            return PairingHeap::new();
        };

        let mut children = match Arc::try_unwrap(root) {
            Ok(mut node) => mem::take(&mut node.children),
            Err(shared) => shared.children.clone(),
        };

        PairingHeap {
            root: pair_up(children.take_all()),
        }
    }

    pub(crate) fn into_pop(self) -> Option<((K, V), Self)> {
        let Node {
            key,
            value,
            mut children,
        } = Arc::unwrap_or_clone(self.root?);

        let rest = PairingHeap {
            root: pair_up(children.take_all()),
        };
        Some(((key, value), rest))
    }
}

/// Makes the larger root the first child of the smaller one
///
/// Ties go to `second`.
fn link<K: Ord + Clone, V: Clone>(
    first: Arc<Node<K, V>>,
    second: Arc<Node<K, V>>,
) -> Arc<Node<K, V>> {
    let (mut winner, loser) = if first.key < second.key {
        (first, second)
    } else {
        (second, first)
    };

    let node = Arc::make_mut(&mut winner);
    let children = mem::take(&mut node.children);
    node.children = children.push_front(loser);
    winner
}

/// Combines the sub-heaps left behind by a deleted root
fn pair_up<K: Ord + Clone, V: Clone>(heaps: SubHeaps<K, V>) -> Option<Arc<Node<K, V>>> {
    let mut pairs = SubHeaps::with_capacity(heaps.len().div_ceil(2));
    let mut heaps = heaps.into_iter();

    while let Some(first) = heaps.next() {
        match heaps.next() {
            Some(second) => pairs.push(link(first, second)),
            None => pairs.push(first),
        }
    }

    let mut merged = pairs.pop()?;
    while let Some(pair) = pairs.pop() {
        merged = link(pair, merged);
    }
    Some(merged)
}

impl<K, V> Clone for PairingHeap<K, V> {
    fn clone(&self) -> Self {
        PairingHeap {
            root: self.root.clone(),
        }
    }
}

impl<K, V> Default for PairingHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PairingHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("min", &self.min())
            .finish()
    }
}

#[cfg(test)]
impl<K: Ord, V> PairingHeap<K, V> {
    fn nodes(&self) -> Vec<&Node<K, V>> {
        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children.iter());
            nodes.push(node);
        }
        nodes
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub(crate) fn is_heap_ordered(&self) -> bool {
        self.nodes()
            .iter()
            .all(|node| node.children.iter().all(|child| child.key >= node.key))
    }

    fn root_degree(&self) -> usize {
        self.root
            .as_deref()
            .map_or(0, |node| node.children.iter().count())
    }
}
