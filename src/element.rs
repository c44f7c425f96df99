//! Element shapes accepted by insertion
//!
//! A queue element can be given as a bare key, a one-element container
//! holding a key, or an explicit `(key, value)` pair. All of them normalize to
//! a `(key, value)` pair before reaching the heap; a missing value becomes
//! `V::default()`, so `V = Option<T>` gives the usual "absent" sentinel.

/// One element to insert into a [`PriorityQueue`](crate::PriorityQueue)
///
/// # Example
///
/// ```rust
/// use pairing_queue::Element;
///
/// let bare: Element<i32, Option<&str>> = Element::Key(4);
/// let pair: Element<i32, Option<&str>> = (1, Some("first")).into();
/// let boxed: Element<i32, Option<&str>> = [8].into();
///
/// assert_eq!(bare.into_pair(), (4, None));
/// assert_eq!(pair.into_pair(), (1, Some("first")));
/// assert_eq!(boxed.into_pair(), (8, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<K, V> {
    /// A key with no value
    Key(K),
    /// A key with an explicit value
    Pair(K, V),
}

impl<K, V> Element<K, V> {
    /// Returns the key of this element
    pub fn key(&self) -> &K {
        match self {
            Element::Key(key) | Element::Pair(key, _) => key,
        }
    }

    /// Normalizes the element to a `(key, value)` pair
    pub fn into_pair(self) -> (K, V)
    where
        V: Default,
    {
        match self {
            Element::Key(key) => (key, V::default()),
            Element::Pair(key, value) => (key, value),
        }
    }
}

impl<K, V> From<(K, V)> for Element<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Element::Pair(key, value)
    }
}

impl<K, V> From<(K,)> for Element<K, V> {
    fn from((key,): (K,)) -> Self {
        Element::Key(key)
    }
}

impl<K, V> From<[K; 1]> for Element<K, V> {
    fn from([key]: [K; 1]) -> Self {
        Element::Key(key)
    }
}
