//! Persistent Priority Queues for Rust
//!
//! This crate provides a purely functional min-priority queue built on a
//! pairing heap. Every operation returns a new queue and leaves its input
//! untouched, so old versions stay valid and can be shared freely, including
//! across threads.
//!
//! # Features
//!
//! - **Pairing Heap** ([`PairingHeap`]): O(1) insert, meld and find-min;
//!   O(log n) amortized delete-min
//! - **Priority Queue** ([`PriorityQueue`]): the heap plus an O(1) element count,
//!   default-value and fail-fast operation variants, ordered iteration and
//!   membership queries
//! - **Mutable handle** ([`stdlib_compat::MinHeap`]): a `BinaryHeap`-like API with
//!   O(1) snapshots
//!
//! # Example
//!
//! ```rust
//! use pairing_queue::{PriorityQueue, QueueError};
//!
//! let empty: PriorityQueue<u32, &str> = PriorityQueue::new();
//! let queue = empty.put(5, "five").put(2, "two").put(9, "nine");
//!
//! assert_eq!(queue.min(), Some((&2, &"two")));
//! assert_eq!(queue.keys(), vec![2, 5, 9]);
//! assert_eq!(empty.try_min(), Err(QueueError::EmptyQueue));
//!
//! let ((key, _), rest) = queue.pop().unwrap();
//! assert_eq!(key, 2);
//! assert_eq!(rest.len(), 2);
//! assert_eq!(queue.len(), 3);
//! ```

pub mod element;
pub mod error;
pub mod pairing;
pub mod queue;
pub mod stdlib_compat;

// Re-export the main types for convenience
pub use element::Element;
pub use error::QueueError;
pub use pairing::PairingHeap;
pub use queue::{Iter, PriorityQueue};
