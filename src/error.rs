//! Error type for the fail-fast queue operations

use std::fmt;

/// Error type for queue operations
///
/// Only the fail-fast family (`try_min`, `try_pop`, `try_delete_min`) returns
/// this; every other operation is total and reports emptiness through `Option`
/// or a caller-supplied default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The operation needs at least one element but the queue is empty
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
