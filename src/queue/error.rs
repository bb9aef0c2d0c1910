//! Error types for queue construction and submission.

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported synchronously by [`PriorityQueue`](super::PriorityQueue).
///
/// None of these leave the queue in a modified state: a failed `push`
/// stores nothing, and a failed construction returns no instance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Requested capacity truncates to less than one slot.
    #[error("invalid capacity {requested}: a queue needs room for at least 1 entry")]
    InvalidCapacity { requested: f64 },

    /// Priority value cannot be ordered or cannot back a bucket layout.
    #[error("priority '{value}' is not a valid priority")]
    InvalidPriority { value: f64 },

    /// Queue is at capacity; the entry was not stored.
    #[error("queue at capacity {capacity}, cannot add")]
    QueueFull { capacity: usize },
}

impl Error {
    /// Create an invalid capacity error.
    pub fn invalid_capacity(requested: f64) -> Self {
        Self::InvalidCapacity { requested }
    }

    /// Create an invalid priority error.
    pub fn invalid_priority(value: f64) -> Self {
        Self::InvalidPriority { value }
    }

    /// Create a queue full error.
    pub fn queue_full(capacity: usize) -> Self {
        Self::QueueFull { capacity }
    }

    /// Whether retrying after a `pop` could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::QueueFull { .. })
    }
}
