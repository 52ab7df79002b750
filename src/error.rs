//! Errors

use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

/// Queue errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node or queue allocation returned null
    #[error("failed to allocate {size} bytes")]
    Allocation { size: usize },

    /// The text buffer of a new element could not be reserved
    #[error("failed to reserve value buffer: {0}")]
    ValueBuffer(#[from] TryReserveError),

    /// Removal from an empty queue
    #[error("queue is empty")]
    Empty,

    /// An operation was called without a queue
    #[error("no queue")]
    NoQueue,
}

impl Error {
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. } | Error::ValueBuffer(_))
    }
}
