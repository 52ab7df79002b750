//! A singly-linked FIFO queue of owned text.
//!
//! [`LinkedQueue`] supports insertion at either end, removal from the head, an
//! O(1) size query, in-place reversal and a stable in-place merge sort.
//! [`handle`] exposes the same operations for callers that may hold no queue.

pub mod deque;
pub mod error;
pub mod linear_list;
mod raw;

pub use deque::{handle, LinkedQueue};
pub use error::{Error, Result};
pub use linear_list::LinkedList;
