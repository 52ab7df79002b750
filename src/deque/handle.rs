//! Call surface that tolerates an absent queue.
//!
//! Every function takes the queue as an `Option` and reports failure through its
//! return value: `false`, `0`, `None`, or no effect.

use crate::deque::LinkedQueue;
use crate::error::{Error, Result};

fn present<T>(q: Option<T>) -> Result<T> {
    q.ok_or(Error::NoQueue)
}

fn report(op: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) if e.is_allocation() => {
            log::warn!("{}: {}", op, e);
            false
        }
        Err(e) => {
            log::debug!("{}: {}", op, e);
            false
        }
    }
}

/// Creates an empty queue, or `None` if it cannot be allocated.
pub fn new() -> Option<Box<LinkedQueue>> {
    match LinkedQueue::try_boxed() {
        Ok(q) => Some(q),
        Err(e) => {
            log::warn!("new: {}", e);
            None
        }
    }
}

/// Releases the queue and every element it holds.
pub fn destroy(q: Option<Box<LinkedQueue>>) {
    drop(q)
}

pub fn insert_head(q: Option<&mut LinkedQueue>, s: &str) -> bool {
    report("insert_head", present(q).and_then(|q| q.insert_head(s)))
}

pub fn insert_tail(q: Option<&mut LinkedQueue>, s: &str) -> bool {
    report("insert_tail", present(q).and_then(|q| q.insert_tail(s)))
}

pub fn remove_head(q: Option<&mut LinkedQueue>, buf: &mut [u8]) -> bool {
    let result = present(q).and_then(|q| q.remove_head(buf));
    report("remove_head", result.map(drop))
}

pub fn size(q: Option<&LinkedQueue>) -> usize {
    q.map_or(0, LinkedQueue::size)
}

pub fn reverse(q: Option<&mut LinkedQueue>) {
    if let Some(q) = q {
        q.reverse()
    }
}

pub fn sort(q: Option<&mut LinkedQueue>) {
    if let Some(q) = q {
        q.sort()
    }
}
