use crate::error::Result;
use crate::raw;

use std::cmp::min;
use std::ptr::NonNull;

type Link = Option<NonNull<Node>>;

struct Node {
    value: String,
    next: Link,
}

impl Node {
    // `value` is dropped here if the node itself cannot be allocated
    fn alloc(value: String) -> Result<NonNull<Self>> {
        unsafe {
            let ptr = raw::alloc::<Node>()?;
            ptr.as_ptr().write(Self { value, next: None });
            Ok(ptr)
        }
    }

    // cond: ptr is detached from any list
    unsafe fn consume(ptr: NonNull<Self>) -> String {
        let node = ptr.as_ptr().read();
        raw::dealloc(ptr);
        node.value
    }
}

fn copy_value(s: &str) -> Result<String> {
    let mut value = String::new();
    value.try_reserve_exact(s.len())?;
    value.push_str(s);
    Ok(value)
}

// Singly-linked list of owned text.
// The chain from `head` owns every node, `tail` only aliases the last one.
pub struct LinkedList {
    head: Link,
    tail: Link,
    len: usize,
    // invariant: tail.is_none() == head.is_none()
    // invariant: tail is len - 1 steps from head and tail.next is None
}

unsafe impl Send for LinkedList {}
unsafe impl Sync for LinkedList {}

impl LinkedList {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&str> {
        self.head
            .map(|ptr| unsafe { (*ptr.as_ptr()).value.as_str() })
    }

    pub fn push_front(&mut self, s: &str) -> Result<()> {
        let mut node_ptr = Node::alloc(copy_value(s)?)?;
        unsafe { node_ptr.as_mut().next = self.head };
        if self.tail.is_none() {
            self.tail = Some(node_ptr);
        }
        self.head = Some(node_ptr);
        self.len += 1;
        Ok(())
    }

    pub fn push_back(&mut self, s: &str) -> Result<()> {
        let node_ptr = Node::alloc(copy_value(s)?)?;
        match self.tail {
            Some(mut tail_ptr) => unsafe { tail_ptr.as_mut().next = Some(node_ptr) },
            None => self.head = Some(node_ptr),
        }
        self.tail = Some(node_ptr);
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<String> {
        let ptr = self.head?;
        unsafe {
            self.head = ptr.as_ref().next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Some(Node::consume(ptr))
        }
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(ptr) = cur {
            unsafe {
                cur = ptr.as_ref().next;
                drop(Node::consume(ptr));
            }
        }
    }

    /// Reverses the list in place by relinking nodes.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut reversed: Link = None;
        let mut rest = self.head;
        self.tail = self.head;

        while let Some(mut ptr) = rest {
            unsafe {
                rest = ptr.as_ref().next;
                ptr.as_mut().next = reversed;
            }
            reversed = Some(ptr);
        }
        self.head = reversed;
    }

    /// Stable ascending sort by byte-wise comparison of the values.
    ///
    /// Bottom-up merge sort over the existing nodes. Each pass merges adjacent
    /// pairs of blocks behind a virtual head, doubling the block size until a
    /// single block covers the whole list. Nothing is allocated or freed.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        let n = self.len;
        let mut virtual_head = Node {
            value: String::new(),
            next: self.head.take(),
        };
        let anchor = NonNull::from(&mut virtual_head);
        let mut last = anchor;
        let mut block_size = 1;

        while block_size < n {
            log::trace!("merge pass: block_size={} len={}", block_size, n);
            last = anchor;
            let mut rest = unsafe { anchor.as_ref().next };
            let mut merged = 0;

            while merged < n {
                let left_len = min(n - merged, block_size);
                // zero when the left block reaches the end of the list
                let right_len = min(n - merged - left_len, block_size);
                unsafe {
                    let left = rest;
                    let right = split_off(left, left_len);
                    rest = split_off(right, right_len);
                    last = merge(last, left, right);
                }
                merged += left_len + right_len;
            }

            block_size <<= 1;
        }

        self.head = virtual_head.next;
        self.tail = Some(last);
    }
}

// Cuts the chain after `count` nodes and returns the remainder.
// cond: the chain starting at head holds at least `count` nodes
unsafe fn split_off(head: Link, count: usize) -> Link {
    if count == 0 {
        return head;
    }
    let mut ptr = head?;
    for _ in 1..count {
        ptr = ptr.as_ref().next?;
    }
    ptr.as_mut().next.take()
}

// Links the merge of `left` and `right` after `last` and returns the new last node.
// Ties take the left node first.
unsafe fn merge(mut last: NonNull<Node>, mut left: Link, mut right: Link) -> NonNull<Node> {
    while let (Some(l), Some(r)) = (left, right) {
        let next = if l.as_ref().value <= r.as_ref().value {
            left = l.as_ref().next;
            l
        } else {
            right = r.as_ref().next;
            r
        };
        last.as_mut().next = Some(next);
        last = next;
    }

    last.as_mut().next = left.or(right);
    while let Some(next) = last.as_ref().next {
        last = next;
    }
    last
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
impl LinkedList {
    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .map(|ptr| unsafe { ptr.as_ref().value.clone() })
            .collect()
    }

    fn nodes(&self) -> Vec<NonNull<Node>> {
        let mut nodes = Vec::new();
        let mut cur = self.head;
        while let Some(ptr) = cur {
            nodes.push(ptr);
            cur = unsafe { ptr.as_ref().next };
        }
        nodes
    }

    pub(crate) fn check_invariants(&self) {
        let nodes = self.nodes();
        assert_eq!(nodes.len(), self.len);
        assert_eq!(self.head.is_none(), self.tail.is_none());
        assert_eq!(nodes.last().copied(), self.tail);
        if let Some(tail) = self.tail {
            assert!(unsafe { tail.as_ref().next.is_none() });
        }
    }
}
