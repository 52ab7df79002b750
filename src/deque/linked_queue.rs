use crate::error::{Error, Result};
use crate::linear_list::LinkedList;
use crate::raw;

/// FIFO queue of owned text.
pub struct LinkedQueue(LinkedList);

impl LinkedQueue {
    pub fn new() -> Self {
        Self(LinkedList::new())
    }

    /// Builds an empty queue on the heap, reporting allocation failure.
    pub fn try_boxed() -> Result<Box<Self>> {
        raw::try_box(Self::new())
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn front(&self) -> Option<&str> {
        self.0.front()
    }

    pub fn insert_head(&mut self, s: &str) -> Result<()> {
        self.0.push_front(s)
    }

    pub fn insert_tail(&mut self, s: &str) -> Result<()> {
        self.0.push_back(s)
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    /// Removes the head and copies its text into `buf`.
    ///
    /// At most `buf.len() - 1` bytes are copied, followed by a `0` terminator.
    /// An empty `buf` receives nothing. Returns the number of text bytes copied.
    pub fn remove_head(&mut self, buf: &mut [u8]) -> Result<usize> {
        let value = self.pop().ok_or(Error::Empty)?;
        Ok(copy_truncated(&value, buf))
    }

    pub fn reverse(&mut self) {
        self.0.reverse()
    }

    pub fn sort(&mut self) {
        self.0.sort()
    }

    pub fn into_linked_list(self) -> LinkedList {
        self.0
    }
}

impl Default for LinkedQueue {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let n = value.len().min(buf.len() - 1);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n] = 0;
    n
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linked_queue() {
        let mut q = LinkedQueue::new();
        assert!(q.is_empty());
        assert!(matches!(q.remove_head(&mut [0; 8]), Err(Error::Empty)));
        assert_eq!(q.size(), 0);

        q.insert_tail("banana").unwrap();
        q.insert_tail("apple").unwrap();
        q.insert_head("cherry").unwrap();
        assert_eq!(q.size(), 3);
        assert_eq!(q.front(), Some("cherry"));

        q.sort();
        assert_eq!(q.pop().as_deref(), Some("apple"));

        q.insert_tail("apple").unwrap();
        q.reverse();
        // [apple, cherry, banana]
        let mut buf = [0xff; 16];
        assert_eq!(q.remove_head(&mut buf).unwrap(), 5);
        assert_eq!(&buf[..6], b"apple\0");

        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.size(), 0);
        assert_eq!(q.front(), None);
        assert!(q.pop().is_none());

        q.insert_tail("fig").unwrap();
        q.insert_head("date").unwrap();
        assert_eq!(q.size(), 2);

        let list = q.into_linked_list();
        list.check_invariants();
        assert_eq!(list.to_vec(), ["date", "fig"]);
    }

    #[test]
    fn test_remove_head_truncates() {
        let mut q = LinkedQueue::new();
        q.insert_tail("elderberry").unwrap();
        q.insert_tail("fig").unwrap();
        q.insert_tail("grape").unwrap();
        q.insert_tail("kiwi").unwrap();

        let mut buf = [0xff; 5];
        assert_eq!(q.remove_head(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"elde\0");

        // exactly fits with its terminator
        let mut buf = [0xff; 4];
        assert_eq!(q.remove_head(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"fig\0");

        // no room for the terminator
        let mut buf = [0xff; 5];
        assert_eq!(q.remove_head(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"grap\0");

        // zero capacity removes without copying
        let mut buf = [0u8; 0];
        assert_eq!(q.remove_head(&mut buf).unwrap(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn test_try_boxed() {
        let mut q = LinkedQueue::try_boxed().unwrap();
        assert!(q.is_empty());
        q.insert_head("date").unwrap();
        assert_eq!(q.len(), 1);
    }
}
