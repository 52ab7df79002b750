use crate::error::{Error, Result};

use std::alloc::Layout;
use std::mem::size_of;
use std::ptr::NonNull;

// Allocates uninitialized memory for one `T`.
// A null return from the global allocator becomes `Error::Allocation`.
pub unsafe fn alloc<T>() -> Result<NonNull<T>> {
    assert!(size_of::<T>() != 0);

    let layout = Layout::new::<T>();
    let ptr = std::alloc::alloc(layout) as *mut T;
    NonNull::new(ptr).ok_or(Error::Allocation {
        size: layout.size(),
    })
}

// cond: ptr came from `alloc::<T>` and its value has been moved out or dropped
pub unsafe fn dealloc<T>(ptr: NonNull<T>) {
    let layout = Layout::new::<T>();
    std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
}

/// Moves `value` into a fresh heap allocation, reporting failure instead of aborting.
pub fn try_box<T>(value: T) -> Result<Box<T>> {
    unsafe {
        let ptr = alloc::<T>()?;
        ptr.as_ptr().write(value);
        // memory from the global allocator with `Layout::new::<T>()` is valid for `Box<T>`
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_box() {
        let boxed = try_box(String::from("apple")).unwrap();
        assert_eq!(boxed.as_str(), "apple");
    }

    #[test]
    fn test_alloc_dealloc() {
        unsafe {
            let ptr = alloc::<u64>().unwrap();
            ptr.as_ptr().write(7);
            assert_eq!(ptr.as_ptr().read(), 7);
            dealloc(ptr);
        }
    }
}
