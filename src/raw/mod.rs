mod raw_alloc;

pub use raw_alloc::{alloc, dealloc, try_box};
