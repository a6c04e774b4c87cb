//! Raw, uninitialized storage.
//!
//! [`RawMemory`] owns a fixed number of slots and nothing else: it never
//! constructs or drops values. Element lifetimes are managed by the
//! collection built on top of it.

pub(crate) mod alloc;

mod raw;

pub(crate) mod utils;

pub use self::alloc::{Global, RawAlloc, RawAllocNew};
pub use self::raw::RawMemory;
