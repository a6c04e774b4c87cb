use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

/// A source of raw memory blocks for [`RawMemory`](super::RawMemory).
///
/// Implementations only hand out and take back bytes. They never see element
/// values.
pub trait RawAlloc: fmt::Debug {
    /// Obtain a block for `layout`, which always has a non-zero size.
    /// Returns `None` when memory is exhausted.
    fn try_alloc(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Return a block to the allocator.
    ///
    /// # Safety
    /// `ptr` must have been produced by `try_alloc` on this allocator (or a
    /// clone of it) with the same `layout`, and must not be used afterwards.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).try_alloc(layout)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).release(ptr, layout)
    }
}

/// Allocators which can be produced in a constant context, so that empty
/// collections may be created by a `const fn`.
pub trait RawAllocNew: RawAlloc + Clone {
    /// The allocator instance
    const NEW: Self;
}

/// The global heap allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Global;

#[cfg(feature = "alloc")]
impl RawAlloc for Global {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() > 0);
        NonNull::new(unsafe { raw_alloc(layout) })
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        raw_dealloc(ptr.as_ptr(), layout);
    }
}

#[cfg(not(feature = "alloc"))]
// Without a heap every request fails, which surfaces as `StorageError::AllocError`.
impl RawAlloc for Global {
    #[inline]
    fn try_alloc(&self, _layout: Layout) -> Option<NonNull<u8>> {
        None
    }

    #[inline]
    unsafe fn release(&self, _ptr: NonNull<u8>, _layout: Layout) {}
}

impl RawAllocNew for Global {
    const NEW: Self = Global;
}
