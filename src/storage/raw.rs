use core::alloc::Layout;
use core::fmt;
use core::mem::{self, size_of, MaybeUninit};
use core::ptr::NonNull;
use core::slice;

use const_default::ConstDefault;

use crate::error::StorageError;

use super::alloc::{Global, RawAlloc, RawAllocNew};
use super::utils::array_layout;

/// An owned block of uninitialized slots for values of type `T`.
///
/// `RawMemory` never constructs or drops a `T`. Which slots hold live values
/// is tracked by the owner, and every live value must be dropped by that
/// owner before the block is released, otherwise the values are leaked.
///
/// The capacity is fixed when the block is created. Growing means
/// allocating a second block and exchanging it with [`RawMemory::swap`].
///
/// An empty block (capacity 0), or any block of a zero-sized type, holds
/// a dangling pointer and owns no allocation.
pub struct RawMemory<T, A: RawAlloc = Global> {
    buffer: NonNull<T>,
    capacity: usize,
    alloc: A,
}

impl<T, A: RawAllocNew> RawMemory<T, A> {
    /// Create an empty block without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(A::NEW)
    }

    /// Allocate a block of `capacity` slots.
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_with_capacity_in(capacity, A::NEW)
    }

    /// Allocate a block of `capacity` slots, panicking on failure.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }
}

impl<T, A: RawAlloc> RawMemory<T, A> {
    /// Create an empty block which will allocate from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buffer: NonNull::dangling(),
            capacity: 0,
            alloc,
        }
    }

    /// Allocate a block of `capacity` slots from `alloc`.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new_in(alloc));
        }
        let layout = array_layout::<T>(capacity)?;
        let buffer = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            match alloc.try_alloc(layout) {
                Some(ptr) => ptr.cast(),
                None => return Err(StorageError::AllocError { capacity }),
            }
        };
        Ok(Self {
            buffer,
            capacity,
            alloc,
        })
    }

    /// Allocate a block of `capacity` slots from `alloc`, panicking on failure.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_ptr()
    }

    /// The address of the slot at `offset`. The one-past-the-end address
    /// (`offset == capacity`) may be computed but must not be dereferenced.
    #[inline]
    pub fn slot_ptr(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity, "slot offset out of range");
        self.buffer.as_ptr().wrapping_add(offset)
    }

    /// The mutable address of the slot at `offset`, with the same bounds as
    /// [`RawMemory::slot_ptr`].
    #[inline]
    pub fn slot_mut_ptr(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity, "slot offset out of range");
        self.buffer.as_ptr().wrapping_add(offset)
    }

    /// Access the slot at `index`, panicking if `index >= capacity`.
    #[inline]
    pub fn slot(&self, index: usize) -> &MaybeUninit<T> {
        &self.as_uninit_slice()[index]
    }

    /// Mutably access the slot at `index`, panicking if `index >= capacity`.
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        &mut self.as_uninit_slice_mut()[index]
    }

    #[inline]
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast(), self.capacity) }
    }

    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.buffer.as_ptr().cast(), self.capacity) }
    }

    /// Move the block out, leaving an empty block behind that allocates
    /// from a copy of the same allocator.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }

    /// Exchange blocks, capacities and allocators with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T, A: RawAllocNew> ConstDefault for RawMemory<T, A> {
    const DEFAULT: Self = Self::new();
}

impl<T, A: RawAllocNew> Default for RawMemory<T, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: RawAlloc> fmt::Debug for RawMemory<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("capacity", &self.capacity)
            .field("alloc", &self.alloc)
            .finish_non_exhaustive()
    }
}

impl<T, A: RawAlloc> Drop for RawMemory<T, A> {
    fn drop(&mut self) {
        let size = size_of::<T>() * self.capacity;
        if size > 0 {
            // SAFETY: the same layout was validated when the block was allocated
            let layout = unsafe { Layout::from_size_align_unchecked(size, mem::align_of::<T>()) };
            unsafe { self.alloc.release(self.buffer.cast(), layout) };
        }
    }
}

// The block is uniquely owned, so thread-safety follows the element type
// and the allocator.
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawMemory<T, A> {}

unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawMemory<T, A> {}
