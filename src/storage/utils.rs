use core::alloc::Layout;

use crate::error::StorageError;

#[inline]
pub fn array_layout<T>(capacity: usize) -> Result<Layout, StorageError> {
    Layout::array::<T>(capacity).map_err(StorageError::LayoutError)
}

/// The capacity to grow to when a full buffer needs one more slot:
/// one slot for an empty buffer, otherwise double the current capacity.
#[inline]
pub fn grow_capacity(capacity: usize) -> Result<usize, StorageError> {
    if capacity == 0 {
        Ok(1)
    } else {
        capacity
            .checked_mul(2)
            .ok_or(StorageError::CapacityOverflow)
    }
}
