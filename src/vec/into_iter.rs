use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use crate::storage::{Global, RawAlloc, RawMemory};

/// An owning iterator over the elements of a [`Vector`](super::Vector).
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T, A: RawAlloc = Global> {
    data: RawMemory<T, A>,
    remain: Range<usize>,
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    /// `data` must hold live values in the slots `[0, len)`.
    pub(super) fn new(data: RawMemory<T, A>, len: usize) -> Self {
        Self {
            data,
            remain: 0..len,
        }
    }

    /// The elements which have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(
                self.data.slot_ptr(self.remain.start),
                self.remain.len(),
            )
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let start = self.remain.start;
        let count = self.remain.len();
        unsafe { slice::from_raw_parts_mut(self.data.slot_mut_ptr(start), count) }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let index = self.remain.next()?;
        Some(unsafe { self.data.slot(index).assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (len, Some(len))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        let index = self.remain.next_back()?;
        Some(unsafe { self.data.slot(index).assume_init_read() })
    }
}

impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let rest: *mut [T] = self.as_mut_slice();
        self.remain.start = self.remain.end;
        unsafe { ptr::drop_in_place(rest) };
    }
}
