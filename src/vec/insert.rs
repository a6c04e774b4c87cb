use core::mem::MaybeUninit;
use core::ptr;

/// Writes values into consecutive uninitialized slots.
///
/// If it is dropped before [`Inserter::complete`] is called (for instance
/// while unwinding from a panicking `clone` or `default`), every value it
/// wrote is dropped again, so the owner's length never covers a slot that
/// was left half-built.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// Begin writing at `start`. Slots `[start, buf.len())` must be vacant.
    #[inline]
    pub fn new(buf: &'a mut [MaybeUninit<T>], start: usize) -> Self {
        assert!(start <= buf.len());
        Self {
            buf,
            start,
            end: start,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push(item.clone());
        }
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.end == self.buf.len()
    }

    /// Keep the written values and return the index one past the last of them.
    #[inline]
    pub fn complete(mut self) -> usize {
        self.start = self.end;
        self.end
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}
