//! A growable array built on [`RawMemory`].
//!
//! # Capacity and relocation
//!
//! A [`Vector`] owns a single [`RawMemory`] block and a count of the live
//! elements at its front. When an insertion finds the block full, a new block
//! of twice the capacity (or one slot, for an empty vector) is allocated and
//! the elements are moved across. Moving a value in Rust is a bitwise copy
//! which cannot fail, so a relocation can only fail before any element has
//! been touched: while allocating, or while building the new element. In both
//! cases the vector is left exactly as it was.
//!
//! Operations which must leave their source intact (`clone`, `clone_from`,
//! `extend_from_slice`) clone elements instead. If a `clone` panics, the
//! copies made so far are dropped and the length is never left covering a
//! vacant slot.
//!
//! Raw pointers obtained from [`Vector::as_ptr`] and friends are invalidated
//! by any call which relocates storage or shifts elements.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::repeat;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::error::{InsertionError, StorageError};
use crate::storage::utils::grow_capacity;
use crate::storage::{Global, RawAlloc, RawAllocNew, RawMemory};

use self::insert::Inserter;

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

pub(crate) mod insert;
mod into_iter;

#[cold]
#[inline(never)]
fn index_panic(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for vector of length {len}");
}

#[cold]
#[inline(never)]
fn empty_panic(op: &str) -> ! {
    panic!("{op} on an empty vector");
}

/// Create a `Vector<T>` holding `count` clones of `elem`.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    Vector::from_iter(repeat(elem).take(count))
}

/// A contiguous growable array.
///
/// # Examples
///
/// ```
/// use advanced_vector::Vector;
///
/// let mut v = Vector::<i32>::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// v.insert(1, 99);
/// assert_eq!(v, [1, 99, 2, 3]);
/// v.erase(1);
/// v.resize(5);
/// assert_eq!(v, [1, 2, 3, 0, 0]);
/// ```
pub struct Vector<T, A: RawAlloc = Global> {
    data: RawMemory<T, A>,
    len: usize,
    _owns: PhantomData<T>,
}

impl<T, A: RawAllocNew> Vector<T, A> {
    /// Constructs a new, empty `Vector`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    pub const fn new() -> Self {
        Self::new_in(A::NEW)
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_with_capacity_in(capacity, A::NEW)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a vector of `len` default values, with a capacity of
    /// exactly `len`.
    pub fn try_with_len(len: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        Self::try_with_len_in(len, A::NEW)
    }

    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        match Self::try_with_len(len) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Clones every item of `data` into a new vector with a capacity of
    /// exactly `data.len()`.
    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(data, A::NEW)
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }
}

impl<T, A: RawAlloc> Vector<T, A> {
    pub const fn new_in(alloc: A) -> Self {
        Self::from_raw(RawMemory::new_in(alloc), 0)
    }

    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        let data = RawMemory::try_with_capacity_in(capacity, alloc)?;
        Ok(Self::from_raw(data, 0))
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_with_len_in(len: usize, alloc: A) -> Result<Self, StorageError>
    where
        T: Default,
    {
        let mut data = RawMemory::try_with_capacity_in(len, alloc)?;
        let mut insert = Inserter::new(data.as_uninit_slice_mut(), 0);
        while !insert.full() {
            insert.push(T::default());
        }
        let len = insert.complete();
        Ok(Self::from_raw(data, len))
    }

    pub fn with_len_in(len: usize, alloc: A) -> Self
    where
        T: Default,
    {
        match Self::try_with_len_in(len, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_from_slice_in(data: &[T], alloc: A) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut buf = RawMemory::try_with_capacity_in(data.len(), alloc)?;
        let mut insert = Inserter::new(buf.as_uninit_slice_mut(), 0);
        insert.extend_from_slice(data);
        let len = insert.complete();
        Ok(Self::from_raw(buf, len))
    }

    pub fn from_slice_in(data: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice_in(data, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// `data` must hold live values in the slots `[0, len)`.
    #[inline]
    const fn from_raw(data: RawMemory<T, A>, len: usize) -> Self {
        Self {
            data,
            len,
            _owns: PhantomData,
        }
    }

    #[inline]
    fn into_raw(self) -> (RawMemory<T, A>, usize) {
        let me = ManuallyDrop::new(self);
        (unsafe { ptr::read(&me.data) }, me.len)
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        self.data.allocator()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements from `len` onwards. Has no effect if `len` is
    /// not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len < old_len {
            self.len = len;
            unsafe {
                let tail = slice::from_raw_parts_mut(self.data.slot_mut_ptr(len), old_len - len);
                ptr::drop_in_place(tail);
            }
        }
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.data.slot(self.len).assume_init_read() })
    }

    /// Drops the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            empty_panic("pop_back");
        }
        self.len -= 1;
        unsafe { self.data.slot_mut(self.len).assume_init_drop() };
    }

    /// Removes and returns the element at `index`, shifting the elements
    /// after it one slot to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            index_panic(index, len);
        }
        unsafe {
            let head = self.data.slot_mut_ptr(index);
            let value = head.read();
            ptr::copy(head.add(1), head, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops the element at `index`, shifting the elements after it one slot
    /// to the left. Returns the index now holding the element which followed
    /// the erased one; this equals the new length when the last element
    /// was erased.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchanges storage and length with `other`. Element addresses move
    /// with their storage.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out into a new vector, leaving `self` empty and
    /// without an allocation.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let len = mem::replace(&mut self.len, 0);
        Self::from_raw(self.data.take(), len)
    }
}

impl<T, A: RawAlloc + Clone> Vector<T, A> {
    #[inline]
    fn spawn(&self, capacity: usize) -> Result<RawMemory<T, A>, StorageError> {
        RawMemory::try_with_capacity_in(capacity, self.data.allocator().clone())
    }

    /// Move every live element into `data`, leaving the slot at `gap` vacant
    /// when one is given, then make `data` the active storage. The previous
    /// block is released without dropping anything.
    ///
    /// # Safety
    /// `data` must be vacant and large enough for `len` elements, plus one
    /// when a gap is requested, and `gap` must not exceed `len`.
    unsafe fn relocate(&mut self, mut data: RawMemory<T, A>, gap: Option<usize>) {
        let len = self.len;
        let src = self.data.as_ptr();
        let dst = data.as_mut_ptr();
        match gap {
            None => ptr::copy_nonoverlapping(src, dst, len),
            Some(pos) => {
                ptr::copy_nonoverlapping(src, dst, pos);
                ptr::copy_nonoverlapping(src.add(pos), dst.add(pos + 1), len - pos);
            }
        }
        self.data.swap(&mut data);
    }

    /// Allocate the storage an insertion will need, if the current block is full.
    fn reserve_one(&self) -> Result<Option<RawMemory<T, A>>, StorageError> {
        if self.len < self.data.capacity() {
            Ok(None)
        } else {
            let capacity = grow_capacity(self.data.capacity())?;
            self.spawn(capacity).map(Some)
        }
    }

    /// Build a value in slot `index` and shift the following elements right.
    ///
    /// When `spare` is provided the value is written into its final slot in the
    /// new block first; only once that has succeeded are the existing elements
    /// moved around it. A panic in `f` therefore leaves the vector unchanged.
    ///
    /// # Safety
    /// `index <= len`, and `spare` must be the result of `reserve_one` for the
    /// current state.
    unsafe fn insert_with<F>(
        &mut self,
        index: usize,
        spare: Option<RawMemory<T, A>>,
        f: F,
    ) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        match spare {
            Some(mut data) => {
                data.slot_mut(index).write(f());
                self.relocate(data, Some(index));
            }
            None => {
                let value = f();
                let head = self.data.slot_mut_ptr(index);
                ptr::copy(head, head.add(1), len - index);
                head.write(value);
            }
        }
        self.len = len + 1;
        self.data.slot_mut(index).assume_init_mut()
    }

    /// Grows the capacity to exactly `capacity` if it is currently smaller.
    /// The length and the elements are unchanged.
    ///
    /// Unlike `alloc::vec::Vec::reserve`, the argument is a total capacity
    /// rather than an additional count.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.data.capacity() {
            return Ok(());
        }
        let data = self.spawn(capacity)?;
        unsafe { self.relocate(data, None) };
        Ok(())
    }

    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Make room for `additional` more elements, doubling the capacity when
    /// that covers the request.
    fn try_reserve_additional(&mut self, additional: usize) -> Result<(), StorageError> {
        let Some(needed) = self.len.checked_add(additional) else {
            return Err(StorageError::CapacityOverflow);
        };
        if needed <= self.data.capacity() {
            return Ok(());
        }
        let capacity = grow_capacity(self.data.capacity()).map_or(needed, |cap| cap.max(needed));
        self.try_reserve(capacity)
    }

    pub fn try_push(&mut self, value: T) -> Result<(), InsertionError<T>> {
        self.try_insert(self.len, value).map(|_| ())
    }

    pub fn push(&mut self, value: T) {
        if let Err(error) = self.try_push(value) {
            error.panic();
        }
    }

    /// Appends the value returned by `f`, building it directly in its final
    /// slot. Returns a reference to the new element.
    pub fn try_emplace_back<F>(&mut self, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        self.try_emplace(self.len, f)
    }

    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back(f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Inserts `value` at `index`, shifting the elements after it to the right.
    /// On allocation failure the value is handed back inside the error.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, InsertionError<T>> {
        if index > self.len {
            index_panic(index, self.len);
        }
        match self.reserve_one() {
            Ok(spare) => Ok(unsafe { self.insert_with(index, spare, move || value) }),
            Err(error) => Err(InsertionError::new(error, value)),
        }
    }

    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Inserts the value returned by `f` at `index`. `f` is only called once
    /// storage is available, and before any element is moved.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn try_emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        if index > self.len {
            index_panic(index, self.len);
        }
        let spare = self.reserve_one()?;
        Ok(unsafe { self.insert_with(index, spare, f) })
    }

    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace(index, f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Resizes to `new_len`: growing reserves exactly `new_len` slots and fills
    /// them with values from `f`, shrinking drops the tail.
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                self.try_reserve(new_len)?;
                let len = self.len;
                let slots = &mut self.data.as_uninit_slice_mut()[..new_len];
                let mut insert = Inserter::new(slots, len);
                while !insert.full() {
                    insert.push(f());
                }
                self.len = insert.complete();
            }
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => {}
        }
        Ok(())
    }

    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, f) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    #[inline]
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_reserve_additional(items.len())?;
        let len = self.len;
        let mut insert = Inserter::new(self.data.as_uninit_slice_mut(), len);
        insert.extend_from_slice(items);
        self.len = insert.complete();
        Ok(())
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Clones the contents into a new vector whose capacity equals the length.
    pub fn try_clone(&self) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(self, self.allocator().clone())
    }

    /// Replaces the contents with clones of the elements of `source`.
    ///
    /// When the current capacity suffices, the storage is reused: the first
    /// `min(len, source.len)` elements are overwritten in place, then either
    /// the rest of `source` is cloned into the spare slots, or the surplus
    /// elements are dropped. Otherwise a complete copy is built first and
    /// swapped in, so that a failure leaves `self` untouched.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<(), StorageError>
    where
        T: Clone,
    {
        let src_len = source.len;
        if src_len > self.data.capacity() {
            let mut buf = self.spawn(src_len)?;
            let mut insert = Inserter::new(buf.as_uninit_slice_mut(), 0);
            insert.extend_from_slice(source);
            let len = insert.complete();
            let mut copy = Self::from_raw(buf, len);
            self.swap(&mut copy);
            return Ok(());
        }
        let overlap = self.len.min(src_len);
        self.as_mut_slice()[..overlap].clone_from_slice(&source[..overlap]);
        if src_len > overlap {
            let slots = &mut self.data.as_uninit_slice_mut()[..src_len];
            let mut insert = Inserter::new(slots, overlap);
            insert.extend_from_slice(&source[overlap..]);
            self.len = insert.complete();
        } else {
            self.truncate(src_len);
        }
        Ok(())
    }

    pub fn assign_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        match self.try_assign_from(source) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for Vector<T, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for Vector<T, A> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> Borrow<[T]> for Vector<T, A> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> BorrowMut<[T]> for Vector<T, A> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source)
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, A: RawAllocNew> ConstDefault for Vector<T, A> {
    const DEFAULT: Self = Self::new();
}

impl<T, A: RawAllocNew> Default for Vector<T, A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: RawAlloc> Deref for Vector<T, A> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for Vector<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> Drop for Vector<T, A> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T, A: RawAlloc + Clone> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Err(error) = self.try_reserve_additional(iter.size_hint().0) {
            error.panic();
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, A: RawAlloc + Clone> Extend<&'a T> for Vector<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, A: RawAllocNew> FromIterator<T> for Vector<T, A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, A: RawAllocNew, const N: usize> From<[T; N]> for Vector<T, A> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        vec.extend(data);
        vec
    }
}

impl<T: Clone, A: RawAllocNew> From<&[T]> for Vector<T, A> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, A: RawAllocNew, const N: usize> From<&[T; N]> for Vector<T, A> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Hash, A: RawAlloc> Hash for Vector<T, A> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: RawAlloc> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let (data, len) = self.into_raw();
        IntoIter::new(data, len)
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, A1, T2, A2> PartialEq<Vector<T2, A2>> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
    A1: RawAlloc,
    A2: RawAlloc,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, A2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, A: RawAlloc> Eq for Vector<T, A> {}

impl<T1, A1: RawAlloc, T2> PartialEq<[T2]> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, A1: RawAlloc, T2> PartialEq<&[T2]> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, A1: RawAlloc, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, A1: RawAlloc, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

#[cfg(feature = "alloc")]
impl<T1, A1: RawAlloc, T2> PartialEq<alloc::vec::Vec<T2>> for Vector<T1, A1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, A: RawAlloc> zeroize::Zeroize for Vector<T, A> {
    /// Wipes every element, drops them, then wipes the whole block.
    fn zeroize(&mut self) {
        for item in self.as_mut_slice() {
            item.zeroize();
        }
        self.clear();
        self.data.as_uninit_slice_mut().zeroize();
    }
}
