#![cfg(feature = "alloc")]

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rstest::rstest;

use advanced_vector::{Global, RawAlloc, StorageError, Vector};

/// Wraps the global allocator, counting live blocks and refusing requests
/// once its budget is spent.
#[derive(Debug, Default)]
struct FailingAlloc {
    budget: Cell<Option<usize>>,
    live: Cell<usize>,
}

impl FailingAlloc {
    fn fail_after(&self, count: usize) {
        self.budget.set(Some(count));
    }

    fn live(&self) -> usize {
        self.live.get()
    }
}

impl RawAlloc for FailingAlloc {
    fn try_alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        if let Some(remain) = self.budget.get() {
            if remain == 0 {
                return None;
            }
            self.budget.set(Some(remain - 1));
        }
        let ptr = Global.try_alloc(layout)?;
        self.live.set(self.live.get() + 1);
        Some(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        Global.release(ptr, layout)
    }
}

/// Tracks how many `Probe` values are alive, and can make `clone` panic.
#[derive(Debug, Default)]
struct Counter {
    live: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

impl Counter {
    fn make(&self, value: u32) -> Probe<'_> {
        self.live.set(self.live.get() + 1);
        Probe {
            value,
            counter: self,
        }
    }

    fn live(&self) -> usize {
        self.live.get()
    }
}

#[derive(Debug)]
struct Probe<'c> {
    value: u32,
    counter: &'c Counter,
}

impl Clone for Probe<'_> {
    fn clone(&self) -> Self {
        if let Some(remain) = self.counter.clone_budget.get() {
            if remain == 0 {
                panic!("clone refused");
            }
            self.counter.clone_budget.set(Some(remain - 1));
        }
        self.counter.make(self.value)
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.counter.live.set(self.counter.live.get() - 1);
    }
}

fn values(v: &[Probe<'_>]) -> Vec<u32> {
    v.iter().map(|p| p.value).collect()
}

fn full_vector(alloc: &FailingAlloc) -> Vector<u32, &FailingAlloc> {
    let mut v = Vector::with_capacity_in(4, alloc);
    v.extend_from_slice(&[1, 2, 3, 4]);
    assert_eq!(v.capacity(), v.len());
    v
}

#[test]
fn push_alloc_failure_is_reported() {
    let alloc = FailingAlloc::default();
    let mut v = full_vector(&alloc);
    let ptr = v.as_ptr();
    alloc.fail_after(0);

    let err = v.try_push(5).unwrap_err();
    assert_eq!(err.error(), &StorageError::AllocError { capacity: 8 });
    assert_eq!(err.into_value(), 5);
    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(alloc.live(), 1);
}

#[rstest]
#[case::front(0)]
#[case::middle(2)]
#[case::back(4)]
fn insert_alloc_failure_is_reported(#[case] pos: usize) {
    let alloc = FailingAlloc::default();
    let mut v = full_vector(&alloc);
    alloc.fail_after(0);

    let (error, value) = v.try_insert(pos, 9).unwrap_err().into_parts();
    assert!(matches!(error, StorageError::AllocError { .. }));
    assert_eq!(value, 9);
    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn emplace_alloc_failure_skips_closure() {
    let alloc = FailingAlloc::default();
    let mut v = full_vector(&alloc);
    alloc.fail_after(0);

    let called = Cell::new(false);
    let res = v.try_emplace_back(|| {
        called.set(true);
        5
    });
    assert!(res.is_err());
    assert!(!called.get());
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn reserve_and_resize_failure() {
    let alloc = FailingAlloc::default();
    let mut v = full_vector(&alloc);
    alloc.fail_after(0);

    assert_eq!(
        v.try_reserve(100),
        Err(StorageError::AllocError { capacity: 100 })
    );
    assert!(v.try_resize(10).is_err());
    assert!(v.try_extend_from_slice(&[5]).is_err());
    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);

    // shrinking needs no storage
    assert!(v.try_resize(2).is_ok());
    assert_eq!(v, [1, 2]);
}

#[test]
fn construction_failure() {
    let alloc = FailingAlloc::default();
    alloc.fail_after(0);
    assert!(Vector::<u32, _>::try_with_len_in(3, &alloc).is_err());
    assert!(Vector::<u32, _>::try_with_capacity_in(3, &alloc).is_err());
    assert!(Vector::<u32, _>::try_from_slice_in(&[1, 2], &alloc).is_err());
    // nothing needs allocating for an empty vector
    let v = Vector::<u32, _>::try_with_len_in(0, &alloc).unwrap();
    assert!(v.is_empty());
    assert_eq!(alloc.live(), 0);
}

#[test]
fn capacity_overflow_is_reported() {
    let mut v = Vector::<u64>::new();
    assert!(matches!(
        v.try_reserve(usize::MAX),
        Err(StorageError::LayoutError(_))
    ));
    assert_eq!(v.capacity(), 0);
}

#[test]
fn clone_failure_keeps_original() {
    let alloc = FailingAlloc::default();
    let v = full_vector(&alloc);
    alloc.fail_after(0);
    assert!(v.try_clone().is_err());

    let mut dst = Vector::new_in(&alloc);
    assert!(dst.try_assign_from(&v).is_err());
    assert!(dst.is_empty());
    assert_eq!(alloc.live(), 1);
}

#[test]
fn emplace_panic_during_growth() {
    let alloc = FailingAlloc::default();
    let mut v = full_vector(&alloc);
    let ptr = v.as_ptr();

    for pos in [0, 2, 4] {
        let res = catch_unwind(AssertUnwindSafe(|| {
            v.emplace(pos, || panic!("constructor failed"));
        }));
        assert!(res.is_err());
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_ptr(), ptr);
        // the block allocated for the relocation has been released
        assert_eq!(alloc.live(), 1);
    }
}

#[test]
fn emplace_panic_with_spare_capacity() {
    let counter = Counter::default();
    let mut v = Vector::<Probe<'_>>::with_capacity(8);
    for i in 0..4 {
        v.push(counter.make(i));
    }

    let res = catch_unwind(AssertUnwindSafe(|| {
        v.emplace(1, || panic!("constructor failed"));
    }));
    assert!(res.is_err());
    assert_eq!(values(&v), [0, 1, 2, 3]);
    assert_eq!(counter.live(), 4);
    drop(v);
    assert_eq!(counter.live(), 0);
}

#[test]
fn with_len_panic_releases_storage() {
    thread_local! {
        static MADE: Cell<usize> = Cell::new(0);
    }

    #[derive(Debug)]
    struct Fragile;

    impl Default for Fragile {
        fn default() -> Self {
            MADE.with(|made| {
                if made.get() == 3 {
                    panic!("default failed");
                }
                made.set(made.get() + 1);
            });
            Fragile
        }
    }

    impl Drop for Fragile {
        fn drop(&mut self) {
            MADE.with(|made| made.set(made.get() - 1));
        }
    }

    let alloc = FailingAlloc::default();
    let res = catch_unwind(AssertUnwindSafe(|| {
        Vector::<Fragile, _>::with_len_in(5, &alloc);
    }));
    assert!(res.is_err());
    assert_eq!(MADE.with(Cell::get), 0);
    assert_eq!(alloc.live(), 0);
}

#[test]
fn clone_panic_drops_partial_copy() {
    let counter = Counter::default();
    let v = Vector::<Probe<'_>>::from_iter((0..6).map(|i| counter.make(i)));
    counter.clone_budget.set(Some(3));

    let res = catch_unwind(AssertUnwindSafe(|| v.clone()));
    assert!(res.is_err());
    assert_eq!(counter.live(), 6);
    assert_eq!(values(&v), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn clone_from_panic_keeps_length_consistent() {
    let counter = Counter::default();
    let src = Vector::<Probe<'_>>::from_iter((10..16).map(|i| counter.make(i)));
    let mut dst = Vector::<Probe<'_>>::with_capacity(8);
    dst.push(counter.make(0));
    dst.push(counter.make(1));

    // the overlap succeeds, then the second of the appended clones panics
    counter.clone_budget.set(Some(3));
    let res = catch_unwind(AssertUnwindSafe(|| dst.clone_from(&src)));
    assert!(res.is_err());
    assert_eq!(values(&dst), [10, 11]);
    assert_eq!(counter.live(), src.len() + dst.len());

    counter.clone_budget.set(None);
    dst.clone_from(&src);
    assert_eq!(values(&dst), values(&src));
    drop(dst);
    drop(src);
    assert_eq!(counter.live(), 0);
}

#[test]
fn drop_releases_everything() {
    let alloc = FailingAlloc::default();
    let counter = Counter::default();
    {
        let mut v = Vector::new_in(&alloc);
        for i in 0..10 {
            v.push(counter.make(i));
        }
        v.insert(3, counter.make(99));
        v.erase(0);
        v.pop_back();
        assert_eq!(counter.live(), 9);
        let mut iter = v.into_iter();
        assert!(iter.next().is_some());
        assert_eq!(counter.live(), 8);
    }
    assert_eq!(counter.live(), 0);
    assert_eq!(alloc.live(), 0);
}
