#![cfg(all(feature = "alloc", feature = "zeroize"))]

use core::alloc::Layout;
use core::cell::RefCell;
use core::ptr::NonNull;
use core::slice;

use zeroize::{Zeroize, Zeroizing};

use advanced_vector::{Global, RawAlloc, Vector};

/// Records the contents of every block as it is released.
#[derive(Debug, Default)]
struct TestAlloc {
    released: RefCell<Vec<Vec<u8>>>,
}

impl RawAlloc for TestAlloc {
    fn try_alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        Global.try_alloc(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        let cp = Vec::from(slice::from_raw_parts(ptr.as_ptr(), layout.size()));
        self.released.borrow_mut().push(cp);
        Global.release(ptr, layout)
    }
}

#[test]
fn test_alloc_log() {
    let alloc = TestAlloc::default();
    let mut v = Vector::with_capacity_in(1, &alloc);
    v.push(99u32);
    drop(v);
    let log = alloc.released.borrow().clone();
    assert_eq!(log, &[99u32.to_ne_bytes()]);
}

#[test]
fn vector_zeroize() {
    let alloc = TestAlloc::default();
    let mut v = Vector::with_capacity_in(4, &alloc);
    v.extend_from_slice(&[1u8, 2, 3]);
    v.zeroize();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 4);
    drop(v);
    let log = alloc.released.borrow().clone();
    assert_eq!(log, &[[0u8; 4]]);
}

#[test]
fn zeroizing_wrapper() {
    let alloc = TestAlloc::default();
    {
        let mut v = Zeroizing::new(Vector::new_in(&alloc));
        for byte in 1..=5u8 {
            v.push(byte);
        }
        // relocations release the earlier blocks unwiped
        assert_eq!(alloc.released.borrow().len(), 3);
    }
    let log = alloc.released.borrow().clone();
    assert_eq!(log.last().map(Vec::as_slice), Some(&[0u8; 8][..]));
}
