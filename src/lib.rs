//! A growable array built directly on raw, uninitialized storage.
//!
//! The crate has two layers. [`storage::RawMemory`] owns a fixed number of
//! uninitialized slots and never constructs or drops values. [`Vector`]
//! owns one `RawMemory` at a time, tracks how many of its slots are live,
//! and implements growth, insertion and removal on top of it.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod error;

pub mod storage;

pub mod vec;

pub use {
    self::error::{InsertionError, StorageError},
    self::storage::{Global, RawAlloc, RawMemory},
    self::vec::Vector,
};
