//! Error handling.

use core::alloc::LayoutError;
use core::fmt;

/// Reasons why storage for a collection could not be obtained.
///
/// Every fallible operation that reports one of these leaves the collection
/// exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The allocator could not provide a block for `capacity` slots
    AllocError {
        /// The number of slots requested
        capacity: usize,
    },
    /// The slot count required by the operation overflows `usize`
    CapacityOverflow,
    /// The byte size of the requested block is not representable
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError { .. } => "Allocation error",
            Self::CapacityOverflow => "Capacity overflow",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self);
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocError { capacity } => {
                write!(f, "{}: unable to reserve {} slots", self.as_str(), capacity)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// Raised by `try_push` and `try_insert` when the vector could not grow.
/// Hands back the value that was to be inserted.
#[derive(Clone)]
pub struct InsertionError<T> {
    pub(crate) error: StorageError,
    pub(crate) value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// The reason storage could not be obtained
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Recover the value that was not inserted
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into the storage error and the rejected value
    pub fn into_parts(self) -> (StorageError, T) {
        (self.error, self.value)
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("Insertion failed: {}", self.error);
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insertion failed: {}", self.error)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertionError<T> {}
