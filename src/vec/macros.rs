/// Create a [`Vector`](crate::Vector) with the global allocator.
///
/// ```
/// use advanced_vector::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// let zeros = vector![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => (
        $crate::vec::Vector::<_, $crate::storage::Global>::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::Vector::<_, $crate::storage::Global>::from([$($x),+])
    );
}
