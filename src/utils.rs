//! Assorted sizing helpers.

/// Row width (capacity + 1) from which a row is filled in parallel when the
/// `parallel` feature is enabled. Narrower rows are not worth the fork/join.
pub const DEFAULT_PARALLEL_MIN_WIDTH: usize = 4096;

/// Number of cells in a `rows × cols` table, or `None` if it overflows `usize`.
#[inline]
pub fn table_cells(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

/// Whether `cells` elements of `T` can live in one allocation
/// (at most `isize::MAX` bytes).
#[inline]
pub fn allocatable<T>(cells: usize) -> bool {
    cells
        .checked_mul(std::mem::size_of::<T>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}
