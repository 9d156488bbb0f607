//! Dense DP tables.
//!
//! A [`Table`] is a row-major `(rows × cols)` grid. For a knapsack instance
//! with `n` items and capacity `W`, rows are item-prefix counts `0..=n` and
//! columns are capacities `0..=W`.

use std::fmt;
use std::ops::Index;

/// Whether item `k` is part of the best selection for a `(k, c)` cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Decision {
    #[default]
    Exclude,
    Include,
}

impl Decision {
    #[inline]
    pub fn is_include(self) -> bool {
        self == Decision::Include
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = match self {
            Decision::Exclude => "0",
            Decision::Include => "1",
        };
        f.pad(bit)
    }
}

/// Row-major 2-D grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Table<T> {
    /// Table of `rows × cols` cells, all set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Cell `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }
}

impl<T> Table<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `k` as a slice.
    ///
    /// # Panics
    /// Panics if `k >= self.rows()`.
    #[inline]
    pub fn row(&self, k: usize) -> &[T] {
        assert!(k < self.rows, "row {k} out of range ({} rows)", self.rows);
        &self.cells[k * self.cols..(k + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        // chunks_exact(0) panics; a zero-width table still has `rows` empty rows.
        (0..self.rows).map(move |k| &self.cells[k * self.cols..(k + 1) * self.cols])
    }

    /// Split out row `k - 1` (read-only) and row `k` (mutable).
    ///
    /// # Panics
    /// Panics if `k == 0` or `k >= self.rows()`.
    pub(crate) fn prev_and_row_mut(&mut self, k: usize) -> (&[T], &mut [T]) {
        assert!(k > 0 && k < self.rows, "row {k} has no predecessor in range");
        let (done, rest) = self.cells.split_at_mut(k * self.cols);
        (&done[(k - 1) * self.cols..], &mut rest[..self.cols])
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range ({} x {})",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

/// Human-readable grid: a header of column indices, then one line per row
/// prefixed with its row index.
impl<T: fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        let width = rendered
            .iter()
            .map(String::len)
            .chain(std::iter::once(self.cols.saturating_sub(1).to_string().len()))
            .max()
            .unwrap_or(1);
        let label = self.rows.saturating_sub(1).to_string().len();

        write!(f, "{:>label$} |", "")?;
        for c in 0..self.cols {
            write!(f, " {c:>width$}")?;
        }
        writeln!(f)?;
        for k in 0..self.rows {
            write!(f, "{k:>label$} |")?;
            for cell in &rendered[k * self.cols..(k + 1) * self.cols] {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
