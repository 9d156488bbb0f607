//! Table construction.
//!
//! Row `k` of the `best` table holds, for every capacity `c`, the best value
//! reachable with the first `k` items; row `k` of `chosen` records whether
//! item `k` is part of that best selection. Each row is computed from the
//! previous row only, so rows are filled strictly in order while the cells
//! of one row are independent of each other.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::problem::KnapsackProblem;
use crate::reconstruct::reconstruct;
use crate::table::{Decision, Table};
use crate::traits::KnapsackValue;
use crate::utils::DEFAULT_PARALLEL_MIN_WIDTH;

/// The filled `best` and `chosen` tables of one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackTables<V> {
    best: Table<V>,
    chosen: Table<Decision>,
}

impl<V: KnapsackValue> KnapsackTables<V> {
    /// `best[k][c]`: best value using the first `k` items within capacity `c`.
    pub fn best(&self) -> &Table<V> {
        &self.best
    }

    /// `chosen[k][c]`: whether item `k` (1-indexed) is taken in `best[k][c]`.
    pub fn chosen(&self) -> &Table<Decision> {
        &self.chosen
    }

    /// `best[n][capacity]`.
    pub fn optimal_value(&self) -> V {
        self.best[(self.best.rows() - 1, self.best.cols() - 1)]
    }

    /// Walk `chosen` backward from the bottom-right cell.
    ///
    /// # Panics
    /// Panics if `weights` is not the weight sequence these tables were built
    /// from.
    pub fn selection(&self, weights: &[usize]) -> BTreeSet<usize> {
        reconstruct(&self.chosen, weights, self.best.cols() - 1)
    }

    pub fn into_parts(self) -> (Table<V>, Table<Decision>) {
        (self.best, self.chosen)
    }
}

impl<V: KnapsackValue> fmt::Display for KnapsackTables<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "best =")?;
        write!(f, "{}", self.best)?;
        writeln!(f, "chosen =")?;
        write!(f, "{}", self.chosen)
    }
}

/// Fill both tables for `problem`, row by row.
///
/// Rows at least [`DEFAULT_PARALLEL_MIN_WIDTH`] cells wide are split across
/// threads when the `parallel` feature is enabled.
pub fn build_tables<V: KnapsackValue>(problem: &KnapsackProblem<V>) -> KnapsackTables<V> {
    build_tables_with(problem, DEFAULT_PARALLEL_MIN_WIDTH)
}

/// [`build_tables`] with an explicit row width from which rows are filled in
/// parallel. Without the `parallel` feature the width is ignored.
pub fn build_tables_with<V: KnapsackValue>(
    problem: &KnapsackProblem<V>,
    parallel_min_width: usize,
) -> KnapsackTables<V> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "build_tables",
        items = problem.len(),
        capacity = problem.capacity()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let rows = problem.len() + 1;
    let cols = problem.capacity() + 1;
    // Row 0 stays zero / Exclude: no items, no value.
    let mut best = Table::filled(rows, cols, V::default());
    let mut chosen = Table::filled(rows, cols, Decision::Exclude);
    #[cfg(feature = "parallel")]
    let parallel = cols >= parallel_min_width;
    #[cfg(not(feature = "parallel"))]
    let _ = parallel_min_width;

    for (k, (value, weight)) in (1..rows).zip(problem.items()) {
        let (prev, next) = best.prev_and_row_mut(k);
        let (_, decisions) = chosen.prev_and_row_mut(k);
        #[cfg(feature = "parallel")]
        if parallel {
            fill_row_parallel(prev, value, weight, next, decisions);
        } else {
            fill_row(prev, value, weight, next, decisions);
        }
        #[cfg(not(feature = "parallel"))]
        fill_row(prev, value, weight, next, decisions);
        #[cfg(feature = "tracing")]
        tracing::trace!(item = k, %value, weight, row = ?next, "filled row");
    }

    let tables = KnapsackTables { best, chosen };
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "knapsack_dp::tables", "\n{tables}");
    tables
}

/// Best value `best[n][capacity]` using two rolling rows instead of full
/// tables: O(capacity) memory, no selection.
pub fn max_value<V: KnapsackValue>(problem: &KnapsackProblem<V>) -> V {
    let cols = problem.capacity() + 1;
    let mut prev = vec![V::default(); cols];
    let mut curr = vec![V::default(); cols];

    for (value, weight) in problem.items() {
        for (c, cell) in curr.iter_mut().enumerate() {
            *cell = relax(&prev, value, weight, c).0;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols - 1]
}

/// Best value and decision for cell `(k, c)` given row `k - 1`.
///
/// The include candidate `value + prev[c - weight]` only exists when
/// `weight <= c`; ties keep the item out.
#[inline]
fn relax<V: KnapsackValue>(prev: &[V], value: V, weight: usize, c: usize) -> (V, Decision) {
    let exclude = prev[c];
    if let Some(rest) = c.checked_sub(weight) {
        let include = value + prev[rest];
        if include > exclude {
            return (include, Decision::Include);
        }
    }
    (exclude, Decision::Exclude)
}

fn fill_row<V: KnapsackValue>(
    prev: &[V],
    value: V,
    weight: usize,
    next: &mut [V],
    decisions: &mut [Decision],
) {
    for (c, (cell, decision)) in next.iter_mut().zip(decisions.iter_mut()).enumerate() {
        (*cell, *decision) = relax(prev, value, weight, c);
    }
}

#[cfg(feature = "parallel")]
fn fill_row_parallel<V: KnapsackValue>(
    prev: &[V],
    value: V,
    weight: usize,
    next: &mut [V],
    decisions: &mut [Decision],
) {
    next.par_iter_mut()
        .zip(decisions.par_iter_mut())
        .enumerate()
        .for_each(|(c, (cell, decision))| {
            (*cell, *decision) = relax(prev, value, weight, c);
        });
}
