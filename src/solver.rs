//! Knapsack solver: table construction followed by reconstruction.
//!
//! The solver owns a validated [`KnapsackProblem`] and runs two phases:
//! 1. [`build_tables_with`] fills `best` and `chosen` for every
//!    `(item prefix, capacity)` pair.
//! 2. [`reconstruct`] walks `chosen` back from `(n, capacity)` to recover the
//!    selected items.
//!
//! Tables live only for the duration of [`KnapsackSolver::solve`]; nothing is
//! cached between calls.

use crate::build::{build_tables_with, max_value, KnapsackTables};
use crate::problem::KnapsackProblem;
use crate::reconstruct::reconstruct;
use crate::solution::Solution;
use crate::traits::KnapsackValue;
use crate::utils::DEFAULT_PARALLEL_MIN_WIDTH;

/// Exact 0/1 knapsack solver for a problem instance.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{KnapsackProblem, KnapsackSolver};
///
/// let problem = KnapsackProblem::from_raw(&[10, 40, 30, 60], &[5, 4, 6, 3], 10)?;
/// let solution = KnapsackSolver::new(problem).solve();
/// assert_eq!(solution.optimal_value, 100);
/// assert_eq!(solution.selected.into_iter().collect::<Vec<_>>(), vec![1, 3]);
/// # Ok::<(), knapsack_dp::KnapsackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolver<V> {
    problem: KnapsackProblem<V>,
    parallel_min_width: usize,
}

impl<V: KnapsackValue> KnapsackSolver<V> {
    /// Create a solver with the default parallel row threshold.
    pub fn new(problem: KnapsackProblem<V>) -> Self {
        Self::with_parallel_min_width(problem, DEFAULT_PARALLEL_MIN_WIDTH)
    }

    /// Create a solver that fills rows of at least `parallel_min_width` cells
    /// in parallel (only with the `parallel` feature).
    pub fn with_parallel_min_width(
        problem: KnapsackProblem<V>,
        parallel_min_width: usize,
    ) -> Self {
        Self {
            problem,
            parallel_min_width,
        }
    }

    pub fn problem(&self) -> &KnapsackProblem<V> {
        &self.problem
    }

    pub fn into_problem(self) -> KnapsackProblem<V> {
        self.problem
    }

    pub fn parallel_min_width(&self) -> usize {
        self.parallel_min_width
    }

    /// Phase I only: the filled `best` and `chosen` tables.
    pub fn build_tables(&self) -> KnapsackTables<V> {
        build_tables_with(&self.problem, self.parallel_min_width)
    }

    /// Build the tables, then walk them back to the selected items.
    ///
    /// Equal inputs give equal outputs, including which of several equally
    /// valuable selections is returned: an item is only taken when it strictly
    /// improves a cell.
    pub fn solve(&self) -> Solution<V> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "knapsack_solve",
            items = self.problem.len(),
            capacity = self.problem.capacity()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let tables = self.build_tables();
        let optimal_value = tables.optimal_value();
        let selected = reconstruct(
            tables.chosen(),
            self.problem.weights(),
            self.problem.capacity(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(%optimal_value, selected = ?selected, "solved");

        Solution::new(optimal_value, selected, self.problem.len())
    }

    /// Best value only, in O(capacity) memory.
    pub fn max_value(&self) -> V {
        max_value(&self.problem)
    }
}
