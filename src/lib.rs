//! Exact 0/1 knapsack by dynamic programming.
//!
//! Given item values, item weights and a weight capacity, this crate finds the
//! largest total value of a subset whose weight fits the capacity, and which
//! items make up that subset.
//!
//! ## Core idea
//! 1. Fill a table `best[k][c]`: the best value using only the first `k` items
//!    within capacity `c`. Alongside it, `chosen[k][c]` records whether item
//!    `k` is part of that best value.
//! 2. Walk `chosen` backward from `(n, capacity)` to recover the selection.
//!
//! An item is only taken when it *strictly* improves a cell, so among several
//! equally valuable selections the result is always the same one.
//!
//! ## Quick start
//! ```
//! use std::collections::BTreeSet;
//!
//! let solution = knapsack_dp::solve(&[10, 40, 30, 60], &[5, 4, 6, 3], 10)?;
//! assert_eq!(solution.optimal_value, 100);
//! assert_eq!(solution.selected, BTreeSet::from([1, 3]));
//! # Ok::<(), knapsack_dp::KnapsackError>(())
//! ```
//!
//! ## Cargo features
//! - `parallel`: fill the cells of wide rows with rayon.
//! - `tracing`: emit table rows, a full table dump and the backward walk as
//!   `tracing` events at `TRACE` level.

pub mod build;
pub mod builder;
pub mod error;
pub mod problem;
pub mod reconstruct;
pub mod solution;
pub mod solver;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::build::{build_tables, max_value, KnapsackTables};
pub use crate::builder::KnapsackSolverBuilder;
pub use crate::error::{KnapsackError, WeightDefect};
pub use crate::problem::KnapsackProblem;
pub use crate::reconstruct::reconstruct;
pub use crate::solution::Solution;
pub use crate::solver::KnapsackSolver;
pub use crate::table::{Decision, Table};
pub use crate::traits::{KnapsackValue, RawWeight};

/// Validate the input, then solve it.
///
/// `weights` and `capacity` may be any primitive number type as long as each
/// is a non-negative whole number; see [`KnapsackError`] for what is rejected.
pub fn solve<V, W>(
    values: &[V],
    weights: &[W],
    capacity: W,
) -> Result<Solution<V>, KnapsackError>
where
    V: KnapsackValue,
    W: RawWeight,
{
    let problem = KnapsackProblem::from_raw(values, weights, capacity)?;
    Ok(KnapsackSolver::new(problem).solve())
}
