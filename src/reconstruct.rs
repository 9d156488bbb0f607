//! Backward walk over the decision table.
//!
//! Starting at `(n, capacity)`, each step looks at one item: if it was taken
//! in the current cell, it joins the selection and its weight leaves the
//! remaining capacity. The walk makes exactly `n` steps.

use std::collections::BTreeSet;

use crate::table::{Decision, Table};

/// Recover the 0-indexed items of the best selection from `chosen`.
///
/// `weights` are the item weights the table was built from (`n` is
/// `weights.len()`), `capacity` the capacity it was built for.
///
/// # Panics
/// Panics if `chosen` is not `(n + 1) × (capacity + 1)`, or if it takes an
/// item whose weight in `weights` exceeds the capacity left at that step
/// (the table was built from other weights).
pub fn reconstruct(
    chosen: &Table<Decision>,
    weights: &[usize],
    capacity: usize,
) -> BTreeSet<usize> {
    let n = weights.len();
    assert!(
        chosen.rows() == n + 1 && chosen.cols() == capacity + 1,
        "decision table is {} x {}, expected {} x {}",
        chosen.rows(),
        chosen.cols(),
        n + 1,
        capacity + 1
    );

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct", items = n, capacity);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut remaining = capacity;
    let mut selected = BTreeSet::new();
    for k in (1..=n).rev() {
        let decision = chosen[(k, remaining)];
        #[cfg(feature = "tracing")]
        tracing::trace!(item = k, remaining, %decision, "backtrack");
        if decision == Decision::Include {
            selected.insert(k - 1);
            remaining = remaining.checked_sub(weights[k - 1]).unwrap_or_else(|| {
                panic!(
                    "item {} of weight {} taken with only {} capacity left",
                    k - 1,
                    weights[k - 1],
                    remaining
                )
            });
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_tables;
    use crate::problem::KnapsackProblem;

    #[test]
    fn reference_selection() {
        let p = KnapsackProblem::from_raw(&[10, 40, 30, 60], &[5, 4, 6, 3], 10).unwrap();
        let tables = build_tables(&p);
        let picked = reconstruct(tables.chosen(), p.weights(), p.capacity());
        assert_eq!(picked, BTreeSet::from([1, 3]));
    }

    #[test]
    fn hand_built_table() {
        // Two items of weight 2, capacity 3: only item 1 (index 0) fits.
        let mut chosen = Table::filled(3, 4, Decision::Exclude);
        for c in 2..4 {
            chosen.prev_and_row_mut(1).1[c] = Decision::Include;
        }
        assert_eq!(reconstruct(&chosen, &[2, 2], 3), BTreeSet::from([0]));
    }

    #[test]
    fn no_items_selects_nothing() {
        let chosen = Table::filled(1, 6, Decision::Exclude);
        assert!(reconstruct(&chosen, &[], 5).is_empty());
    }

    #[test]
    #[should_panic(expected = "taken with only 3 capacity left")]
    fn foreign_weights_panic() {
        let p = KnapsackProblem::from_raw(&[5, 6], &[3, 3], 3).unwrap();
        let tables = build_tables(&p);
        let _ = reconstruct(tables.chosen(), &[9, 9], 3);
    }

    #[test]
    #[should_panic(expected = "decision table is")]
    fn shape_mismatch_panics() {
        let chosen = Table::filled(2, 3, Decision::Exclude);
        let _ = reconstruct(&chosen, &[1, 1], 2);
    }
}
