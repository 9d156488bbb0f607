//! Solver output.

use std::collections::BTreeSet;

use crate::problem::KnapsackProblem;
use crate::traits::KnapsackValue;

/// Best total value and the items achieving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    pub optimal_value: V,
    /// 0-indexed items of the selection, ascending.
    pub selected: BTreeSet<usize>,
    item_count: usize,
}

impl<V: KnapsackValue> Solution<V> {
    pub(crate) fn new(optimal_value: V, selected: BTreeSet<usize>, item_count: usize) -> Self {
        Self {
            optimal_value,
            selected,
            item_count,
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// One flag per item of the instance, `true` where the item is kept.
    pub fn keep_mask(&self) -> Vec<bool> {
        (0..self.item_count).map(|i| self.contains(i)).collect()
    }

    /// Sum of the selected weights in `problem`.
    ///
    /// # Panics
    /// Panics if a selected index is not an item of `problem`.
    pub fn total_weight(&self, problem: &KnapsackProblem<V>) -> usize {
        self.selected.iter().map(|&i| problem.weights()[i]).sum()
    }

    /// Sum of the selected values in `problem`, accumulated in index order.
    ///
    /// # Panics
    /// Panics if a selected index is not an item of `problem`.
    pub fn total_value(&self, problem: &KnapsackProblem<V>) -> V {
        self.selected
            .iter()
            .fold(V::default(), |acc, &i| acc + problem.values()[i])
    }

    /// Whether the selection fits `problem`'s capacity.
    pub fn is_feasible(&self, problem: &KnapsackProblem<V>) -> bool {
        self.selected.iter().all(|&i| i < problem.len())
            && self.total_weight(problem) <= problem.capacity()
    }
}
