//! Validated knapsack instances.
//!
//! A [`KnapsackProblem`] owns the parallel `values` / `weights` sequences and
//! the capacity. Items are never materialised: item `i` is the pair
//! `(values[i], weights[i])`. All preconditions of the table builder are
//! checked here, so anything holding a `KnapsackProblem` can build tables
//! without further checks.

use crate::error::KnapsackError;
use crate::traits::{KnapsackValue, RawWeight};
use crate::utils::{allocatable, table_cells};

/// 0/1 knapsack instance.
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackProblem<V> {
    values: Vec<V>,
    weights: Vec<usize>,
    capacity: usize,
}

impl<V: KnapsackValue> KnapsackProblem<V> {
    /// Build an instance from typed weights.
    ///
    /// Fails if the sequences differ in length, if a value is NaN, if the
    /// positive values cannot be summed in `V`, or if the
    /// `(n + 1) × (capacity + 1)` table would not be addressable.
    pub fn new(
        values: Vec<V>,
        weights: Vec<usize>,
        capacity: usize,
    ) -> Result<Self, KnapsackError> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_ordered()) {
            return Err(KnapsackError::UnorderedValue { index });
        }
        // Every cell holds the value of some selection of positive items.
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > V::default())
            .try_fold(V::default(), |acc, (index, &v)| {
                acc.checked_sum(v).ok_or(KnapsackError::ValueOverflow { index })
            })?;
        let items = values.len();
        let fits = items
            .checked_add(1)
            .zip(capacity.checked_add(1))
            .and_then(|(rows, cols)| table_cells(rows, cols))
            .is_some_and(allocatable::<V>);
        if !fits {
            return Err(KnapsackError::TableTooLarge { items, capacity });
        }
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Build an instance from raw numeric weights and capacity.
    ///
    /// Each weight and the capacity must be a non-negative whole number that
    /// fits in `usize`. The length check runs first, then weights in order,
    /// then the capacity.
    pub fn from_raw<W: RawWeight>(
        values: &[V],
        weights: &[W],
        capacity: W,
    ) -> Result<Self, KnapsackError> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let weights = weights
            .iter()
            .enumerate()
            .map(|(index, w)| {
                w.to_weight()
                    .map_err(|defect| KnapsackError::InvalidWeight { index, defect })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let capacity = capacity
            .to_weight()
            .map_err(|defect| KnapsackError::InvalidCapacity { defect })?;
        Self::new(values.to_vec(), weights, capacity)
    }

    /// Number of items `n`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(value, weight)` of item `index`, if it exists.
    pub fn item(&self, index: usize) -> Option<(V, usize)> {
        Some((*self.values.get(index)?, self.weights[index]))
    }

    /// Iterate items as `(value, weight)` pairs in index order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = (V, usize)> + '_ {
        self.values.iter().copied().zip(self.weights.iter().copied())
    }
}
