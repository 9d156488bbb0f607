//! Error types for knapsack instance validation.
//!
//! Every error is raised while constructing a [`KnapsackProblem`] or calling
//! [`solve`], i.e. before any DP table is allocated. Once an instance is
//! validated, table construction and reconstruction cannot fail.
//!
//! [`KnapsackProblem`]: crate::problem::KnapsackProblem
//! [`solve`]: crate::solve

use thiserror::Error;

/// Why a raw weight or capacity could not be turned into a `usize`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightDefect {
    #[error("negative")]
    Negative,

    #[error("not an integer")]
    NonIntegral,

    #[error("not a finite number")]
    NotFinite,

    #[error("too large to index a table")]
    TooLarge,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("values and weights differ in length ({values} values, {weights} weights)")]
    LengthMismatch { values: usize, weights: usize },

    #[error("weight of item {index} is {defect}")]
    InvalidWeight { index: usize, defect: WeightDefect },

    #[error("capacity is {defect}")]
    InvalidCapacity { defect: WeightDefect },

    #[error("value of item {index} is not comparable (NaN)")]
    UnorderedValue { index: usize },

    #[error("positive item values overflow the value type at item {index}")]
    ValueOverflow { index: usize },

    #[error("a table of {items} items by capacity {capacity} does not fit in memory")]
    TableTooLarge { items: usize, capacity: usize },
}

impl KnapsackError {
    /// All variants describe malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::InvalidWeight { .. }
                | Self::InvalidCapacity { .. }
                | Self::UnorderedValue { .. }
                | Self::ValueOverflow { .. }
                | Self::TableTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let err = KnapsackError::InvalidWeight {
            index: 3,
            defect: WeightDefect::Negative,
        };
        assert_eq!(err.to_string(), "weight of item 3 is negative");

        let err = KnapsackError::InvalidCapacity {
            defect: WeightDefect::NonIntegral,
        };
        assert_eq!(err.to_string(), "capacity is not an integer");
    }

    #[test]
    fn every_variant_is_invalid_input() {
        let all = [
            KnapsackError::LengthMismatch {
                values: 1,
                weights: 2,
            },
            KnapsackError::InvalidWeight {
                index: 0,
                defect: WeightDefect::TooLarge,
            },
            KnapsackError::InvalidCapacity {
                defect: WeightDefect::NotFinite,
            },
            KnapsackError::UnorderedValue { index: 0 },
            KnapsackError::ValueOverflow { index: 1 },
            KnapsackError::TableTooLarge {
                items: 1,
                capacity: usize::MAX,
            },
        ];
        assert!(all.iter().all(KnapsackError::is_invalid_input));
    }
}
