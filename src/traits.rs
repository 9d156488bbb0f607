//! Core trait definitions for knapsack instances.
//!
//! Two seams let callers bring their own numeric types:
//! - [`KnapsackValue`] bounds the value type stored in the DP table. Every
//!   primitive integer and float implements it.
//! - [`RawWeight`] converts caller-supplied weights and capacities into the
//!   `usize` column indices the table is addressed by, rejecting values that
//!   are negative, fractional or out of range.

use std::fmt::{Debug, Display};
use std::ops::Add;

use crate::error::WeightDefect;

/// Value type of a knapsack item.
///
/// Semantics:
/// - `Default::default()` is the zero value (the empty selection).
/// - `+` accumulates the value of a selection. [`checked_sum`] reports when
///   it would not fit the type; instances whose positive values cannot be
///   summed are rejected when a problem is constructed, so the table never
///   overflows.
/// - `>` decides whether including an item strictly improves a cell. Values
///   that are not comparable with themselves (float NaN) are rejected when a
///   problem is constructed.
///
/// `Send + Sync` lets rows be filled in parallel under the `parallel` feature.
///
/// [`checked_sum`]: KnapsackValue::checked_sum
pub trait KnapsackValue:
    Copy + PartialOrd + Add<Output = Self> + Default + Debug + Display + Send + Sync
{
    /// Whether this value takes part in a total order.
    #[inline]
    fn is_ordered(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// `self + rhs`, or `None` if the sum does not fit the type.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_knapsack_value_int {
    ($($t:ty),*) => {$(
        impl KnapsackValue for $t {
            #[inline]
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
        }
    )*};
}

macro_rules! impl_knapsack_value_float {
    ($($t:ty),*) => {$(
        impl KnapsackValue for $t {
            // Floats saturate to infinity instead of wrapping.
            #[inline]
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
        }
    )*};
}

impl_knapsack_value_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_knapsack_value_float!(f32, f64);

/// A caller-supplied weight or capacity prior to validation.
pub trait RawWeight: Copy {
    /// Convert to a table index, or report why that is impossible.
    fn to_weight(self) -> Result<usize, WeightDefect>;
}

macro_rules! impl_raw_weight_unsigned {
    ($($t:ty),*) => {$(
        impl RawWeight for $t {
            #[inline]
            fn to_weight(self) -> Result<usize, WeightDefect> {
                usize::try_from(self).map_err(|_| WeightDefect::TooLarge)
            }
        }
    )*};
}

macro_rules! impl_raw_weight_signed {
    ($($t:ty),*) => {$(
        impl RawWeight for $t {
            #[inline]
            fn to_weight(self) -> Result<usize, WeightDefect> {
                if self < 0 {
                    return Err(WeightDefect::Negative);
                }
                usize::try_from(self).map_err(|_| WeightDefect::TooLarge)
            }
        }
    )*};
}

macro_rules! impl_raw_weight_float {
    ($($t:ty),*) => {$(
        impl RawWeight for $t {
            fn to_weight(self) -> Result<usize, WeightDefect> {
                if !self.is_finite() {
                    return Err(WeightDefect::NotFinite);
                }
                if self < 0.0 {
                    return Err(WeightDefect::Negative);
                }
                if self.fract() != 0.0 {
                    return Err(WeightDefect::NonIntegral);
                }
                // usize::MAX rounds up to 2^N as a float, so `>=` excludes it.
                if self >= usize::MAX as $t {
                    return Err(WeightDefect::TooLarge);
                }
                Ok(self as usize)
            }
        }
    )*};
}

impl_raw_weight_unsigned!(u8, u16, u32, u64, u128, usize);
impl_raw_weight_signed!(i8, i16, i32, i64, i128, isize);
impl_raw_weight_float!(f32, f64);
