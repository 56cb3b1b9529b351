//! Value type constraints for matrix entries

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Trait for types that can be stored as matrix entries
///
/// Entries must be exact integers in practice: zero detection relies on
/// `Zero::is_zero`, and arithmetic goes through the checked operations so
/// that overflow surfaces as an error rather than a wrapped value. The text
/// format needs `FromStr` and `Display`, and sprs conversion needs
/// `Default`.
pub trait Element:
    Copy + Default + Num + CheckedAdd + CheckedSub + CheckedMul + Debug + Display + FromStr
{
}

impl<T> Element for T where
    T: Copy + Default + Num + CheckedAdd + CheckedSub + CheckedMul + Debug + Display + FromStr
{
}
