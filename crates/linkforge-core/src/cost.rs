//! Cost - totally ordered linkage cost over finite `f64` values
//!
//! Costs keep full float precision. Ordering uses [`f64::total_cmp`]; NaN is
//! rejected at construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A totally ordered linkage cost. Lower is better.
///
/// # Examples
///
/// ```
/// use linkforge_core::Cost;
///
/// let a = Cost::of(2.0) + Cost::of(5.0);
/// assert_eq!(a, Cost::of(7.0));
/// assert!(Cost::of(1.5).is_better_than(&a));
/// assert_eq!(format!("{}", Cost::of(2.5)), "2.5");
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Cost {
    value: f64,
}

impl Cost {
    /// The zero cost.
    pub const ZERO: Cost = Cost { value: 0.0 };

    /// The largest representable cost.
    pub const MAX: Cost = Cost { value: f64::MAX };

    /// The smallest representable cost.
    pub const MIN: Cost = Cost { value: f64::MIN };

    /// Creates a cost from a finite value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or infinite.
    #[inline]
    pub fn of(value: f64) -> Self {
        assert!(value.is_finite(), "cost must be finite, got {value}");
        Cost::normalized(value)
    }

    /// Creates a cost, clamping infinities to [`Cost::MAX`] or [`Cost::MIN`].
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    pub fn saturating(value: f64) -> Self {
        assert!(!value.is_nan(), "cost must not be NaN");
        Cost::normalized(value.clamp(f64::MIN, f64::MAX))
    }

    /// Creates a cost from a whole number.
    #[inline]
    pub fn of_int(value: i64) -> Self {
        Cost::of(value as f64)
    }

    // Folds -0.0 into 0.0 so that equality, ordering and hashing agree.
    #[inline]
    fn normalized(value: f64) -> Self {
        Cost { value: value + 0.0 }
    }

    /// Returns the cost as a float.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.value
    }

    /// Returns true if this cost ranks ahead of `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this cost ranks behind `other`.
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost::saturating(self.value + other.value)
    }
}

impl Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost::saturating(self.value - other.value)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> f64 {
        cost.value
    }
}

impl TryFrom<f64> for Cost {
    type Error = CostParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Cost::of(value))
        } else {
            Err(CostParseError {
                message: format!("Cost '{}' is not finite", value),
            })
        }
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cost({})", self.value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Error when parsing a cost from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cost parse error: {message}")]
pub struct CostParseError {
    pub message: String,
}

impl FromStr for Cost {
    type Err = CostParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s.parse::<f64>().map_err(|e| CostParseError {
            message: format!("Invalid cost '{}': {}", s, e),
        })?;
        Cost::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        assert_eq!(Cost::of(2.0).to_f64(), 2.0);
        assert_eq!(Cost::of_int(-3), Cost::of(-3.0));
        assert_eq!(Cost::of(-0.0), Cost::ZERO);
    }

    #[test]
    fn test_comparison() {
        assert!(Cost::of(1.0) < Cost::of(1.5));
        assert!(Cost::of(1.0).is_better_than(&Cost::of(1.00001)));
        assert!(Cost::of(9.0).is_worse_than(&Cost::of(-1.0)));
    }

    #[test]
    fn test_small_differences_are_kept() {
        assert!(Cost::of(7.0) < Cost::of(7.000001));
        assert!(Cost::of(1e-12) > Cost::ZERO);
    }

    #[test]
    fn test_large_magnitudes_stay_ordered() {
        assert!(Cost::of(1e15) < Cost::of(2e15));
        assert!(Cost::of(9.3e13) < Cost::of(9.4e13));
        assert!(Cost::of(1e300) < Cost::MAX);
    }

    #[test]
    fn test_arithmetic() {
        let a = Cost::of(2.5);
        let b = Cost::of(0.25);
        assert_eq!(a + b, Cost::of(2.75));
        assert_eq!(a - b, Cost::of(2.25));
        assert_eq!([a, b, b].into_iter().sum::<Cost>(), Cost::of(3.0));
    }

    #[test]
    fn test_saturation() {
        assert_eq!(Cost::saturating(f64::INFINITY), Cost::MAX);
        assert_eq!(Cost::saturating(f64::NEG_INFINITY), Cost::MIN);
        assert_eq!(Cost::MAX + Cost::MAX, Cost::MAX);
        assert_eq!(Cost::MIN - Cost::MAX, Cost::MIN);
    }

    #[test]
    #[should_panic(expected = "cost must be finite")]
    fn test_nan_rejected() {
        let _ = Cost::of(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "cost must be finite")]
    fn test_infinity_rejected() {
        let _ = Cost::of(f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "cost must not be NaN")]
    fn test_saturating_rejects_nan() {
        let _ = Cost::saturating(f64::NAN);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cost::of(7.0)), "7");
        assert_eq!(format!("{}", Cost::of(-2.5)), "-2.5");
        assert_eq!(format!("{}", Cost::of(0.125)), "0.125");
        assert_eq!(format!("{:?}", Cost::of(7.0)), "Cost(7)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<Cost>().unwrap(), Cost::of(7.0));
        assert_eq!(" 1.25 ".parse::<Cost>().unwrap(), Cost::of(1.25));
        assert!("seven".parse::<Cost>().is_err());
        assert!("inf".parse::<Cost>().is_err());
        assert!("NaN".parse::<Cost>().is_err());
    }
}
