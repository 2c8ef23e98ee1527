//! Comparable value bounds
//!
//! One- or two-sided inclusive bounds over any ordered operand type. The
//! missing-value asymmetry is deliberate and matches how optional fields
//! behave under partial bounds: a minimum bound fails when there is no
//! value to compare, a maximum bound passes.

use std::fmt::Display;

use crate::codes;
use crate::foundation::{Check, Rejection, RuleError};

// ============================================================================
// BOUNDS
// ============================================================================

/// Inclusive bounds over an ordered value.
///
/// At least one side must be set; [`Bounds::between`] enforces
/// `min <= max` at construction.
///
/// # Examples
///
/// ```
/// use formguard::checks::Bounds;
/// use formguard::foundation::Check;
///
/// let rule = Bounds::between(18, 100).unwrap();
/// assert!(rule.check(&42).is_ok());
/// assert!(rule.check(&17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: PartialOrd + Display> Bounds<T> {
    /// Bounds requiring `value >= min`.
    #[must_use]
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Bounds requiring `value <= max`.
    #[must_use]
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Two-sided bounds requiring `min <= value <= max`.
    ///
    /// Returns [`RuleError::InvalidBounds`] if `max` sorts below `min`.
    pub fn between(min: T, max: T) -> Result<Self, RuleError> {
        if max < min {
            return Err(RuleError::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Returns the minimum bound, if set.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Returns the maximum bound, if set.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    fn above_min(&self, value: Option<&T>) -> bool {
        match (&self.min, value) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(min), Some(v)) => v >= min,
        }
    }

    fn below_max(&self, value: Option<&T>) -> bool {
        match (&self.max, value) {
            (None, _) | (Some(_), None) => true,
            (Some(max), Some(v)) => v <= max,
        }
    }

    /// Checks a possibly-missing value.
    ///
    /// This is the entry the reject helpers use: a field may have no value
    /// at all, and the two sides treat that case differently (see module
    /// docs).
    pub fn check_opt(&self, value: Option<&T>) -> Result<(), Rejection> {
        let above = self.above_min(value);
        let below = self.below_max(value);

        if above && below {
            return Ok(());
        }

        let rejection = match (&self.min, &self.max) {
            (Some(min), Some(max)) => Rejection::new(
                codes::RANGE,
                format!("must be between {min} and {max}"),
            )
            .with_arg(min.to_string())
            .with_arg(max.to_string()),
            (Some(min), None) => Rejection::new(
                codes::RANGE_UNDER_MIN,
                format!("must be at least {min}"),
            )
            .with_arg(min.to_string()),
            (None, Some(max)) => Rejection::new(
                codes::RANGE_OVER_MAX,
                format!("must be at most {max}"),
            )
            .with_arg(max.to_string()),
            // at_least/at_most/between leave no way to construct this
            (None, None) => Rejection::new(codes::RANGE, "no bounds configured"),
        };
        Err(match value {
            Some(v) => rejection.with_arg(v.to_string()),
            None => rejection,
        })
    }
}

impl<T: PartialOrd + Display> Check for Bounds<T> {
    type Input = T;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        self.check_opt(Some(input))
    }
}

// ============================================================================
// TESTS
// ============================================================================
