//! String length rule
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so a
//! limit of 10 means ten characters whether the user typed ASCII or not.

use crate::codes;
use crate::foundation::{Check, Rejection, RuleError};

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Inclusive lower/upper bounds on the character count of a string.
///
/// The minimum defaults to 0 and the maximum to unbounded, so one-sided
/// bounds are expressed by leaving the other side at its default.
///
/// # Examples
///
/// ```
/// use formguard::checks::LengthBounds;
/// use formguard::foundation::Check;
///
/// let rule = LengthBounds::between(2, 5).unwrap();
/// assert!(rule.check("abc").is_ok());
/// assert!(rule.check("a").is_err());
/// assert!(rule.check("abcdef").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthBounds {
    /// Bounds requiring at least `min` characters.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    /// Bounds allowing at most `max` characters.
    #[must_use]
    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// Bounds requiring exactly `length` characters.
    #[must_use]
    pub fn exactly(length: usize) -> Self {
        Self {
            min: length,
            max: length,
        }
    }

    /// Two-sided bounds.
    ///
    /// Returns [`RuleError::InvalidBounds`] if `max < min`.
    pub fn between(min: usize, max: usize) -> Result<Self, RuleError> {
        if max < min {
            return Err(RuleError::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }
}

impl Check for LengthBounds {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let len = input.chars().count();
        if len < self.min {
            Err(Rejection::new(
                codes::LENGTH_UNDER_MIN,
                format!("must be at least {} characters", self.min),
            )
            .with_arg(self.min.to_string())
            .with_arg(len.to_string()))
        } else if len > self.max {
            Err(Rejection::new(
                codes::LENGTH_OVER_MAX,
                format!("must be at most {} characters", self.max),
            )
            .with_arg(self.max.to_string())
            .with_arg(len.to_string()))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_boundary() {
        let rule = LengthBounds::at_least(5);
        assert!(rule.check("hello").is_ok());
        assert!(rule.check("hell").is_err());
    }

    #[test]
    fn at_most_boundary() {
        let rule = LengthBounds::at_most(5);
        assert!(rule.check("hello").is_ok());
        assert!(rule.check("hello!").is_err());
        assert!(rule.check("").is_ok());
    }

    #[test]
    fn exactly_matches_only_that_length() {
        let rule = LengthBounds::exactly(3);
        assert!(rule.check("abc").is_ok());
        assert!(rule.check("ab").is_err());
        assert!(rule.check("abcd").is_err());
    }

    #[test]
    fn between_rejects_inverted_bounds() {
        assert!(LengthBounds::between(10, 5).is_err());
        assert!(LengthBounds::between(5, 5).is_ok());
    }

    #[test]
    fn counts_chars_not_bytes() {
        // "héllo" is 5 chars, 6 bytes
        let rule = LengthBounds::at_most(5);
        assert!(rule.check("h\u{e9}llo").is_ok());

        let rule = LengthBounds::at_least(3);
        assert!(rule.check("\u{1f44b}\u{1f30d}").is_err()); // 2 chars
    }

    #[test]
    fn under_min_code_and_args() {
        let err = LengthBounds::at_least(5).check("hi").unwrap_err();
        assert_eq!(err.code, codes::LENGTH_UNDER_MIN);
        assert_eq!(err.args.as_slice(), ["5", "2"]);
    }

    #[test]
    fn over_max_code() {
        let err = LengthBounds::at_most(2).check("abc").unwrap_err();
        assert_eq!(err.code, codes::LENGTH_OVER_MAX);
    }
}
