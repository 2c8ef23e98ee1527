//! Membership rule

use std::fmt::Display;

use crate::codes;
use crate::foundation::{Check, Rejection};

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// The value must be one of (or, negated, none of) a set of values.
///
/// # Examples
///
/// ```
/// use formguard::checks::Membership;
/// use formguard::foundation::Check;
///
/// let rule = Membership::of(vec!["red", "green", "blue"]);
/// assert!(rule.check(&"green").is_ok());
/// assert!(rule.check(&"mauve").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Membership<T> {
    values: Vec<T>,
    negate: bool,
}

impl<T: PartialEq + Display> Membership<T> {
    /// Requires the value to appear in `values`.
    #[must_use]
    pub fn of(values: Vec<T>) -> Self {
        Self {
            values,
            negate: false,
        }
    }

    /// Flips the rule: the value must NOT appear in the set.
    #[must_use = "builder methods must be chained or built"]
    pub fn negate(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Returns the configured values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Checks a field with no value at all.
    ///
    /// A missing value is in no set, so the plain rule fails and the
    /// negated rule passes.
    pub fn check_missing(&self) -> Result<(), Rejection> {
        if self.negate {
            Ok(())
        } else {
            Err(self.rejection(None))
        }
    }

    fn rejection(&self, actual: Option<&T>) -> Rejection {
        let rejection = Rejection::new(
            codes::MEMBERSHIP,
            if self.negate {
                "value is not allowed"
            } else {
                "value is not one of the allowed options"
            },
        );
        match actual {
            Some(v) => rejection.with_arg(v.to_string()),
            None => rejection,
        }
    }
}

impl<T: PartialEq + Display> Check for Membership<T> {
    type Input = T;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let mut valid = self.values.contains(input);
        if self.negate {
            valid = !valid;
        }
        if valid {
            Ok(())
        } else {
            Err(self.rejection(Some(input)))
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
    fn member_passes() {
        let rule = Membership::of(vec![1, 2, 3]);
        assert!(rule.check(&2).is_ok());
        assert!(rule.check(&4).is_err());
    }

    #[test]
    fn negated_forbids_members() {
        let rule = Membership::of(vec!["root", "admin"]).negate();
        assert!(rule.check(&"alice").is_ok());
        assert!(rule.check(&"root").is_err());
    }

    #[test]
    fn empty_set_rejects_everything() {
        let rule = Membership::<i64>::of(Vec::new());
        assert!(rule.check(&0).is_err());
    }

    #[test]
    fn rejection_carries_offending_value() {
        let err = Membership::of(vec!["a", "b"]).check(&"c").unwrap_err();
        assert_eq!(err.code, codes::MEMBERSHIP);
        assert_eq!(err.args.as_slice(), ["c"]);
    }
}
