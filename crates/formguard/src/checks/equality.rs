//! Equality rules
//!
//! [`Equality`] compares any `PartialEq` operand; [`TextEquality`] adds the
//! case-insensitive comparison that only makes sense for strings.

use std::fmt::Display;

use crate::codes;
use crate::foundation::{Check, Rejection};

// ============================================================================
// EQUALITY
// ============================================================================

/// The value must equal (or, negated, must differ from) an expected value.
///
/// # Examples
///
/// ```
/// use formguard::checks::Equality;
/// use formguard::foundation::Check;
///
/// let rule = Equality::to(42);
/// assert!(rule.check(&42).is_ok());
/// assert!(rule.check(&7).is_err());
///
/// let rule = Equality::to(0).negate();
/// assert!(rule.check(&1).is_ok());
/// assert!(rule.check(&0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equality<T> {
    expected: T,
    negate: bool,
}

impl<T: PartialEq + Display> Equality<T> {
    /// Requires the value to equal `expected`.
    #[must_use]
    pub fn to(expected: T) -> Self {
        Self {
            expected,
            negate: false,
        }
    }

    /// Flips the rule: the value must NOT equal the expected value.
    #[must_use = "builder methods must be chained or built"]
    pub fn negate(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Returns the expected value.
    pub fn expected(&self) -> &T {
        &self.expected
    }

    /// Checks a field with no value at all.
    ///
    /// A missing value never equals the expected value, so the plain rule
    /// fails and the negated rule passes.
    pub fn check_missing(&self) -> Result<(), Rejection> {
        if self.negate {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(&self) -> Rejection {
        Rejection::new(
            codes::EQUALITY,
            if self.negate {
                format!("must not equal {}", self.expected)
            } else {
                format!("must equal {}", self.expected)
            },
        )
        .with_arg(self.expected.to_string())
    }
}

impl<T: PartialEq + Display> Check for Equality<T> {
    type Input = T;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let mut valid = *input == self.expected;
        if self.negate {
            valid = !valid;
        }
        if valid { Ok(()) } else { Err(self.rejection()) }
    }
}

// ============================================================================
// TEXT EQUALITY
// ============================================================================

/// String equality with optional case folding.
///
/// Case folding uses Unicode lowercasing of both sides, so `"STRASSE"`
/// and `"strasse"` compare equal while `"straße"` does not — the rule
/// folds case, it does not normalize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextEquality {
    expected: String,
    ignore_case: bool,
    negate: bool,
}

impl TextEquality {
    /// Requires the value to equal `expected` exactly.
    #[must_use]
    pub fn to(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            ignore_case: false,
            negate: false,
        }
    }

    /// Compares without regard to case.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    /// Flips the rule: the value must NOT equal the expected string.
    #[must_use = "builder methods must be chained or built"]
    pub fn negate(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Returns the expected string.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Checks a field with no value at all (see [`Equality::check_missing`]).
    pub fn check_missing(&self) -> Result<(), Rejection> {
        if self.negate {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(&self) -> Rejection {
        Rejection::new(
            codes::EQUALITY,
            if self.negate {
                format!("must not equal '{}'", self.expected)
            } else {
                format!("must equal '{}'", self.expected)
            },
        )
        .with_arg(self.expected.clone())
    }
}

impl Check for TextEquality {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let mut valid = if self.ignore_case {
            input.to_lowercase() == self.expected.to_lowercase()
        } else {
            input == self.expected
        };
        if self.negate {
            valid = !valid;
        }
        if valid { Ok(()) } else { Err(self.rejection()) }
    }
}

// ============================================================================
// TESTS
// ============================================================================
