//! Error types for failed checks and misconfigured rules
//!
//! A [`Rejection`] is what a rule produces when a field value fails its
//! check: an error code for the host framework's message resolution, the
//! positional message arguments, and a default message used when the host
//! has nothing better.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Positional message arguments attached to a rejection.
///
/// Most rejections carry zero to three args (bound values, the offending
/// value), so they live inline.
pub type RejectArgs = SmallVec<[Cow<'static, str>; 3]>;

// ============================================================================
// REJECTION
// ============================================================================

/// The outcome of a failed check.
///
/// A rejection is *not* a rendered error message: the `code` is the key the
/// host framework resolves against its own message source, `args` are the
/// positional parameters for that message, and `message` is the fallback
/// text shown when no resolution happens.
///
/// # Examples
///
/// ```rust,ignore
/// use formguard::foundation::Rejection;
///
/// // Static strings — zero allocation:
/// let rejection = Rejection::new("length.under_min", "value is too short");
///
/// // With message args:
/// let rejection = Rejection::new("range", "value out of range")
///     .with_arg("18")
///     .with_arg("100");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// Error code for programmatic handling and host-side message lookup.
    ///
    /// Examples: "required", "length.over_max", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Default human-readable message in English.
    ///
    /// The host framework is expected to resolve `code` + `args` instead;
    /// this is the fallback.
    pub message: Cow<'static, str>,

    /// Positional parameters for the host's message template.
    pub args: RejectArgs,
}

impl Rejection {
    /// Creates a new rejection with a code and default message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            args: RejectArgs::new(),
        }
    }

    /// Appends a positional message argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Into<Cow<'static, str>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends every argument from an iterator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Cow<'static, str>>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replaces the error code.
    ///
    /// Used by the reject helpers: the caller's code wins over the rule's
    /// default, unless the caller passed an empty code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        let code = code.into();
        if !code.is_empty() {
            self.code = code;
        }
        self
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.args.is_empty() {
            write!(f, " (args: [")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A rule was constructed with arguments that can never validate anything.
///
/// These are caller bugs (inverted bounds, malformed regex), distinct from
/// a [`Rejection`], which is an ordinary "this value failed" outcome.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A two-sided bound where the maximum sorts below the minimum.
    #[error("max {max} must be greater than or equal to min {min}")]
    InvalidBounds {
        /// Display rendering of the minimum bound.
        min: String,
        /// Display rendering of the maximum bound.
        max: String,
    },

    /// The regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_rejection() {
        let rejection = Rejection::new("required", "value is required");
        assert_eq!(rejection.code, "required");
        assert_eq!(rejection.message, "value is required");
        assert!(rejection.args.is_empty());
    }

    #[test]
    fn rejection_with_args() {
        let rejection = Rejection::new("range", "out of range")
            .with_arg("18")
            .with_arg("100");
        assert_eq!(rejection.args.as_slice(), ["18", "100"]);
    }

    #[test]
    fn with_code_replaces() {
        let rejection = Rejection::new("range", "out of range").with_code("error.age.invalid");
        assert_eq!(rejection.code, "error.age.invalid");
    }

    #[test]
    fn with_code_keeps_default_on_empty() {
        let rejection = Rejection::new("range", "out of range").with_code("");
        assert_eq!(rejection.code, "range");
    }

    #[test]
    fn display_includes_args() {
        let rejection = Rejection::new("range", "out of range").with_arg("5");
        assert_eq!(rejection.to_string(), "range: out of range (args: [5])");
    }

    #[test]
    fn zero_alloc_static_strings() {
        let rejection = Rejection::new("required", "value is required");
        assert!(matches!(rejection.code, Cow::Borrowed(_)));
        assert!(matches!(rejection.message, Cow::Borrowed(_)));
    }

    #[test]
    fn rule_error_display() {
        let err = RuleError::InvalidBounds {
            min: "10".to_string(),
            max: "5".to_string(),
        };
        assert_eq!(err.to_string(), "max 5 must be greater than or equal to min 10");
    }
}
