//! Error-code vocabulary
//!
//! Default codes raised by the built-in rules, plus the dotted-code helper
//! host applications use to derive per-field codes
//! (`error.<field>.required`).

/// Conventional leading segment for application error codes.
pub const ERROR_PREFIX: &str = "error";

/// Conventional trailing segment for missing-value codes.
pub const REQUIRED_SUFFIX: &str = "required";

/// Conventional trailing segment for malformed-value codes.
pub const INVALID_SUFFIX: &str = "invalid";

/// Raised when a field value cannot be converted to the rule's operand type.
pub const TYPE_MISMATCH: &str = "type_mismatch";

/// Default code for a missing or blank value.
pub const REQUIRED: &str = "required";

/// Default code for a two-sided range failure.
pub const RANGE: &str = "range";

/// Default code for a value below the minimum bound.
pub const RANGE_UNDER_MIN: &str = "range.under_min";

/// Default code for a value above the maximum bound.
pub const RANGE_OVER_MAX: &str = "range.over_max";

/// Default code for a string shorter than the minimum length.
pub const LENGTH_UNDER_MIN: &str = "length.under_min";

/// Default code for a string longer than the maximum length.
pub const LENGTH_OVER_MAX: &str = "length.over_max";

/// Default code for a pattern check failure.
pub const PATTERN_INVALID: &str = "pattern.invalid";

/// Default code for an equality check failure.
pub const EQUALITY: &str = "equality";

/// Default code for a membership check failure.
pub const MEMBERSHIP: &str = "membership";

/// Default code for a value that does not parse as a date.
pub const DATE_INVALID: &str = "date.invalid";

/// Default code for a parsed date that violates the required ordering.
pub const DATE_OUT_OF_RANGE: &str = "date.out_of_range";

/// Date format used by the date helpers when the caller supplies none.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Sentinel option value emitted by select widgets that were never touched.
pub const PLEASE_SELECT: &str = "PLEASE_SELECT";

/// Assembles a dotted error code from prefix, field name, and suffix.
///
/// # Examples
///
/// ```
/// use formguard::codes::{field_code, ERROR_PREFIX, REQUIRED_SUFFIX};
///
/// assert_eq!(field_code(ERROR_PREFIX, "email", REQUIRED_SUFFIX), "error.email.required");
/// ```
#[must_use]
pub fn field_code(prefix: &str, field: &str, suffix: &str) -> String {
    format!("{prefix}.{field}.{suffix}")
}
