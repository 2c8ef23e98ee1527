//! The `reject_if_*` convenience helpers
//!
//! Each helper reads a field's current value out of an error collector,
//! applies one rule, and records a rejection with the caller's error code
//! if the rule fails. They exist to collapse the
//! fetch-convert-check-reject dance into a single call at the use site:
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! fn validate_signup(errors: &mut impl BindingErrors) {
//!     reject_if_blank(errors, "email", "error.email.required", &[]);
//!     reject_if_length_greater_than(errors, "email", 254, "error.email.invalid", &[]);
//!     reject_if_less_than(errors, "age", 18, "error.age.invalid", &["18"]);
//! }
//! ```
//!
//! # Error codes and args
//!
//! An empty `code` falls back to the failing rule's default code. Caller
//! `args` replace the rule's own args when non-empty; with no caller args
//! the rule's diagnostic args (bounds, offending value) are recorded.
//!
//! # Compound helpers
//!
//! The `reject_if_none_or_*` family and the date helpers run a presence
//! check first and only apply the second rule when the field has no
//! rejection yet, so one call records at most one rejection.

use std::borrow::Cow;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::binding::{BindingErrors, Converted, FromFieldValue, convert_field, display_text};
use crate::checks::{
    Bounds, DateBound, DateFormat, DateOrdering, Equality, LengthBounds, Membership, Pattern,
    TextEquality, not_blank, not_empty, not_placeholder,
};
use crate::codes;
use crate::foundation::{Check, Rejection, RuleError};

// ============================================================================
// PLUMBING
// ============================================================================

/// The display string of a field, if it has one.
fn display_value<E: BindingErrors>(errors: &E, field: &str) -> Option<String> {
    errors.field_value(field).and_then(|v| display_text(&v))
}

/// Records `rejection` with the caller's code and args applied.
fn record<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    rejection: Rejection,
    code: &str,
    args: &[&str],
) {
    let mut rejection = rejection.with_code(code.to_owned());
    if !args.is_empty() {
        rejection.args = args.iter().map(|a| Cow::Owned((*a).to_string())).collect();
    }
    errors.reject_value(field, rejection);
}

/// Records a conversion failure, ignoring the caller's code.
///
/// A type mismatch is a different condition than the rule failing, so it
/// keeps its own code for the host to resolve.
fn record_mismatch<E: BindingErrors>(errors: &mut E, field: &str) {
    errors.reject_value(
        field,
        Rejection::new(codes::TYPE_MISMATCH, "value has the wrong type"),
    );
}

// ============================================================================
// PRESENCE
// ============================================================================

/// Rejects the field if its display value is missing or empty.
pub fn reject_if_empty<E: BindingErrors>(errors: &mut E, field: &str, code: &str, args: &[&str]) {
    let value = display_value(errors, field).unwrap_or_default();
    if let Err(rejection) = not_empty().check(&value) {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if its raw value is absent or bound to null.
pub fn reject_if_none<E: BindingErrors>(errors: &mut E, field: &str, code: &str, args: &[&str]) {
    let missing = errors.raw_field_value(field).is_none_or(serde_json::Value::is_null);
    if missing {
        record(
            errors,
            field,
            Rejection::new(codes::REQUIRED, "value is required"),
            code,
            args,
        );
    }
}

/// Rejects the field if its display value is missing, empty, or whitespace.
pub fn reject_if_blank<E: BindingErrors>(errors: &mut E, field: &str, code: &str, args: &[&str]) {
    let value = display_value(errors, field).unwrap_or_default();
    if let Err(rejection) = not_blank().check(&value) {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if blank or equal to a placeholder sentinel.
///
/// Select widgets submit a sentinel option (commonly
/// [`codes::PLEASE_SELECT`]) when the user never chose; both that and a
/// blank value count as "nothing selected".
pub fn reject_if_blank_or_placeholder<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    placeholder: &str,
    code: &str,
    args: &[&str],
) {
    let value = display_value(errors, field).unwrap_or_default();
    if let Err(rejection) = not_blank().check(&value) {
        record(errors, field, rejection, code, args);
        return;
    }
    if let Err(rejection) = not_placeholder(placeholder).check(&value) {
        record(errors, field, rejection, code, args);
    }
}

// ============================================================================
// RANGE
// ============================================================================

fn bounds_guard<T, E>(errors: &mut E, field: &str, bounds: &Bounds<T>, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialOrd + Display,
    E: BindingErrors,
{
    let outcome = match convert_field::<T, E>(errors, field) {
        Converted::Ok(value) => bounds.check_opt(Some(&value)),
        Converted::Missing => bounds.check_opt(None),
        Converted::Mismatch => {
            record_mismatch(errors, field);
            return;
        }
    };
    if let Err(rejection) = outcome {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if its value exceeds `max`.
pub fn reject_if_greater_than<T, E>(errors: &mut E, field: &str, max: T, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialOrd + Display,
    E: BindingErrors,
{
    bounds_guard(errors, field, &Bounds::at_most(max), code, args);
}

/// Rejects the field if its value is below `min`.
///
/// A missing or unconvertible value cannot satisfy a minimum and is
/// rejected too.
pub fn reject_if_less_than<T, E>(errors: &mut E, field: &str, min: T, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialOrd + Display,
    E: BindingErrors,
{
    bounds_guard(errors, field, &Bounds::at_least(min), code, args);
}

/// Rejects the field if its value falls outside `min..=max`.
///
/// Returns [`RuleError::InvalidBounds`] without touching the collector
/// when `max < min`.
pub fn reject_if_not_in_range<T, E>(
    errors: &mut E,
    field: &str,
    min: T,
    max: T,
    code: &str,
    args: &[&str],
) -> Result<(), RuleError>
where
    T: FromFieldValue + PartialOrd + Display,
    E: BindingErrors,
{
    let bounds = Bounds::between(min, max)?;
    bounds_guard(errors, field, &bounds, code, args);
    Ok(())
}

/// Rejects the field if blank or not parseable as an integer.
pub fn reject_if_not_integer<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    code: &str,
    args: &[&str],
) {
    reject_if_blank(errors, field, code, args);
    if errors.has_field_errors(field) {
        return;
    }
    match convert_field::<i64, E>(errors, field) {
        Converted::Ok(_) => {}
        Converted::Missing | Converted::Mismatch => {
            record(
                errors,
                field,
                Rejection::new(codes::TYPE_MISMATCH, "value must be an integer"),
                code,
                args,
            );
        }
    }
}

// ============================================================================
// LENGTH
// ============================================================================

fn length_guard<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bounds: &LengthBounds,
    code: &str,
    args: &[&str],
) {
    match display_value(errors, field) {
        Some(value) => {
            if let Err(rejection) = bounds.check(&value) {
                record(errors, field, rejection, code, args);
            }
        }
        // A field with no value has no length either way
        None => record(
            errors,
            field,
            Rejection::new(codes::LENGTH_UNDER_MIN, "value is missing"),
            code,
            args,
        ),
    }
}

/// Rejects the field if its display string is longer than `max` characters.
pub fn reject_if_length_greater_than<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    max: usize,
    code: &str,
    args: &[&str],
) {
    length_guard(errors, field, &LengthBounds::at_most(max), code, args);
}

/// Rejects the field if its display string is shorter than `min` characters.
pub fn reject_if_length_less_than<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    min: usize,
    code: &str,
    args: &[&str],
) {
    length_guard(errors, field, &LengthBounds::at_least(min), code, args);
}

/// Rejects the field if its display string length falls outside
/// `min..=max`.
pub fn reject_if_length_not_in_range<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    min: usize,
    max: usize,
    code: &str,
    args: &[&str],
) -> Result<(), RuleError> {
    let bounds = LengthBounds::between(min, max)?;
    length_guard(errors, field, &bounds, code, args);
    Ok(())
}

/// Rejects the field if its display string is not exactly `length`
/// characters.
pub fn reject_if_length_not_equal<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    length: usize,
    code: &str,
    args: &[&str],
) {
    length_guard(errors, field, &LengthBounds::exactly(length), code, args);
}

// ============================================================================
// EQUALITY
// ============================================================================

fn equality_guard<T, E>(errors: &mut E, field: &str, rule: &Equality<T>, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    let outcome = match convert_field::<T, E>(errors, field) {
        Converted::Ok(value) => rule.check(&value),
        // No value compares equal to nothing
        Converted::Missing | Converted::Mismatch => rule.check_missing(),
    };
    if let Err(rejection) = outcome {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if its value differs from `expected`.
pub fn reject_if_not_equals<T, E>(
    errors: &mut E,
    field: &str,
    expected: T,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    equality_guard(errors, field, &Equality::to(expected), code, args);
}

/// Rejects the field if its value equals `expected`.
pub fn reject_if_equals<T, E>(errors: &mut E, field: &str, expected: T, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    equality_guard(errors, field, &Equality::to(expected).negate(), code, args);
}

fn text_equality_guard<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    rule: &TextEquality,
    code: &str,
    args: &[&str],
) {
    let outcome = match display_value(errors, field) {
        Some(value) => rule.check(&value),
        None => rule.check_missing(),
    };
    if let Err(rejection) = outcome {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if its display string equals `expected`, ignoring
/// case.
pub fn reject_if_equals_ignore_case<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    expected: &str,
    code: &str,
    args: &[&str],
) {
    let rule = TextEquality::to(expected).ignore_case().negate();
    text_equality_guard(errors, field, &rule, code, args);
}

/// Rejects the field if its display string differs from `expected`,
/// ignoring case.
pub fn reject_if_not_equals_ignore_case<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    expected: &str,
    code: &str,
    args: &[&str],
) {
    let rule = TextEquality::to(expected).ignore_case();
    text_equality_guard(errors, field, &rule, code, args);
}

/// Rejects the field if missing, or if present and equal to `expected`.
pub fn reject_if_none_or_equals<T, E>(
    errors: &mut E,
    field: &str,
    expected: T,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    reject_if_none(errors, field, code, args);
    if !errors.has_field_errors(field) {
        reject_if_equals(errors, field, expected, code, args);
    }
}

/// Rejects the field if missing, or if present and different from
/// `expected`.
pub fn reject_if_none_or_not_equals<T, E>(
    errors: &mut E,
    field: &str,
    expected: T,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    reject_if_none(errors, field, code, args);
    if !errors.has_field_errors(field) {
        reject_if_not_equals(errors, field, expected, code, args);
    }
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

fn membership_guard<T, E>(
    errors: &mut E,
    field: &str,
    rule: &Membership<T>,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    let outcome = match convert_field::<T, E>(errors, field) {
        Converted::Ok(value) => rule.check(&value),
        Converted::Missing | Converted::Mismatch => rule.check_missing(),
    };
    if let Err(rejection) = outcome {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if its value is not one of `values`.
pub fn reject_if_not_in<T, E>(
    errors: &mut E,
    field: &str,
    values: Vec<T>,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    membership_guard(errors, field, &Membership::of(values), code, args);
}

/// Rejects the field if its value is one of `values`.
pub fn reject_if_in<T, E>(errors: &mut E, field: &str, values: Vec<T>, code: &str, args: &[&str])
where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    membership_guard(errors, field, &Membership::of(values).negate(), code, args);
}

/// Rejects the field if missing or not one of `values`.
pub fn reject_if_none_or_not_in<T, E>(
    errors: &mut E,
    field: &str,
    values: Vec<T>,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    reject_if_none(errors, field, code, args);
    if !errors.has_field_errors(field) {
        reject_if_not_in(errors, field, values, code, args);
    }
}

/// Rejects the field if missing, or if present and one of `values`.
pub fn reject_if_none_or_in<T, E>(
    errors: &mut E,
    field: &str,
    values: Vec<T>,
    code: &str,
    args: &[&str],
) where
    T: FromFieldValue + PartialEq + Display,
    E: BindingErrors,
{
    reject_if_none(errors, field, code, args);
    if !errors.has_field_errors(field) {
        reject_if_in(errors, field, values, code, args);
    }
}

// ============================================================================
// PATTERN
// ============================================================================

fn pattern_guard<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    rule: &Pattern,
    code: &str,
    args: &[&str],
) {
    match display_value(errors, field) {
        Some(value) => {
            if let Err(rejection) = rule.check(&value) {
                record(errors, field, rejection, code, args);
            }
        }
        // A missing value matches nothing, forbidden or required
        None => record(
            errors,
            field,
            Rejection::new(codes::PATTERN_INVALID, "value is missing"),
            code,
            args,
        ),
    }
}

/// Rejects the field if its display string does not match `pattern`
/// (full-string match).
///
/// Returns [`RuleError::BadPattern`] without touching the collector when
/// the pattern does not compile.
pub fn reject_if_pattern_mismatch<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    pattern: &str,
    code: &str,
    args: &[&str],
) -> Result<(), RuleError> {
    let rule = Pattern::new(pattern)?;
    pattern_guard(errors, field, &rule, code, args);
    Ok(())
}

/// Rejects the field if its display string matches `pattern`
/// (full-string match).
pub fn reject_if_pattern_match<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    pattern: &str,
    code: &str,
    args: &[&str],
) -> Result<(), RuleError> {
    let rule = Pattern::new(pattern)?.negate();
    pattern_guard(errors, field, &rule, code, args);
    Ok(())
}

// ============================================================================
// BOOLEAN
// ============================================================================

/// Rejects the field if `expression` is true.
///
/// The escape hatch for one-off conditions the rule set does not cover.
pub fn reject_if_true<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    expression: bool,
    code: &str,
    args: &[&str],
) {
    if expression {
        record(
            errors,
            field,
            Rejection::new(codes::INVALID_SUFFIX, "value is invalid"),
            code,
            args,
        );
    }
}

/// Rejects the field if `expression` is false.
pub fn reject_if_false<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    expression: bool,
    code: &str,
    args: &[&str],
) {
    reject_if_true(errors, field, !expression, code, args);
}

// ============================================================================
// DATES
// ============================================================================

/// Rejects the field if blank or not a valid date in the default format.
pub fn reject_if_not_date<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    code: &str,
    args: &[&str],
) {
    reject_if_not_date_with_format(errors, field, codes::DEFAULT_DATE_FORMAT, code, args);
}

/// Rejects the field if blank or not a valid date in `format`.
pub fn reject_if_not_date_with_format<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    format: &str,
    code: &str,
    args: &[&str],
) {
    reject_if_blank(errors, field, code, args);
    if errors.has_field_errors(field) {
        return;
    }
    let rule = DateFormat::new(format.to_owned());
    if let Some(value) = display_value(errors, field)
        && let Err(rejection) = rule.check(&value)
    {
        record(errors, field, rejection, code, args);
    }
}

fn date_bound_guard<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    format: &str,
    ordering: DateOrdering,
    code: &str,
    args: &[&str],
) {
    reject_if_blank(errors, field, code, args);
    if errors.has_field_errors(field) {
        return;
    }
    let rule = DateBound::new(bound, ordering).with_format(format.to_owned());
    if let Some(value) = display_value(errors, field)
        && let Err(rejection) = rule.check(&value)
    {
        record(errors, field, rejection, code, args);
    }
}

/// Rejects the field if blank, unparseable, or a date before `bound`
/// (default format).
pub fn reject_if_date_before<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    code: &str,
    args: &[&str],
) {
    reject_if_date_before_with_format(errors, field, bound, codes::DEFAULT_DATE_FORMAT, code, args);
}

/// Rejects the field if blank, unparseable, or a date before `bound`.
pub fn reject_if_date_before_with_format<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    format: &str,
    code: &str,
    args: &[&str],
) {
    date_bound_guard(errors, field, bound, format, DateOrdering::OnOrAfter, code, args);
}

/// Rejects the field if blank, unparseable, or a date NOT before `bound`
/// (default format).
pub fn reject_if_date_not_before<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    code: &str,
    args: &[&str],
) {
    reject_if_date_not_before_with_format(
        errors,
        field,
        bound,
        codes::DEFAULT_DATE_FORMAT,
        code,
        args,
    );
}

/// Rejects the field if blank, unparseable, or a date NOT before `bound`.
pub fn reject_if_date_not_before_with_format<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    format: &str,
    code: &str,
    args: &[&str],
) {
    date_bound_guard(errors, field, bound, format, DateOrdering::Before, code, args);
}

/// Rejects the field if blank, unparseable, or a date after `bound`
/// (default format).
pub fn reject_if_date_after<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    code: &str,
    args: &[&str],
) {
    reject_if_date_after_with_format(errors, field, bound, codes::DEFAULT_DATE_FORMAT, code, args);
}

/// Rejects the field if blank, unparseable, or a date after `bound`.
pub fn reject_if_date_after_with_format<E: BindingErrors>(
    errors: &mut E,
    field: &str,
    bound: NaiveDate,
    format: &str,
    code: &str,
    args: &[&str],
) {
    date_bound_guard(errors, field, bound, format, DateOrdering::OnOrBefore, code, args);
}

// ============================================================================
// SKIP LIST
// ============================================================================

/// Whether `field` appears in the caller's skip list.
///
/// Empty names on either side never match, so a sloppy skip list cannot
/// accidentally skip everything.
#[must_use]
pub fn skip_field(field: &str, skip: &[&str]) -> bool {
    if field.is_empty() {
        return false;
    }
    skip.iter().any(|name| !name.is_empty() && *name == field)
}

// ============================================================================
// TESTS
// ============================================================================
