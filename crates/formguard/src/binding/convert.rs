//! Field value conversion
//!
//! Comparison rules operate on typed operands, but a bound field holds a
//! dynamic [`Value`]. [`FromFieldValue`] is the conversion seam: each
//! operand type declares how to read itself out of a field value, with the
//! lenient coercions form data needs (numeric strings become numbers,
//! numbers stringify).

use serde_json::Value;

use crate::binding::{BindingErrors, display_text};

/// Outcome of converting a field's value to a rule's operand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converted<T> {
    /// The field held a usable value.
    Ok(T),
    /// The field is absent or bound to null.
    Missing,
    /// The field holds a value the operand type cannot represent.
    Mismatch,
}

impl<T> Converted<T> {
    /// Returns the converted value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Converted::Ok(v) => Some(v),
            Converted::Missing | Converted::Mismatch => None,
        }
    }
}

// ============================================================================
// FROM FIELD VALUE
// ============================================================================

/// Conversion from a dynamic field value to an operand type.
pub trait FromFieldValue: Sized {
    /// Reads `Self` out of a field value, or `None` on mismatch.
    fn from_field_value(value: &Value) -> Option<Self>;
}

impl FromFieldValue for i64 {
    fn from_field_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromFieldValue for f64 {
    fn from_field_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromFieldValue for bool {
    fn from_field_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: &Value) -> Option<Self> {
        display_text(value)
    }
}

// ============================================================================
// CONVERT FIELD
// ============================================================================

/// Converts a field's current value to `T`.
///
/// The raw value is tried first; on mismatch the display value gets one
/// more chance (a host implementation may apply its own conversion layer
/// between the two views).
pub fn convert_field<T, E>(errors: &E, field: &str) -> Converted<T>
where
    T: FromFieldValue,
    E: BindingErrors + ?Sized,
{
    let Some(raw) = errors.raw_field_value(field) else {
        return Converted::Missing;
    };
    if raw.is_null() {
        return Converted::Missing;
    }
    if let Some(converted) = T::from_field_value(raw) {
        return Converted::Ok(converted);
    }
    match errors.field_value(field) {
        Some(display) => T::from_field_value(&display).map_or(Converted::Mismatch, Converted::Ok),
        None => Converted::Mismatch,
    }
}

// ============================================================================
// TESTS
// ============================================================================
