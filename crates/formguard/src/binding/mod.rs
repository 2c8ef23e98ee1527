//! The error-collector seam
//!
//! [`BindingErrors`] is the capability the reject helpers need from the
//! host framework: read a field's current value (raw and display), record
//! a rejection against a field, and answer whether a field already has
//! rejections. Any web framework's error-accumulation type can implement
//! it; [`FormBinding`] is the in-crate reference implementation used by
//! the test suite and by standalone callers.
//!
//! Field values are [`serde_json::Value`] — the common dynamic shape form
//! data takes after deserialization, whatever the transport was.

pub mod convert;

pub use convert::{Converted, FromFieldValue, convert_field};

use serde::Serialize;
use serde_json::Value;

use crate::foundation::{RejectArgs, Rejection};

// ============================================================================
// BINDING ERRORS TRAIT
// ============================================================================

/// A form's error collector, as seen by the reject helpers.
///
/// # Raw vs display values
///
/// `raw_field_value` is the value exactly as it was bound — `None` only
/// when the field is absent, and possibly `Value::Null` when it was bound
/// as null. `field_value` is the converted/display view: absent and null
/// both collapse to `None`. Null-sensitive helpers (`reject_if_none`,
/// equality, membership) read the raw value; string helpers read the
/// display value.
pub trait BindingErrors {
    /// The converted/display value of a field.
    fn field_value(&self, field: &str) -> Option<Value>;

    /// The raw bound value of a field.
    fn raw_field_value(&self, field: &str) -> Option<&Value>;

    /// Records a rejection against a field.
    fn reject_value(&mut self, field: &str, rejection: Rejection);

    /// Whether the field already has at least one rejection.
    ///
    /// Compound helpers short-circuit on this so a field collects one
    /// rejection per call chain, not one per sub-check.
    fn has_field_errors(&self, field: &str) -> bool;
}

// ============================================================================
// FIELD REJECTION
// ============================================================================

/// A recorded rejection: a [`Rejection`] pinned to a field name.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRejection {
    /// The field the rejection was recorded against.
    pub field: String,
    /// Error code for the host's message resolution.
    pub code: std::borrow::Cow<'static, str>,
    /// Positional message arguments.
    pub args: RejectArgs,
    /// Default message used when the host resolves nothing.
    pub message: std::borrow::Cow<'static, str>,
}

impl FieldRejection {
    /// Pins a rejection to a field.
    #[must_use]
    pub fn new(field: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            field: field.into(),
            code: rejection.code,
            args: rejection.args,
            message: rejection.message,
        }
    }
}

impl std::fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.code, self.message)
    }
}

// ============================================================================
// FORM BINDING
// ============================================================================

/// Reference [`BindingErrors`] implementation over a flat field map.
///
/// # Examples
///
/// ```
/// use formguard::binding::{BindingErrors, FormBinding};
/// use formguard::reject::reject_if_blank;
/// use serde_json::json;
///
/// let mut binding = FormBinding::new()
///     .with_field("name", json!("  "))
///     .with_field("age", json!(30));
///
/// reject_if_blank(&mut binding, "name", "error.name.required", &[]);
///
/// assert!(binding.has_field_errors("name"));
/// assert!(!binding.has_field_errors("age"));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormBinding {
    values: serde_json::Map<String, Value>,
    rejections: Vec<FieldRejection>,
}

impl FormBinding {
    /// An empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a binding from any serializable form struct.
    ///
    /// The struct must serialize to a JSON object; nested values stay
    /// nested and are addressed by their top-level field name.
    pub fn from_form<F: Serialize>(form: &F) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(form)?;
        match value {
            Value::Object(values) => Ok(Self {
                values,
                rejections: Vec::new(),
            }),
            other => Err(serde::ser::Error::custom(format!(
                "form must serialize to an object, got {other}"
            ))),
        }
    }

    /// Adds a field value, replacing any previous one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>, value: Value) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    /// Sets a field value in place.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }

    /// All recorded rejections, in recording order.
    pub fn rejections(&self) -> &[FieldRejection] {
        &self.rejections
    }

    /// Rejections recorded against one field.
    pub fn rejections_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a FieldRejection> {
        self.rejections.iter().filter(move |r| r.field == field)
    }

    /// Total number of recorded rejections.
    pub fn error_count(&self) -> usize {
        self.rejections.len()
    }

    /// True when nothing has been rejected.
    pub fn is_ok(&self) -> bool {
        self.rejections.is_empty()
    }
}

impl BindingErrors for FormBinding {
    fn field_value(&self, field: &str) -> Option<Value> {
        match self.values.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.clone()),
        }
    }

    fn raw_field_value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    fn reject_value(&mut self, field: &str, rejection: Rejection) {
        self.rejections.push(FieldRejection::new(field, rejection));
    }

    fn has_field_errors(&self, field: &str) -> bool {
        self.rejections.iter().any(|r| r.field == field)
    }
}

// ============================================================================
// DISPLAY TEXT
// ============================================================================

/// Renders a field value the way it would re-render in a form.
///
/// Strings pass through unquoted; numbers and booleans stringify;
/// containers render as their JSON text. `Null` has no display text.
#[must_use]
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_collapse_in_display_view() {
        let binding = FormBinding::new().with_field("opt", Value::Null);
        assert!(binding.field_value("opt").is_none());
        assert!(binding.field_value("missing").is_none());
    }

    #[test]
    fn raw_view_distinguishes_null_from_absent() {
        let binding = FormBinding::new().with_field("opt", Value::Null);
        assert_eq!(binding.raw_field_value("opt"), Some(&Value::Null));
        assert_eq!(binding.raw_field_value("missing"), None);
    }

    #[test]
    fn reject_records_field_and_code() {
        let mut binding = FormBinding::new();
        binding.reject_value("age", Rejection::new("range", "out of range"));

        assert!(binding.has_field_errors("age"));
        assert!(!binding.has_field_errors("name"));
        assert_eq!(binding.error_count(), 1);
        assert_eq!(binding.rejections()[0].code, "range");
    }

    #[test]
    fn rejections_for_filters_by_field() {
        let mut binding = FormBinding::new();
        binding.reject_value("a", Rejection::new("one", ""));
        binding.reject_value("b", Rejection::new("two", ""));
        binding.reject_value("a", Rejection::new("three", ""));

        let codes: Vec<_> = binding.rejections_for("a").map(|r| r.code.clone()).collect();
        assert_eq!(codes, ["one", "three"]);
    }

    #[test]
    fn from_form_flattens_a_struct() {
        #[derive(Serialize)]
        struct Signup {
            email: String,
            age: u32,
        }

        let binding = FormBinding::from_form(&Signup {
            email: "a@b.example".into(),
            age: 33,
        })
        .unwrap();

        assert_eq!(binding.field_value("email"), Some(json!("a@b.example")));
        assert_eq!(binding.field_value("age"), Some(json!(33)));
    }

    #[test]
    fn from_form_rejects_non_objects() {
        assert!(FormBinding::from_form(&42).is_err());
    }

    #[test]
    fn display_text_renders_scalars() {
        assert_eq!(display_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(display_text(&json!(12)), Some("12".to_string()));
        assert_eq!(display_text(&json!(true)), Some("true".to_string()));
        assert_eq!(display_text(&json!(null)), None);
    }

    #[test]
    fn display_text_renders_containers_as_json() {
        assert_eq!(display_text(&json!([1, 2])), Some("[1,2]".to_string()));
    }
}
