//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard::prelude::*;` import that brings in
//! the collector trait, the reject helpers, and the built-in rules.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! fn validate(errors: &mut impl BindingErrors) {
//!     reject_if_blank(errors, "email", "error.email.required", &[]);
//!     reject_if_not_in_range(errors, "age", 18_i64, 120_i64, "error.age.invalid", &[])?;
//! }
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Check, CheckResult, RejectArgs, Rejection, RuleError};

// ============================================================================
// BINDING: Collector seam and reference implementation
// ============================================================================

pub use crate::binding::{
    BindingErrors, Converted, FieldRejection, FormBinding, FromFieldValue, convert_field,
    display_text,
};

// ============================================================================
// CHECKS: Built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::checks::*;

// ============================================================================
// REJECT: The helper layer
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::reject::*;

// ============================================================================
// CODES: Error-code vocabulary
// ============================================================================

pub use crate::codes::{DEFAULT_DATE_FORMAT, PLEASE_SELECT, TYPE_MISMATCH, field_code};
