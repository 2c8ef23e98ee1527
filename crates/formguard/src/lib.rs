//! # formguard
//!
//! Field-rejection helpers over a form binding's error collector.
//!
//! A web framework binds request data onto a form and hands validation an
//! errors collector. This crate turns the per-field
//! fetch-convert-check-reject dance into one call:
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! fn validate_signup(errors: &mut impl BindingErrors) {
//!     reject_if_blank(errors, "email", "error.email.required", &[]);
//!     reject_if_length_greater_than(errors, "email", 254, "error.email.invalid", &[]);
//!     reject_if_less_than(errors, "age", 18_i64, "error.age.invalid", &["18"]);
//!     reject_if_date_not_before(errors, "birth", today, "error.birth.invalid", &[]);
//! }
//! ```
//!
//! Rejections carry an error code and message args for the host
//! framework's message resolution — this crate never renders text.
//!
//! ## Layers
//!
//! - [`binding`] — the [`BindingErrors`](binding::BindingErrors) seam the
//!   helpers talk through, plus [`FormBinding`](binding::FormBinding), the
//!   reference collector.
//! - [`checks`] — the stateless rules (presence, length, range, pattern,
//!   equality, membership, dates). Usable directly against plain values.
//! - [`reject`] — the `reject_if_*` helpers wiring rules to fields.
//!
//! Use the [`check!`] macro to define project-specific predicate rules
//! with the same shape as the built-ins.

// Rejection is the fundamental error type for every check — boxing it would
// add indirection to each validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod binding;
pub mod checks;
pub mod codes;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod reject;
