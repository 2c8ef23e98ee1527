//! Core types and traits
//!
//! This module contains the building blocks the rest of the crate is
//! assembled from:
//!
//! - **Traits**: [`Check`]
//! - **Errors**: [`Rejection`], [`RuleError`]
//!
//! # Architecture
//!
//! A rule is a small stateless value implementing [`Check`] against a typed
//! input. A failed check produces a [`Rejection`] — an error code plus
//! message args, never rendered text. The binding layer
//! ([`crate::binding`]) pulls field values out of an error collector, runs
//! rules, and records rejections; the `reject_if_*` helpers in
//! [`crate::reject`] wrap the two into one call.
//!
//! Misconfigured rules (inverted bounds, malformed regex) surface as
//! [`RuleError`] at construction time, not as rejections at check time.

pub mod error;
pub mod traits;

pub use error::{RejectArgs, Rejection, RuleError};
pub use traits::Check;

/// A check outcome using the standard [`Rejection`].
pub type CheckResult = Result<(), Rejection>;
