//! Built-in rules
//!
//! Each rule is a small stateless value implementing
//! [`Check`](crate::foundation::Check). The reject helpers in
//! [`crate::reject`] wire these to a field in an error collector; the rules
//! themselves know nothing about fields or collectors and can be used
//! directly against plain values.
//!
//! # Categories
//!
//! - **Presence**: [`NotEmpty`], [`NotBlank`], [`NotPlaceholder`]
//! - **Length**: [`LengthBounds`]
//! - **Range**: [`Bounds`]
//! - **Pattern**: [`Pattern`] (shared compiled-regex cache)
//! - **Equality**: [`Equality`], [`TextEquality`]
//! - **Membership**: [`Membership`]
//! - **Dates**: [`DateFormat`], [`DateBound`]

pub mod date;
pub mod equality;
pub mod length;
pub mod membership;
pub mod pattern;
pub mod presence;
pub mod range;

pub use date::{DateBound, DateFormat, DateOrdering};
pub use equality::{Equality, TextEquality};
pub use length::LengthBounds;
pub use membership::Membership;
pub use pattern::{Pattern, cached_pattern_count, cached_regex, is_pattern_cached, pattern};
pub use presence::{NotBlank, NotEmpty, NotPlaceholder, not_blank, not_empty, not_placeholder};
pub use range::Bounds;
