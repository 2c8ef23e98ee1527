//! Date rules
//!
//! Fields arrive as text; these rules parse the display string with a
//! `chrono` format and, for [`DateBound`], compare the parsed calendar
//! date against a bound. An unparseable value fails the bound check too —
//! a malformed date is never "in range".

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::codes;
use crate::foundation::{Check, Rejection};

/// Ordering a parsed date must satisfy relative to the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrdering {
    /// Strictly before the bound.
    Before,
    /// On the bound date or after it.
    OnOrAfter,
    /// On the bound date or before it.
    OnOrBefore,
}

// ============================================================================
// DATE FORMAT
// ============================================================================

/// The string must parse as a calendar date under a format.
///
/// # Examples
///
/// ```
/// use formguard::checks::DateFormat;
/// use formguard::foundation::Check;
///
/// let rule = DateFormat::default();
/// assert!(rule.check("24.12.2025").is_ok());
/// assert!(rule.check("2025-12-24").is_err());
/// assert!(rule.check("31.02.2025").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    format: Cow<'static, str>,
}

impl DateFormat {
    /// A rule for the given `chrono` format string.
    #[must_use]
    pub fn new(format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// The format string in use.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Parses `input`, trimming surrounding whitespace first.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), &self.format).ok()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(codes::DEFAULT_DATE_FORMAT)
    }
}

impl Check for DateFormat {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        if self.parse(input).is_some() {
            Ok(())
        } else {
            Err(
                Rejection::new(codes::DATE_INVALID, "value is not a valid date")
                    .with_arg(self.format.clone()),
            )
        }
    }
}

// ============================================================================
// DATE BOUND
// ============================================================================

/// The string must parse as a date and satisfy an ordering against a bound.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formguard::checks::{DateBound, DateOrdering};
/// use formguard::foundation::Check;
///
/// let cutoff = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let rule = DateBound::new(cutoff, DateOrdering::OnOrAfter);
/// assert!(rule.check("15.06.2025").is_ok());
/// assert!(rule.check("31.12.2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateBound {
    format: DateFormat,
    bound: NaiveDate,
    ordering: DateOrdering,
}

impl DateBound {
    /// A bound rule using the default date format.
    #[must_use]
    pub fn new(bound: NaiveDate, ordering: DateOrdering) -> Self {
        Self {
            format: DateFormat::default(),
            bound,
            ordering,
        }
    }

    /// Overrides the date format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.format = DateFormat::new(format);
        self
    }

    /// The bound date.
    pub fn bound(&self) -> NaiveDate {
        self.bound
    }
}

impl Check for DateBound {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let Some(parsed) = self.format.parse(input) else {
            return Err(
                Rejection::new(codes::DATE_INVALID, "value is not a valid date")
                    .with_arg(self.format.format().to_owned()),
            );
        };

        let valid = match self.ordering {
            DateOrdering::Before => parsed < self.bound,
            DateOrdering::OnOrAfter => parsed >= self.bound,
            DateOrdering::OnOrBefore => parsed <= self.bound,
        };

        if valid {
            Ok(())
        } else {
            let message = match self.ordering {
                DateOrdering::Before => "date must be before the cutoff",
                DateOrdering::OnOrAfter => "date must not be before the cutoff",
                DateOrdering::OnOrBefore => "date must not be after the cutoff",
            };
            Err(Rejection::new(codes::DATE_OUT_OF_RANGE, message)
                .with_arg(self.bound.to_string())
                .with_arg(parsed.to_string()))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
