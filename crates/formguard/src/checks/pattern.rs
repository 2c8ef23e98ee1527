//! Regular-expression rule with a shared compilation cache
//!
//! Compiling a regex is orders of magnitude more expensive than matching
//! one, and validation code tends to re-state the same few patterns on
//! every request. All [`Pattern`] rules therefore share one process-wide
//! read-through cache keyed by the pattern source; compilation happens at
//! most once per distinct pattern (double compilation under a race is
//! harmless — both threads produce the same value).

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;

use crate::codes;
use crate::foundation::{Check, Rejection, RuleError};

static COMPILED_PATTERNS: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Fetches the compiled, full-match-anchored regex for `pattern`,
/// compiling and caching it on first use.
///
/// Invalid patterns are returned as errors and never cached.
pub fn cached_regex(pattern: &str) -> Result<Regex, regex::Error> {
    {
        let cache = COMPILED_PATTERNS
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(pattern) {
            return Ok(regex.clone());
        }
    }

    // The rule matches the entire value, so anchor the caller's pattern.
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    COMPILED_PATTERNS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(pattern.to_owned(), regex.clone());
    Ok(regex)
}

/// Number of distinct patterns currently cached.
#[must_use]
pub fn cached_pattern_count() -> usize {
    COMPILED_PATTERNS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Whether a compilation for `pattern` is already cached.
#[must_use]
pub fn is_pattern_cached(pattern: &str) -> bool {
    COMPILED_PATTERNS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(pattern)
}

// ============================================================================
// PATTERN
// ============================================================================

/// The string must match (or, negated, must not match) a regex.
///
/// The match covers the entire value, not a substring.
///
/// # Examples
///
/// ```
/// use formguard::checks::Pattern;
/// use formguard::foundation::Check;
///
/// let rule = Pattern::new(r"\d{4}").unwrap();
/// assert!(rule.check("2024").is_ok());
/// assert!(rule.check("x2024").is_err());
///
/// let rule = Pattern::new(r"\d+").unwrap().negate();
/// assert!(rule.check("letters").is_ok());
/// assert!(rule.check("123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    negate: bool,
}

impl Pattern {
    /// Compiles (or fetches from the shared cache) a full-match rule for
    /// `pattern`.
    pub fn new(pattern: impl Into<String>) -> Result<Self, RuleError> {
        let source = pattern.into();
        let regex = cached_regex(&source)?;
        Ok(Self {
            source,
            regex,
            negate: false,
        })
    }

    /// Flips the rule: the value must NOT match the pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn negate(mut self) -> Self {
        self.negate = true;
        self
    }

    /// The pattern source as the caller wrote it (without anchoring).
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Check for Pattern {
    type Input = str;

    fn check(&self, input: &Self::Input) -> Result<(), Rejection> {
        let mut valid = self.regex.is_match(input);
        if self.negate {
            valid = !valid;
        }
        if valid {
            Ok(())
        } else {
            Err(Rejection::new(
                codes::PATTERN_INVALID,
                if self.negate {
                    "value matches a forbidden pattern"
                } else {
                    "value does not match the required pattern"
                },
            )
            .with_arg(self.source.clone()))
        }
    }
}

/// Creates a full-match pattern rule.
pub fn pattern(source: impl Into<String>) -> Result<Pattern, RuleError> {
    Pattern::new(source)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_not_substring() {
        let rule = Pattern::new(r"[a-z]+").unwrap();
        assert!(rule.check("abc").is_ok());
        assert!(rule.check("abc1").is_err());
        assert!(rule.check("1abc").is_err());
    }

    #[test]
    fn negate_flips_outcome() {
        let rule = Pattern::new(r"[0-9]+").unwrap().negate();
        assert!(rule.check("abc").is_ok());
        assert!(rule.check("123").is_err());
    }

    #[test]
    fn bad_pattern_is_construction_error() {
        assert!(Pattern::new(r"(unclosed").is_err());
    }

    #[test]
    fn rejection_carries_source_pattern() {
        let rule = Pattern::new(r"x{3}").unwrap();
        let err = rule.check("xx").unwrap_err();
        assert_eq!(err.code, codes::PATTERN_INVALID);
        assert_eq!(err.args.as_slice(), ["x{3}"]);
    }

    #[test]
    fn compilation_lands_in_the_shared_cache() {
        let probe = r"cache-probe-[a-f]{2}";
        assert!(!is_pattern_cached(probe));

        let _a = Pattern::new(probe).unwrap();
        assert!(is_pattern_cached(probe));
        assert!(cached_pattern_count() >= 1);

        // Second construction hits the cache instead of recompiling.
        let b = Pattern::new(probe).unwrap();
        assert_eq!(b.source(), probe);
    }

    #[test]
    fn invalid_patterns_are_not_cached() {
        let probe = r"cache-probe-(";
        assert!(Pattern::new(probe).is_err());
        assert!(!is_pattern_cached(probe));
    }

    #[test]
    fn cache_is_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let rule = Pattern::new(r"thread-probe-\d+").unwrap();
                    rule.check("thread-probe-7").is_ok()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
