//! Macro for defining predicate rules with minimal boilerplate.
//!
//! [`check!`] generates the struct, the [`Check`](crate::foundation::Check)
//! implementation, a constructor, and a lowercase factory function in one
//! declaration. It covers the simple predicate rules; rules with fallible
//! constructors or bespoke logic (bounds, patterns, dates) are written by
//! hand.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formguard::check;
//! use formguard::foundation::Rejection;
//!
//! // Unit rule (no fields)
//! check! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     reject(input) { Rejection::new("required", "value must not be empty") }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! check! {
//!     pub MinWords { min: usize } for str;
//!     rule(self, input) { input.split_whitespace().count() >= self.min }
//!     reject(self, input) { Rejection::new("min_words", "not enough words") }
//!     fn min_words(min: usize);
//! }
//! ```

/// Creates a complete predicate rule: struct, `Check` impl, constructor,
/// and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]` on the declaration.
#[macro_export]
macro_rules! check {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        reject($rinp:ident) $rej:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::Rejection> {
                if $rule {
                    Ok(())
                } else {
                    let $rinp = $inp;
                    Err($rej)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        reject($self2:ident, $rinp:ident) $rej:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            reject($self2, $rinp) $rej
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        reject($self2:ident, $rinp:ident) $rej:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Check for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::Rejection> {
                if $rule {
                    Ok(())
                } else {
                    let $rinp = $inp;
                    Err($rej)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Check, Rejection};

    check! {
        /// A test unit rule.
        TestNotEmpty for str;
        rule(input) { !input.is_empty() }
        reject(input) { Rejection::new("required", "must not be empty") }
        fn test_not_empty();
    }

    #[test]
    fn unit_rule() {
        let rule = TestNotEmpty;
        assert!(rule.check("hello").is_ok());
        assert!(rule.check("").is_err());
    }

    #[test]
    fn unit_factory() {
        let rule = test_not_empty();
        assert!(rule.check("x").is_ok());
    }

    check! {
        TestMinWords { min: usize } for str;
        rule(self, input) { input.split_whitespace().count() >= self.min }
        reject(self, input) {
            Rejection::new("min_words", format!("need {} words", self.min))
        }
        fn test_min_words(min: usize);
    }

    #[test]
    fn struct_rule() {
        let rule = TestMinWords { min: 2 };
        assert!(rule.check("two words").is_ok());
        assert!(rule.check("one").is_err());
    }

    #[test]
    fn struct_new_and_factory() {
        assert!(TestMinWords::new(1).check("word").is_ok());
        assert!(test_min_words(3).check("just two").is_err());
    }

    check! {
        TestSentinel { sentinel: String } for str;
        rule(self, input) { input != self.sentinel }
        reject(self, input) {
            Rejection::new("sentinel", "sentinel value not allowed")
        }
        new(sentinel: impl Into<String>) { Self { sentinel: sentinel.into() } }
        fn test_sentinel(sentinel: impl Into<String>);
    }

    #[test]
    fn custom_new_body() {
        let rule = test_sentinel("NONE");
        assert!(rule.check("value").is_ok());
        assert!(rule.check("NONE").is_err());
    }

    #[test]
    fn rejection_content() {
        let err = TestMinWords { min: 5 }.check("hi").unwrap_err();
        assert_eq!(err.code, "min_words");
        assert_eq!(err.message, "need 5 words");
    }
}
