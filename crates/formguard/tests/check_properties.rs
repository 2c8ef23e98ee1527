//! Property-based tests for the built-in rules.

use formguard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// BOUNDS: outcome agrees with the comparison it encodes
// ============================================================================

proptest! {
    #[test]
    fn bounds_agree_with_comparison(n in any::<i64>(), lo in -1000_i64..=0, hi in 1..=1000_i64) {
        let rule = Bounds::between(lo, hi).unwrap();
        prop_assert_eq!(rule.check(&n).is_ok(), lo <= n && n <= hi);
    }

    #[test]
    fn one_sided_bounds_partition_the_line(n in any::<i64>(), bound in any::<i64>()) {
        let min_ok = Bounds::at_least(bound).check(&n).is_ok();
        let max_ok = Bounds::at_most(bound).check(&n).is_ok();
        // at the bound both pass; elsewhere exactly one does
        if n == bound {
            prop_assert!(min_ok && max_ok);
        } else {
            prop_assert_ne!(min_ok, max_ok);
        }
    }
}

// ============================================================================
// LENGTH: counts characters, never panics on arbitrary input
// ============================================================================

proptest! {
    #[test]
    fn length_counts_chars(s in ".*", max in 0_usize..64) {
        let rule = LengthBounds::at_most(max);
        prop_assert_eq!(rule.check(&s).is_ok(), s.chars().count() <= max);
    }

    #[test]
    fn exact_length_is_between_collapsed(s in ".{0,16}") {
        let len = s.chars().count();
        prop_assert!(LengthBounds::exactly(len).check(&s).is_ok());
        if len > 0 {
            prop_assert!(LengthBounds::exactly(len - 1).check(&s).is_err());
        }
    }
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x), cache included
// ============================================================================

proptest! {
    #[test]
    fn pattern_idempotent(s in ".{0,40}") {
        let rule = Pattern::new(r"[a-z]{1,8}").unwrap();
        let r1 = rule.check(&s).is_ok();
        let r2 = rule.check(&s).is_ok();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn date_format_idempotent(s in ".{0,20}") {
        let rule = DateFormat::default();
        prop_assert_eq!(rule.check(&s).is_ok(), rule.check(&s).is_ok());
    }
}

// ============================================================================
// NEGATION: negate flips every outcome
// ============================================================================

proptest! {
    #[test]
    fn pattern_negation_flips(s in ".{0,20}") {
        let plain = Pattern::new(r"\d+").unwrap();
        let negated = Pattern::new(r"\d+").unwrap().negate();
        prop_assert_ne!(plain.check(&s).is_ok(), negated.check(&s).is_ok());
    }

    #[test]
    fn equality_negation_flips(n in any::<i64>(), expected in any::<i64>()) {
        let plain = Equality::to(expected);
        let negated = Equality::to(expected).negate();
        prop_assert_ne!(plain.check(&n).is_ok(), negated.check(&n).is_ok());
    }
}

// ============================================================================
// MEMBERSHIP: agrees with contains
// ============================================================================

proptest! {
    #[test]
    fn membership_agrees_with_contains(values in prop::collection::vec(0_i64..20, 0..8), n in 0_i64..20) {
        let rule = Membership::of(values.clone());
        prop_assert_eq!(rule.check(&n).is_ok(), values.contains(&n));
    }
}

// ============================================================================
// TEXT EQUALITY: case folding is symmetric
// ============================================================================

proptest! {
    #[test]
    fn ignore_case_is_symmetric(a in "[a-zA-Z]{0,12}", b in "[a-zA-Z]{0,12}") {
        let ab = TextEquality::to(b.clone()).ignore_case().check(&a).is_ok();
        let ba = TextEquality::to(a).ignore_case().check(&b).is_ok();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn ignore_case_accepts_case_variants(s in "[a-z]{1,12}") {
        let rule = TextEquality::to(s.clone()).ignore_case();
        prop_assert!(rule.check(&s.to_uppercase()).is_ok());
    }
}
