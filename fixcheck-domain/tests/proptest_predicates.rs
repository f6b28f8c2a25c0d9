//! Property-based tests for the check aggregates.
//!
//! These tests verify that:
//! - `all_fixes_applied` is exactly "every required pattern occurs"
//! - each forbidden check fires iff one of its spellings occurs
//! - `success` and the exit code follow from the two aggregates
//! - evaluating the same contents twice yields the same verdict

use fixcheck_domain::{evaluate, CheckKind, CHECK_CATALOG};
use proptest::prelude::*;

/// Every pattern from the catalog plus some near misses.
fn fragments() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = CHECK_CATALOG
        .iter()
        .flat_map(|c| c.patterns.iter().copied())
        .collect();
    out.extend([
        "settingsManager",
        "SettingsManager.defaults.layouts.normal",
        ": 0.4,",
        ": 0.3",
        ": 0.6 ",
        "ratio",
        "\n",
        "const x = 1;",
    ]);
    out
}

/// File contents assembled from catalog patterns, near misses and filler text.
fn arb_contents() -> impl Strategy<Value = String> {
    let pieces = prop_oneof![
        prop::sample::select(fragments()).prop_map(|s| s.to_string()),
        "[a-z {}();=.]{0,12}",
    ];
    prop::collection::vec(pieces, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn all_fixes_applied_iff_every_required_pattern_present(contents in arb_contents()) {
        let expected = CHECK_CATALOG
            .iter()
            .filter(|c| c.kind == CheckKind::Required)
            .all(|c| c.patterns.iter().all(|p| contents.contains(p)));
        prop_assert_eq!(evaluate(&contents).all_fixes_applied(), expected);
    }

    #[test]
    fn forbidden_check_fires_iff_a_spelling_present(contents in arb_contents()) {
        let v = evaluate(&contents);
        for outcome in v.forbidden() {
            let expected = outcome.check.patterns.iter().any(|p| contents.contains(p));
            prop_assert_eq!(outcome.matched, expected, "check {}", outcome.check.id);
        }
    }

    #[test]
    fn success_is_conjunction_of_aggregates(contents in arb_contents()) {
        let v = evaluate(&contents);
        prop_assert_eq!(v.success(), v.all_fixes_applied() && v.no_old_code());
        prop_assert_eq!(v.exit_code() == 0, v.success());
    }

    #[test]
    fn evaluation_is_deterministic(contents in arb_contents()) {
        prop_assert_eq!(evaluate(&contents), evaluate(&contents));
    }
}
