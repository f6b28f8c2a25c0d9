use serde::Serialize;

/// Whether a check's patterns must be present or must be absent.
///
/// - required: a new code pattern the fix introduced
/// - forbidden: a legacy hardcoded value the fix removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Required,
    Forbidden,
}

impl CheckKind {
    pub fn is_required(self) -> bool {
        matches!(self, CheckKind::Required)
    }
    pub fn is_forbidden(self) -> bool {
        matches!(self, CheckKind::Forbidden)
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckKind::Required => "required",
            CheckKind::Forbidden => "forbidden",
        }
    }
}

/// A named literal-substring predicate over the target file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Stable key (e.g. "normal-ratio-default").
    pub id: &'static str,
    /// Label shown in the report.
    pub title: &'static str,
    pub kind: CheckKind,
    /// Alternative spellings; the check matches if any one of them occurs.
    pub patterns: &'static [&'static str],
}

impl Check {
    /// Case-sensitive literal containment of any pattern.
    pub fn matches(&self, contents: &str) -> bool {
        self.patterns.iter().any(|p| contents.contains(p))
    }
}

/// Every check, in report order. Required checks come first.
pub static CHECK_CATALOG: &[Check] = &[
    Check {
        id: "settings-manager-import",
        title: "SettingsManager import",
        kind: CheckKind::Required,
        patterns: &["SettingsManager"],
    },
    Check {
        id: "normal-ratio-default",
        title: "normal layout ratio from SettingsManager defaults",
        kind: CheckKind::Required,
        patterns: &["SettingsManager.defaults.layouts.normal.ratio"],
    },
    Check {
        id: "focus-ratio-default",
        title: "focus layout ratio from SettingsManager defaults",
        kind: CheckKind::Required,
        patterns: &["SettingsManager.defaults.layouts.focus.ratio"],
    },
    Check {
        id: "wide-ratio-default",
        title: "wide layout ratio from SettingsManager defaults",
        kind: CheckKind::Required,
        patterns: &["SettingsManager.defaults.layouts.wide.ratio"],
    },
    // The spellings below are generic numeric fragments; an unrelated `: 0.4;` in the file
    // is reported as legacy code too.
    Check {
        id: "legacy-normal-ratio",
        title: "hardcoded normal ratio 0.40",
        kind: CheckKind::Forbidden,
        patterns: &[": 0.40", ": 0.4;"],
    },
    Check {
        id: "legacy-focus-ratio",
        title: "hardcoded focus ratio 0.30",
        kind: CheckKind::Forbidden,
        patterns: &[": 0.30", ": 0.3;"],
    },
    Check {
        id: "legacy-wide-ratio",
        title: "hardcoded wide ratio 0.60",
        kind: CheckKind::Forbidden,
        patterns: &[": 0.60", ": 0.6;"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn check_by_id(id: &str) -> Option<&'static Check> {
        CHECK_CATALOG.iter().find(|c| c.id == id)
    }

    #[test]
    fn catalog_has_four_required_and_three_forbidden() {
        let required = CHECK_CATALOG.iter().filter(|c| c.kind.is_required()).count();
        let forbidden = CHECK_CATALOG.iter().filter(|c| c.kind.is_forbidden()).count();
        assert_eq!(required, 4);
        assert_eq!(forbidden, 3);
    }

    #[test]
    fn required_checks_precede_forbidden_checks() {
        let first_forbidden = CHECK_CATALOG
            .iter()
            .position(|c| c.kind.is_forbidden())
            .expect("forbidden check");
        assert!(CHECK_CATALOG[..first_forbidden]
            .iter()
            .all(|c| c.kind.is_required()));
        assert!(CHECK_CATALOG[first_forbidden..]
            .iter()
            .all(|c| c.kind.is_forbidden()));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CHECK_CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHECK_CATALOG.len());
    }

    #[test]
    fn forbidden_checks_have_two_spellings() {
        for check in CHECK_CATALOG.iter().filter(|c| c.kind.is_forbidden()) {
            assert_eq!(check.patterns.len(), 2, "{}", check.id);
        }
    }

    #[test]
    fn matches_is_case_sensitive() {
        let import = check_by_id("settings-manager-import").expect("import check");
        assert!(import.matches("import { SettingsManager } from './settings';"));
        assert!(!import.matches("import { settingsManager } from './settings';"));
    }

    #[test]
    fn forbidden_check_matches_either_spelling() {
        let normal = check_by_id("legacy-normal-ratio").expect("legacy check");
        assert!(normal.matches("ratio: 0.40,"));
        assert!(normal.matches("const r = { ratio: 0.4; }"));
        assert!(!normal.matches("ratio: 0.4,"));
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(check_by_id("does-not-exist").is_none());
    }
}
