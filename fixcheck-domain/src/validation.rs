use crate::catalog::{Check, CHECK_CATALOG};
use crate::error::{CheckError, CheckResult};
use crate::ports::TargetSource;
use tracing::debug;

/// Result of evaluating one check against the file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: &'static Check,
    /// Whether any of the check's patterns occurred.
    pub matched: bool,
}

impl CheckOutcome {
    /// A required check passes when matched, a forbidden one when not.
    pub fn passed(&self) -> bool {
        if self.check.kind.is_required() {
            self.matched
        } else {
            !self.matched
        }
    }
}

/// Every catalog check evaluated once, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub outcomes: Vec<CheckOutcome>,
}

impl Validation {
    pub fn required(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.check.kind.is_required())
    }

    pub fn forbidden(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.check.kind.is_forbidden())
    }

    /// All new patterns are present.
    pub fn all_fixes_applied(&self) -> bool {
        self.required().all(|o| o.matched)
    }

    /// None of the legacy values remain.
    pub fn no_old_code(&self) -> bool {
        self.forbidden().all(|o| !o.matched)
    }

    pub fn success(&self) -> bool {
        self.all_fixes_applied() && self.no_old_code()
    }

    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Evaluate every check against `contents`. No check is skipped when an earlier one fails.
pub fn evaluate(contents: &str) -> Validation {
    let outcomes = CHECK_CATALOG
        .iter()
        .map(|check| {
            let matched = check.matches(contents);
            debug!(check = check.id, kind = check.kind.label(), matched, "evaluated check");
            CheckOutcome { check, matched }
        })
        .collect();
    Validation { outcomes }
}

/// Read the target and evaluate it.
///
/// A missing target is reported before anything is read or evaluated.
pub fn validate_target(target: &dyn TargetSource) -> CheckResult<Validation> {
    let path = target.path();
    if !target.exists() {
        return Err(CheckError::MissingTarget {
            path: path.to_path_buf(),
        });
    }

    let contents = target.read_to_string().map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path, bytes = contents.len(), "read target");

    Ok(evaluate(&contents))
}
