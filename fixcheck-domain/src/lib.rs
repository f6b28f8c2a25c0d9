//! Domain logic: decide whether the layout ratio fix is present in a target file.
//!
//! This crate owns *what* is checked and how the verdict is derived. Turning a verdict into text
//! is the `fixcheck-render` crate's job.

mod catalog;
mod error;
mod ports;
mod validation;

pub use catalog::{Check, CheckKind, CHECK_CATALOG};
pub use error::{CheckError, CheckResult};
pub use ports::{resolve_target, FsTarget, TargetSource, DEFAULT_TARGET_REL};
pub use validation::{evaluate, validate_target, CheckOutcome, Validation};
