//! Error types for fixcheck-domain.
//!
//! Only input problems are errors. A file that fails its checks is a normal
//! [`Validation`](crate::Validation) with `success() == false`.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors that stop verification before any check is evaluated.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The target file does not exist.
    #[error("target file not found: {path}")]
    MissingTarget {
        /// The resolved path that was looked up.
        path: Utf8PathBuf,
    },

    /// The target exists but could not be read.
    #[error("read target file {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Returns true if the target file was absent.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, CheckError::MissingTarget { .. })
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Utf8Path {
        match self {
            CheckError::MissingTarget { path } | CheckError::Read { path, .. } => path.as_path(),
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias using CheckError.
pub type CheckResult<T> = Result<T, CheckError>;
