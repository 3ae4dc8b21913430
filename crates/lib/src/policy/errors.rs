//! Base policy error types for the Doorman library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the base policy document.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The policy document could not be read from disk.
    #[error("Base policy unreadable at '{path}': {source}")]
    Unreadable {
        /// Path the policy was loaded from
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The policy document did not parse as a valid policy.
    #[error("Base policy malformed at '{path}': {source}")]
    Malformed {
        /// Path the policy was loaded from
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PolicyError {
    /// Check if this error is an I/O failure rather than a parse failure.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, PolicyError::Unreadable { .. })
    }

    /// Check if this error is a parse failure.
    pub fn is_malformed(&self) -> bool {
        matches!(self, PolicyError::Malformed { .. })
    }

    /// Get the path of the offending document.
    pub fn path(&self) -> &PathBuf {
        match self {
            PolicyError::Unreadable { path, .. } | PolicyError::Malformed { path, .. } => path,
        }
    }
}

impl From<PolicyError> for crate::Error {
    fn from(err: PolicyError) -> Self {
        crate::Error::Policy(err)
    }
}
