//! Error types for the identity store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving identity records.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No record is addressable at the key derived from the username.
    #[error("Identity not found: {username}")]
    NotFound {
        /// The username that has no record
        username: String,
    },

    /// The record exists but could not be read.
    #[error("Identity record unreadable at '{path}': {source}")]
    Unreadable {
        /// Path of the record
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record exists but did not parse as an identity.
    #[error("Identity record malformed at '{path}': {source}")]
    Malformed {
        /// Path of the record
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IdentityError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IdentityError::NotFound { .. })
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, IdentityError::Unreadable { .. })
    }
}

impl From<IdentityError> for crate::Error {
    fn from(err: IdentityError) -> Self {
        crate::Error::Identity(err)
    }
}
