//! Error types for the authenticator seam.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur inside an authenticator implementation.
///
/// External implementations are free to surface their own failures through
/// these variants; the broker logs and skips them during discovery scans.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AuthenticatorError {
    /// Session state could not be read.
    #[error("Session state unreadable at '{path}': {source}")]
    SessionRead {
        /// Path of the session file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session state could not be written.
    #[error("Session state unwritable at '{path}': {source}")]
    SessionWrite {
        /// Path of the session file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Session state exists but did not parse.
    #[error("Session state malformed at '{path}': {source}")]
    SessionMalformed {
        /// Path of the session file
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AuthenticatorError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            AuthenticatorError::SessionRead { .. } | AuthenticatorError::SessionWrite { .. }
        )
    }

    /// Get the session file path this error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            AuthenticatorError::SessionRead { path, .. }
            | AuthenticatorError::SessionWrite { path, .. }
            | AuthenticatorError::SessionMalformed { path, .. } => path,
        }
    }
}

impl From<AuthenticatorError> for crate::Error {
    fn from(err: AuthenticatorError) -> Self {
        crate::Error::Authenticator(err)
    }
}
