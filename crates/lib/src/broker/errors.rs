//! Session broker error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during broker operations.
///
/// Identity-resolution failures never appear here: the broker swallows them
/// into a "not authenticated" result by design. These variants cover the
/// infrastructure failures that must abort an operation instead.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BrokerError {
    /// A derived runtime document could not be serialized.
    #[error("Runtime document for '{path}' failed to serialize: {source}")]
    DerivationEncode {
        /// Destination path of the document
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A derived runtime document could not be written to disk.
    ///
    /// Delegating to the authenticator without a freshly derived document is
    /// unsafe, so this aborts the authenticate attempt.
    #[error("Runtime document write failed at '{path}': {source}")]
    DerivationWrite {
        /// Destination path of the document
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A runtime document exists but could not be read back.
    #[error("Runtime document unreadable at '{path}': {source}")]
    RuntimeUnreadable {
        /// Path of the document
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A runtime document exists but did not parse.
    #[error("Runtime document malformed at '{path}': {source}")]
    RuntimeMalformed {
        /// Path of the document
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config folder could not be enumerated during a discovery scan.
    #[error("Discovery scan failed over '{path}': {source}")]
    ScanFailed {
        /// The config folder being scanned
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BrokerError {
    /// Check if this error occurred while deriving and persisting a runtime
    /// document.
    pub fn is_derivation_error(&self) -> bool {
        matches!(
            self,
            BrokerError::DerivationEncode { .. } | BrokerError::DerivationWrite { .. }
        )
    }

    /// Check if this error occurred while reading a runtime document back.
    pub fn is_runtime_document_error(&self) -> bool {
        matches!(
            self,
            BrokerError::RuntimeUnreadable { .. } | BrokerError::RuntimeMalformed { .. }
        )
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            BrokerError::DerivationWrite { .. }
                | BrokerError::RuntimeUnreadable { .. }
                | BrokerError::ScanFailed { .. }
        )
    }
}

impl From<BrokerError> for crate::Error {
    fn from(err: BrokerError) -> Self {
        crate::Error::Broker(err)
    }
}
