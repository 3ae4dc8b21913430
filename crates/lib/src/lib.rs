//!
//! Doorman: a multi-tenant authentication broker.
//!
//! Doorman manages many independent sub-applications, each with its own admin
//! identity, and brokers login/logout/session-lookup across all of them
//! through one entry point. It does not verify credentials or mint tokens
//! itself; that work is delegated to an external single-tenant authenticator
//! which is handed a freshly derived runtime document for one tenant at a
//! time.
//!
//! ## Core Concepts
//!
//! * **Base policy (`policy::BasePolicy`)**: Process-wide immutable settings
//!   (secret key, token parameters, cookie flags, storage folders) loaded
//!   once at startup.
//! * **Identity store (`identity::IdentityStore`)**: Read-only access to one
//!   JSON record per tenant, addressed by a deterministic key derived from
//!   the username (`identity::IdentityKey`).
//! * **Session broker (`broker::SessionBroker`)**: Projects {identity, base
//!   policy} into a per-tenant runtime document, binds the external
//!   authenticator to it, delegates the credential check, and discovers the
//!   currently active session by scanning all derived documents.
//! * **Authenticator seam (`authenticator`)**: Traits describing the external
//!   single-tenant authenticator, plus a file-backed reference
//!   implementation used by the test suite.

pub mod authenticator;
pub mod broker;
pub mod constants;
pub mod identity;
pub mod policy;

pub use broker::{AuthenticationContext, RuntimeConfig, SessionBroker};
pub use identity::{Identity, IdentityKey, IdentityStore};
pub use policy::BasePolicy;

/// Result type used throughout the Doorman library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Doorman library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured base policy errors from the policy module
    #[error(transparent)]
    Policy(policy::PolicyError),

    /// Structured identity store errors from the identity module
    #[error(transparent)]
    Identity(identity::IdentityError),

    /// Structured errors from the external authenticator seam
    #[error(transparent)]
    Authenticator(authenticator::AuthenticatorError),

    /// Structured session broker errors from the broker module
    #[error(transparent)]
    Broker(broker::BrokerError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Policy(_) => "policy",
            Error::Identity(_) => "identity",
            Error::Authenticator(_) => "authenticator",
            Error::Broker(_) => "broker",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Identity(identity_err) => identity_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a startup configuration failure.
    pub fn is_policy_error(&self) -> bool {
        matches!(self, Error::Policy(_))
    }

    /// Check if this error came from deriving, persisting, or reading a
    /// per-tenant runtime document.
    pub fn is_runtime_document_error(&self) -> bool {
        match self {
            Error::Broker(broker_err) => {
                broker_err.is_derivation_error() || broker_err.is_runtime_document_error()
            }
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Policy(policy_err) => policy_err.is_unreadable(),
            Error::Identity(identity_err) => identity_err.is_io_error(),
            Error::Authenticator(auth_err) => auth_err.is_io_error(),
            Error::Broker(broker_err) => broker_err.is_io_error(),
            _ => false,
        }
    }
}
