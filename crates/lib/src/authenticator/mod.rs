//! The external single-tenant authenticator seam.
//!
//! The broker never verifies credentials or mints tokens itself. It binds an
//! authenticator to one derived runtime document at a time; the bound handle
//! believes it is the only tenant in the world. These traits express that
//! collaborator contract; [`FileSessionAuthenticator`] is the file-backed
//! reference implementation the test suite runs against.

use std::path::Path;

pub mod errors;
mod file_session;

pub use errors::AuthenticatorError;
pub use file_session::{FileSessionAuthenticator, FileSessionFactory, password_digest};

use crate::Result;

/// A single-tenant authenticator bound to one derived runtime document.
///
/// Implementations own whatever session/cookie/token state they need; the
/// broker treats that state as opaque and only ever asks the three questions
/// below.
pub trait TenantAuthenticator {
    /// Verify the credentials against the bound runtime document.
    ///
    /// On success the implementation establishes whatever session state it
    /// manages. Returns `Ok(false)` on rejection; `Err` is reserved for
    /// infrastructure failures.
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool>;

    /// Check whether this handle currently holds a valid session.
    fn is_authenticated(&self) -> Result<bool>;

    /// Clear any session state this handle owns.
    ///
    /// Must be idempotent: clearing an absent session is a no-op.
    fn logout(&mut self) -> Result<()>;
}

/// Constructs [`TenantAuthenticator`] handles from runtime document paths.
///
/// The broker holds one factory for its lifetime and binds a fresh handle
/// for every authenticate call and every discovery probe.
pub trait AuthenticatorFactory: Send + Sync {
    /// Bind an authenticator to the runtime document at `config_path`.
    fn bind(&self, config_path: &Path) -> Result<Box<dyn TenantAuthenticator>>;
}
