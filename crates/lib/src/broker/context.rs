//! Pairing of a bound authenticator handle and the identity it resolved to.

use crate::{Identity, authenticator::TenantAuthenticator};

/// The result of session discovery: which tenant is logged in, together with
/// the authenticator handle whose session is live.
///
/// Transient by construction; a context is only ever a return value and is
/// never persisted.
pub struct AuthenticationContext {
    authenticator: Box<dyn TenantAuthenticator>,
    identity: Identity,
}

impl AuthenticationContext {
    pub(crate) fn new(authenticator: Box<dyn TenantAuthenticator>, identity: Identity) -> Self {
        Self {
            authenticator,
            identity,
        }
    }

    /// The identity that is currently authenticated.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The authenticator handle that is valid for this session.
    pub fn authenticator(&self) -> &dyn TenantAuthenticator {
        self.authenticator.as_ref()
    }

    /// Mutable access to the authenticator handle, e.g. to log out.
    pub fn authenticator_mut(&mut self) -> &mut dyn TenantAuthenticator {
        self.authenticator.as_mut()
    }

    /// Consume the context, keeping only the identity.
    pub fn into_identity(self) -> Identity {
        self.identity
    }
}

impl std::fmt::Debug for AuthenticationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationContext")
            .field("authenticator", &"<TenantAuthenticator>")
            .field("identity", &self.identity)
            .finish()
    }
}
