//! The session broker: identity resolution and session binding.
//!
//! The broker is the one entry point over all tenants. Authentication
//! resolves a username to its identity record, regenerates the tenant's
//! runtime document, and delegates the credential check to an authenticator
//! bound to that document. Session discovery goes the other way: with no
//! username in hand, it scans every derived document, probes each bound
//! authenticator for a live session, and reconstitutes the owning identity
//! from the first hit.

use std::{fs, path::PathBuf, sync::Arc};

use tracing::{debug, warn};

mod config;
mod context;
pub mod errors;

pub use config::RuntimeConfig;
pub use context::AuthenticationContext;
pub use errors::BrokerError;

use crate::{
    BasePolicy, Identity, IdentityKey, IdentityStore, Result,
    authenticator::AuthenticatorFactory,
};

/// Brokers login, logout, and session lookup across all registered tenants.
pub struct SessionBroker {
    policy: BasePolicy,
    identities: IdentityStore,
    factory: Arc<dyn AuthenticatorFactory>,
}

impl SessionBroker {
    /// Create a broker over a loaded base policy and an authenticator
    /// factory.
    ///
    /// The identity store is rooted at the policy's user folder.
    pub fn new(policy: BasePolicy, factory: Arc<dyn AuthenticatorFactory>) -> Self {
        let identities = IdentityStore::new(policy.user_folder_name());
        Self {
            policy,
            identities,
            factory,
        }
    }

    /// The base policy this broker was built from.
    pub fn policy(&self) -> &BasePolicy {
        &self.policy
    }

    /// The identity store this broker resolves usernames through.
    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }

    /// Destination path of the runtime document for a username.
    pub fn runtime_config_path(&self, username: &str) -> PathBuf {
        self.policy
            .config_folder_name()
            .join(IdentityKey::for_username(username).document_name())
    }

    /// Derive the runtime document for an identity and persist it.
    ///
    /// The projection itself is [`RuntimeConfig::derive`]; this adds the one
    /// side effect of serializing it to `config_folder/<key>.json`,
    /// unconditionally overwriting any previous value. Runs before every
    /// authenticate call: the external authenticator has no notion of
    /// multiple tenants, so it must always see a fresh single-tenant view.
    ///
    /// Returns the document and the path to bind an authenticator to. A
    /// write failure is [`BrokerError::DerivationWrite`] and must abort the
    /// caller.
    pub fn derive_runtime_config(&self, identity: &Identity) -> Result<(RuntimeConfig, PathBuf)> {
        let config = RuntimeConfig::derive(identity, &self.policy);
        let path = self.runtime_config_path(&identity.admin_email);
        config.save(&path)?;
        Ok((config, path))
    }

    /// Authenticate a tenant by username and password.
    ///
    /// Returns the identity on success and `None` otherwise. The `None` arm
    /// is deliberately constant-shaped: an unknown username, an unusable
    /// identity record, and a rejected password are indistinguishable at
    /// this boundary, so callers cannot enumerate tenants. Unknown usernames
    /// fail closed before anything is derived or written.
    ///
    /// A verification failure is never retried; the caller must resubmit
    /// credentials.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Identity>> {
        if !self.identities.exists(username) {
            debug!(username, "no identity record; failing closed");
            return Ok(None);
        }

        let identity = match self.identities.load(username) {
            Ok(identity) => identity,
            Err(err) => {
                warn!(username, %err, "identity record unusable; failing closed");
                return Ok(None);
            }
        };

        let (_config, path) = self.derive_runtime_config(&identity)?;
        let mut authenticator = self.factory.bind(&path)?;
        if authenticator.authenticate(username, password)? {
            debug!(username, "authentication succeeded");
            Ok(Some(identity))
        } else {
            debug!(username, "authentication rejected");
            Ok(None)
        }
    }

    /// Discover which tenant, if any, currently holds a valid session.
    ///
    /// Scans every runtime document in the config folder in lexicographic
    /// filename order (so tenant priority is deterministic), binds an
    /// authenticator to each, and probes it for a live session. The first
    /// hit resolves the owning identity from the document's `admin_email`
    /// and returns the pair; remaining entries are not scanned.
    ///
    /// Unreadable or malformed documents, bind failures, failed probes, and
    /// stale documents whose identity record has since disappeared are
    /// logged and skipped. A missing config folder means no tenant has ever
    /// authenticated, which is simply `None`.
    ///
    /// Cost is O(tenants): one document read plus one delegated probe per
    /// entry, with no caching layer.
    pub fn current_context(&self) -> Result<Option<AuthenticationContext>> {
        let folder = self.policy.config_folder_name();
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BrokerError::ScanFailed {
                    path: folder.to_path_buf(),
                    source: e,
                }
                .into());
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            let config = match RuntimeConfig::load(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unusable runtime document");
                    continue;
                }
            };

            let authenticator = match self.factory.bind(&path) {
                Ok(authenticator) => authenticator,
                Err(err) => {
                    warn!(path = %path.display(), %err, "authenticator bind failed; skipping");
                    continue;
                }
            };

            match authenticator.is_authenticated() {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    warn!(path = %path.display(), %err, "session probe failed; skipping");
                    continue;
                }
            }

            let identity = match self.identities.load(config.admin_email()) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!(
                        admin_email = config.admin_email(),
                        %err,
                        "stale runtime document; owner record unusable"
                    );
                    continue;
                }
            };

            debug!(admin_email = config.admin_email(), "active session found");
            return Ok(Some(AuthenticationContext::new(authenticator, identity)));
        }

        Ok(None)
    }

    /// The identity of the currently logged-in tenant, if any.
    ///
    /// Null-propagating projection of [`Self::current_context`].
    pub fn authenticated_user(&self) -> Result<Option<Identity>> {
        Ok(self
            .current_context()?
            .map(AuthenticationContext::into_identity))
    }

    /// Log out of whatever session is currently active.
    ///
    /// Best-effort and idempotent: with no active session this is a no-op,
    /// and failures in discovery or in the delegated logout are logged but
    /// never surfaced.
    pub fn logout(&self) {
        match self.current_context() {
            Ok(Some(mut context)) => {
                let admin_email = context.identity().admin_email.clone();
                if let Err(err) = context.authenticator_mut().logout() {
                    warn!(%admin_email, %err, "delegated logout failed");
                } else {
                    debug!(%admin_email, "logged out");
                }
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "session discovery failed during logout"),
        }
    }
}

impl std::fmt::Debug for SessionBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBroker")
            .field("policy", &self.policy)
            .field("identities", &self.identities)
            .field("factory", &"<AuthenticatorFactory>")
            .finish()
    }
}
