//! Derived per-tenant runtime documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::errors::BrokerError;
use crate::{BasePolicy, Identity, IdentityKey, Result};

/// The single-tenant configuration handed to the external authenticator.
///
/// A pure projection of {[`Identity`], [`BasePolicy`]}: bit-for-bit
/// reproducible from its inputs at any time, regenerated before every
/// authenticate call, and never a source of truth. The serialized form lives
/// at `config_folder/<key>.json` and is the only view of the world the
/// authenticator gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    admin_email: String,
    admin_password_hash: String,
    secret_key: String,
    token_length: u32,
    token_ttl: u64,
    cookie_name: String,
    /// Session state path: `session_folder/<key>.dat`
    session_file_name: PathBuf,
    cookie_ssl_only: bool,
    cookie_http_only: bool,
}

impl RuntimeConfig {
    /// Project an identity and the base policy into a runtime document.
    ///
    /// Pure: no filesystem access. Persisting the result is the broker's
    /// job, which keeps this projection independently testable.
    pub fn derive(identity: &Identity, policy: &BasePolicy) -> Self {
        let key = IdentityKey::for_username(&identity.admin_email);
        Self {
            admin_email: identity.admin_email.clone(),
            admin_password_hash: identity.admin_password_hash.clone(),
            secret_key: policy.secret_key().to_string(),
            token_length: policy.token_length(),
            token_ttl: policy.token_ttl(),
            cookie_name: policy.cookie_name().to_string(),
            session_file_name: policy.session_folder_name().join(key.session_name()),
            cookie_ssl_only: policy.cookie_ssl_only(),
            cookie_http_only: policy.cookie_http_only(),
        }
    }

    /// Load a runtime document from disk, e.g. during a discovery scan.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| BrokerError::RuntimeUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = serde_json::from_str(&raw).map_err(|e| BrokerError::RuntimeMalformed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }

    /// Serialize this document to `path`, overwriting any previous value.
    ///
    /// Creates the parent folder if it does not exist yet. Field order is
    /// fixed by the struct, so unchanged inputs produce byte-identical
    /// output.
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| BrokerError::DerivationEncode {
                path: path.to_path_buf(),
                source: e,
            })?;
        let write_err = |e: std::io::Error| BrokerError::DerivationWrite {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        fs::write(path, json).map_err(write_err)?;
        Ok(())
    }

    /// Admin email of the owning tenant.
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Opaque password hash carried from the identity record.
    pub fn admin_password_hash(&self) -> &str {
        &self.admin_password_hash
    }

    /// Secret key carried from the base policy.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Token length carried from the base policy.
    pub fn token_length(&self) -> u32 {
        self.token_length
    }

    /// Token time to live in seconds, carried from the base policy.
    pub fn token_ttl(&self) -> u64 {
        self.token_ttl
    }

    /// Cookie name carried from the base policy.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Path of this tenant's session state file.
    pub fn session_file_name(&self) -> &Path {
        &self.session_file_name
    }

    /// Whether the login cookie is restricted to HTTPS.
    pub fn cookie_ssl_only(&self) -> bool {
        self.cookie_ssl_only
    }

    /// Whether the login cookie is hidden from client-side script.
    pub fn cookie_http_only(&self) -> bool {
        self.cookie_http_only
    }
}
