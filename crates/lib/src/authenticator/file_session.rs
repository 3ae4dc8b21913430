//! File-backed reference authenticator.
//!
//! Implements the single-tenant collaborator contract over plain files: a
//! SHA-256 password digest check against the bound runtime document and a
//! JSON session marker with a Unix-timestamp expiry at the document's
//! `session_file_name`. The token, secret-key, and cookie fields of the
//! runtime document are carried for real authenticators and not interpreted
//! here.

use std::{fs, path::Path};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{AuthenticatorError, AuthenticatorFactory, TenantAuthenticator};
use crate::{Result, broker::RuntimeConfig};

/// Hex-encoded SHA-256 digest of a password.
///
/// The digest scheme used by [`FileSessionAuthenticator`] and by whatever
/// provisions its identity records. Test-grade: a production deployment
/// should bind a real authenticator with salted password hashing instead.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Session marker persisted at the runtime document's `session_file_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionMarker {
    admin_email: String,
    /// Unix timestamp after which the session is no longer valid
    expires_at: i64,
}

/// A [`TenantAuthenticator`] that keeps its session state in a marker file.
pub struct FileSessionAuthenticator {
    config: RuntimeConfig,
}

impl FileSessionAuthenticator {
    /// Bind to an already-loaded runtime document.
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    fn read_marker(&self) -> Result<Option<SessionMarker>> {
        let path = self.config.session_file_name();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthenticatorError::SessionRead {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into());
            }
        };
        let marker = serde_json::from_str(&raw).map_err(|e| AuthenticatorError::SessionMalformed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Some(marker))
    }
}

impl TenantAuthenticator for FileSessionAuthenticator {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        if username != self.config.admin_email()
            || password_digest(password) != self.config.admin_password_hash()
        {
            debug!(username, "credential check rejected");
            return Ok(false);
        }

        let marker = SessionMarker {
            admin_email: self.config.admin_email().to_string(),
            expires_at: Utc::now().timestamp() + self.config.token_ttl() as i64,
        };
        let path = self.config.session_file_name();
        let write_err = |e: std::io::Error| AuthenticatorError::SessionWrite {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(&marker)?;
        fs::write(path, json).map_err(write_err)?;
        debug!(username, expires_at = marker.expires_at, "session established");
        Ok(true)
    }

    fn is_authenticated(&self) -> Result<bool> {
        let Some(marker) = self.read_marker()? else {
            return Ok(false);
        };
        let valid =
            marker.admin_email == self.config.admin_email() && marker.expires_at > Utc::now().timestamp();
        Ok(valid)
    }

    fn logout(&mut self) -> Result<()> {
        let path = self.config.session_file_name();
        match fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthenticatorError::SessionWrite {
                path: path.to_path_buf(),
                source: e,
            }
            .into()),
        }
    }
}

/// Factory binding [`FileSessionAuthenticator`] handles to runtime documents.
#[derive(Debug, Clone, Default)]
pub struct FileSessionFactory;

impl AuthenticatorFactory for FileSessionFactory {
    fn bind(&self, config_path: &Path) -> Result<Box<dyn TenantAuthenticator>> {
        let config = RuntimeConfig::load(config_path)?;
        Ok(Box::new(FileSessionAuthenticator::new(config)))
    }
}
