//! Process-wide base policy.
//!
//! The base policy holds the settings shared by every tenant: the secret key
//! and token parameters handed to the external authenticator, cookie flags,
//! and the three storage folders (derived runtime documents, identity
//! records, session state). It is loaded once from a JSON document at
//! startup and never mutated afterwards.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::PolicyError;

use crate::Result;

/// Immutable process-wide settings shared by all tenants.
///
/// Fields are private; the struct is a read-only view of the policy document
/// it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePolicy {
    /// Secret key used by the authenticator for symmetric encryption
    secret_key: String,
    /// Length of login tokens, in bytes
    token_length: u32,
    /// Time to live for login tokens, in seconds
    token_ttl: u64,
    /// Name of the cookie holding the login token
    cookie_name: String,
    /// Folder holding derived runtime documents
    config_folder_name: PathBuf,
    /// Folder holding identity records
    user_folder_name: PathBuf,
    /// Folder holding per-tenant session state
    session_folder_name: PathBuf,
    /// Whether the login cookie is restricted to HTTPS
    cookie_ssl_only: bool,
    /// Whether the login cookie is hidden from client-side script
    cookie_http_only: bool,
}

impl BasePolicy {
    /// Load the base policy from a JSON document.
    ///
    /// Fails with [`PolicyError::Unreadable`] if the path cannot be read and
    /// [`PolicyError::Malformed`] if the document does not parse. Both are
    /// fatal at startup; there is no fallback policy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| -> crate::Error {
            PolicyError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
            .into()
        })?;
        let policy = serde_json::from_str(&raw).map_err(|e| -> crate::Error {
            PolicyError::Malformed {
                path: path.to_path_buf(),
                source: e,
            }
            .into()
        })?;
        Ok(policy)
    }

    /// Secret key used by the authenticator for symmetric encryption.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Configured length of login tokens, in bytes.
    pub fn token_length(&self) -> u32 {
        self.token_length
    }

    /// Time to live for login tokens, in seconds.
    pub fn token_ttl(&self) -> u64 {
        self.token_ttl
    }

    /// Name of the cookie configured to hold the login token.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Folder where derived runtime documents are written.
    pub fn config_folder_name(&self) -> &Path {
        &self.config_folder_name
    }

    /// Folder where identity records live.
    pub fn user_folder_name(&self) -> &Path {
        &self.user_folder_name
    }

    /// Folder where per-tenant session state is kept.
    pub fn session_folder_name(&self) -> &Path {
        &self.session_folder_name
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
