//! Identity records and the read-only store that resolves them.
//!
//! One JSON record per registered tenant lives in the user folder, addressed
//! by the deterministic key of the tenant's admin email. Doorman only reads
//! these records; provisioning new identities is an external concern.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub mod errors;
mod key;

pub use errors::IdentityError;
pub use key::IdentityKey;

use crate::Result;

/// One registered tenant.
///
/// Persisted as `user_folder/<key>.json` where `<key>` is
/// [`IdentityKey::for_username`] of the admin email. Records are created
/// out-of-band and never mutated by Doorman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Admin email address; the tenant's primary external key
    pub admin_email: String,

    /// Opaque password hash, verified only by the external authenticator
    pub admin_password_hash: String,

    /// Free-form role label
    pub role: String,
}

/// Read-only access to identity records in the user folder.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    user_dir: PathBuf,
}

impl IdentityStore {
    /// Create a store over the given user folder.
    pub fn new(user_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: user_dir.into(),
        }
    }

    /// The user folder this store reads from.
    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// Path of the record addressed by the username's deterministic key.
    ///
    /// The path is defined whether or not a record exists there.
    pub fn record_path(&self, username: &str) -> PathBuf {
        self.user_dir
            .join(IdentityKey::for_username(username).document_name())
    }

    /// Check whether a record is addressable for the username.
    pub fn exists(&self, username: &str) -> bool {
        self.record_path(username).is_file()
    }

    /// Load the identity record for the username.
    ///
    /// Fails with [`IdentityError::NotFound`] when no record exists at the
    /// derived key, [`IdentityError::Unreadable`] on other I/O failures, and
    /// [`IdentityError::Malformed`] when the document does not parse.
    pub fn load(&self, username: &str) -> Result<Identity> {
        let path = self.record_path(username);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IdentityError::NotFound {
                    username: username.to_string(),
                }
                .into());
            }
            Err(e) => return Err(IdentityError::Unreadable { path, source: e }.into()),
        };
        let identity =
            serde_json::from_str(&raw).map_err(|e| IdentityError::Malformed { path, source: e })?;
        Ok(identity)
    }
}
