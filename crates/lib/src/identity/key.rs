//! Deterministic addressing for identity records and derived documents.
//!
//! The `IdentityKey` type represents a hex-encoded SHA-256 hash of a
//! username.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DOCUMENT_EXT, SESSION_EXT};

/// A deterministic, filesystem-safe address for one tenant.
///
/// Represents the lowercase hex-encoded SHA-256 hash of the username. The
/// same username always yields the same key, across calls and across process
/// restarts, so the key addresses both the identity record and the derived
/// runtime document for that tenant.
///
/// This is an addressing scheme, not a credential: the hash is one-way and
/// collision-resistant but is never used for password verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Derive the key for a username.
    pub fn for_username(username: &str) -> Self {
        let digest = Sha256::digest(username.as_bytes());
        Self(hex::encode(digest))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the JSON document addressed by this key.
    pub fn document_name(&self) -> String {
        format!("{}.{}", self.0, DOCUMENT_EXT)
    }

    /// File name of the session state file addressed by this key.
    pub fn session_name(&self) -> String {
        format!("{}.{}", self.0, SESSION_EXT)
    }
}

impl AsRef<str> for IdentityKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0)
    }
}
