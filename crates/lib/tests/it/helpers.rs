use std::{
    fs,
    path::PathBuf,
    sync::Arc,
};

use doorman::{
    BasePolicy, Identity, IdentityStore, SessionBroker,
    authenticator::{FileSessionFactory, password_digest},
};
use tempfile::TempDir;

/// A sandboxed broker deployment: base policy document plus the three
/// storage folders, all under one temp directory.
pub struct TestEnv {
    pub root: TempDir,
    pub policy_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_ttl(3600)
    }

    /// Build an environment whose policy carries the given token TTL.
    pub fn with_ttl(token_ttl: u64) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let doc = serde_json::json!({
            "secret_key": "integration-secret",
            "token_length": 32,
            "token_ttl": token_ttl,
            "cookie_name": "doorman_token",
            "config_folder_name": root.path().join("config"),
            "user_folder_name": root.path().join("users"),
            "session_folder_name": root.path().join("sessions"),
            "cookie_ssl_only": false,
            "cookie_http_only": true
        });
        let policy_path = root.path().join("policy.json");
        fs::write(&policy_path, doc.to_string()).expect("Failed to write policy document");
        Self { root, policy_path }
    }

    pub fn policy(&self) -> BasePolicy {
        BasePolicy::load(&self.policy_path).expect("Failed to load base policy")
    }

    pub fn broker(&self) -> SessionBroker {
        SessionBroker::new(self.policy(), Arc::new(FileSessionFactory))
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    pub fn user_dir(&self) -> PathBuf {
        self.root.path().join("users")
    }

    /// Provision an identity record the way an external provisioning tool
    /// would: one JSON document at the username's deterministic key, with a
    /// password digest the reference authenticator accepts.
    pub fn provision_identity(&self, email: &str, password: &str, role: &str) -> Identity {
        let identity = Identity {
            admin_email: email.to_string(),
            admin_password_hash: password_digest(password),
            role: role.to_string(),
        };
        let store = IdentityStore::new(self.user_dir());
        fs::create_dir_all(self.user_dir()).expect("Failed to create user folder");
        fs::write(
            store.record_path(email),
            serde_json::to_string_pretty(&identity).expect("Failed to serialize identity"),
        )
        .expect("Failed to write identity record");
        identity
    }

    /// Remove a provisioned identity record, leaving any derived runtime
    /// document behind as a stale entry.
    pub fn remove_identity(&self, email: &str) {
        let store = IdentityStore::new(self.user_dir());
        fs::remove_file(store.record_path(email)).expect("Failed to remove identity record");
    }
}
