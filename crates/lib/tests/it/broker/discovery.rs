use std::fs;

use doorman::IdentityKey;

use crate::helpers::TestEnv;

#[test]
fn no_tenants_means_no_context() {
    let env = TestEnv::new();
    let broker = env.broker();

    // Config folder does not even exist yet.
    assert!(broker.current_context().unwrap().is_none());
    assert!(broker.authenticated_user().unwrap().is_none());
}

#[test]
fn no_active_session_means_no_context() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();

    // A failed attempt leaves a derived document but no session.
    assert_eq!(broker.authenticate("a@x.com", "wrong").unwrap(), None);
    assert!(broker.current_context().unwrap().is_none());
}

#[test]
fn the_single_active_session_is_discovered() {
    let env = TestEnv::new();
    let identity = env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();
    broker.authenticate("a@x.com", "pw").unwrap().unwrap();

    let context = broker.current_context().unwrap().unwrap();
    assert_eq!(context.identity(), &identity);
    assert!(context.authenticator().is_authenticated().unwrap());
}

#[test]
fn scan_order_is_lexicographic_by_key() {
    let env = TestEnv::new();
    let first = env.provision_identity("a@x.com", "pw-a", "admin");
    let second = env.provision_identity("b@x.com", "pw-b", "editor");
    let broker = env.broker();

    broker.authenticate("a@x.com", "pw-a").unwrap().unwrap();
    broker.authenticate("b@x.com", "pw-b").unwrap().unwrap();

    // Both tenants hold live sessions; the lexicographically smaller key
    // wins and the scan short-circuits there.
    let key_a = IdentityKey::for_username("a@x.com");
    let key_b = IdentityKey::for_username("b@x.com");
    let expected = if key_a < key_b { &first } else { &second };

    let found = broker.authenticated_user().unwrap().unwrap();
    assert_eq!(&found, expected);
}

#[test]
fn stale_runtime_documents_are_skipped() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();
    broker.authenticate("a@x.com", "pw").unwrap().unwrap();

    // The tenant is deprovisioned but its derived document and session file
    // linger; discovery must not resurrect it.
    env.remove_identity("a@x.com");
    assert!(broker.current_context().unwrap().is_none());
}

#[test]
fn malformed_runtime_documents_are_skipped() {
    let env = TestEnv::new();
    let identity = env.provision_identity("zz@x.com", "pw", "admin");
    let broker = env.broker();
    broker.authenticate("zz@x.com", "pw").unwrap().unwrap();

    // Drop a junk entry that sorts ahead of every hex-keyed document.
    fs::write(env.config_dir().join("0000-junk.json"), "not a document").unwrap();

    let found = broker.authenticated_user().unwrap().unwrap();
    assert_eq!(found, identity);
}

#[test]
fn logged_out_tenants_are_not_discovered() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();
    broker.authenticate("a@x.com", "pw").unwrap().unwrap();

    broker.logout();
    assert!(broker.current_context().unwrap().is_none());
}
