use doorman::{IdentityKey, IdentityStore};

use crate::helpers::TestEnv;

#[test]
fn key_derivation_is_pinned() {
    // Locks the addressing scheme: identity records written by one release
    // must stay addressable by the next.
    assert_eq!(
        IdentityKey::for_username("a@x.com").as_str(),
        "478abec7430569163161dfea8513b8ce89d05f559456a26e945c66e1fe55a29d"
    );
    assert_eq!(
        IdentityKey::for_username("b@x.com").as_str(),
        "d2e87fa97059800526a17d47411565f78bf08bb07877a806ec7013a04f8e567d"
    );
}

#[test]
fn provisioned_record_is_resolvable_through_the_broker() {
    let env = TestEnv::new();
    let identity = env.provision_identity("a@x.com", "pw", "admin");

    let broker = env.broker();
    assert!(broker.identities().exists("a@x.com"));
    assert_eq!(broker.identities().load("a@x.com").unwrap(), identity);
    assert_eq!(identity.role, "admin");
}

#[test]
fn unknown_username_is_not_resolvable() {
    let env = TestEnv::new();
    let broker = env.broker();

    assert!(!broker.identities().exists("ghost@x.com"));
    let err = broker.identities().load("ghost@x.com").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "identity");
}

#[test]
fn record_addressing_survives_store_recreation() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");

    // A fresh store over the same folder addresses the same record.
    let fresh = IdentityStore::new(env.user_dir());
    assert!(fresh.exists("a@x.com"));
    assert_eq!(
        fresh.record_path("a@x.com"),
        env.broker().identities().record_path("a@x.com")
    );
}
