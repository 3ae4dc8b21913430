use std::fs;

use crate::helpers::TestEnv;

#[test]
fn valid_credentials_return_the_identity() {
    let env = TestEnv::new();
    let identity = env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();

    let result = broker.authenticate("a@x.com", "pw").unwrap();
    assert_eq!(result, Some(identity));
}

#[test]
fn wrong_password_yields_none() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();

    assert_eq!(broker.authenticate("a@x.com", "wrong").unwrap(), None);
}

#[test]
fn unknown_user_fails_closed_without_side_effects() {
    let env = TestEnv::new();
    let broker = env.broker();

    assert_eq!(broker.authenticate("ghost@x.com", "anything").unwrap(), None);
    // Nothing was derived: the config folder was never created.
    assert!(!env.config_dir().exists());
}

#[test]
fn known_user_with_wrong_password_still_derives_the_runtime_document() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();

    assert_eq!(broker.authenticate("a@x.com", "wrong").unwrap(), None);
    // Derivation runs before delegation, so the document exists either way.
    assert!(broker.runtime_config_path("a@x.com").is_file());
}

#[test]
fn corrupt_identity_record_is_indistinguishable_from_rejection() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    fs::write(
        env.broker().identities().record_path("a@x.com"),
        "{ corrupt",
    )
    .unwrap();

    let broker = env.broker();
    assert_eq!(broker.authenticate("a@x.com", "pw").unwrap(), None);
}

#[test]
fn unwritable_config_folder_aborts_the_attempt() {
    let env = TestEnv::new();
    env.provision_identity("a@x.com", "pw", "admin");
    // Occupy the config folder path with a plain file.
    fs::write(env.config_dir(), "in the way").unwrap();

    let broker = env.broker();
    let err = broker.authenticate("a@x.com", "pw").unwrap_err();
    assert!(err.is_runtime_document_error());
}

#[test]
fn repeated_attempts_are_independent() {
    let env = TestEnv::new();
    let identity = env.provision_identity("a@x.com", "pw", "admin");
    let broker = env.broker();

    assert_eq!(broker.authenticate("a@x.com", "wrong").unwrap(), None);
    assert_eq!(
        broker.authenticate("a@x.com", "pw").unwrap(),
        Some(identity)
    );
}
