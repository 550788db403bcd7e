//! End-to-end unlock flow: encrypt tool output through the session layer.
//!
//! Exercises the round-trip property from vault creation to displayed
//! codes, including the example scenario: a vault holding the `github`
//! account encrypted with `correct-horse`.

use otpvault_core::SecretString;
use otpvault_integration_tests::vault_fixture;
use otpvault_session::{codes, unlock, SecretStore, UnlockError, GENERIC_UNLOCK_ERROR};
use totp_rs::{Algorithm, Secret, TOTP};

const PASSWORD: &str = "correct-horse";
const GITHUB_SEED: &str = "JBSWY3DPEHPK3PXP";

#[tokio::test]
async fn unlock_with_correct_password_yields_github_code() {
    let blob = vault_fixture(PASSWORD, &[("github", GITHUB_SEED)]);
    let store = SecretStore::new();

    let token = unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .expect("unlock should succeed");
    assert_eq!(token.len(), 32);

    let displays = codes::generate(store.accounts().await).await;
    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].name, "github");
    assert_eq!(displays[0].code.len(), 6);
    assert!(displays[0].code.chars().all(|c| c.is_ascii_digit()));

    // The code matches the standard TOTP algorithm for the current window.
    let seed = Secret::Encoded(GITHUB_SEED.to_string()).to_bytes().unwrap();
    let reference = TOTP::new_unchecked(Algorithm::SHA1, 6, 1, 30, seed);
    assert!(reference.check_current(&displays[0].code).unwrap());
}

#[tokio::test]
async fn unlock_with_wrong_password_is_generic_and_leaves_store_untouched() {
    let blob = vault_fixture(PASSWORD, &[("github", GITHUB_SEED)]);
    let store = SecretStore::new();

    let err = unlock(&blob, &SecretString::new("wrong-horse"), &store)
        .await
        .expect_err("wrong password must fail");

    assert_eq!(err.public_message(), GENERIC_UNLOCK_ERROR);
    assert!(!store.is_unlocked().await);
    assert!(store.accounts().await.is_empty());
}

#[tokio::test]
async fn per_account_failure_never_aborts_the_batch() {
    let blob = vault_fixture(
        PASSWORD,
        &[("A", GITHUB_SEED), ("B", "!!!invalid"), ("C", GITHUB_SEED)],
    );
    let store = SecretStore::new();
    unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .unwrap();

    let displays = codes::generate(store.accounts().await).await;

    let names: Vec<&str> = displays.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_ne!(displays[0].code, "Error");
    assert_eq!(displays[1].code, "Error");
    assert_ne!(displays[2].code, "Error");
}

#[tokio::test]
async fn ordering_is_preserved_for_large_account_sets() {
    let entries: Vec<(String, &str)> = (0..50)
        .map(|i| (format!("account-{i:03}"), GITHUB_SEED))
        .collect();
    let borrowed: Vec<(&str, &str)> = entries
        .iter()
        .map(|(name, seed)| (name.as_str(), *seed))
        .collect();

    let blob = vault_fixture(PASSWORD, &borrowed);
    let store = SecretStore::new();
    unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .unwrap();

    let displays = codes::generate(store.accounts().await).await;
    let names: Vec<String> = displays.into_iter().map(|d| d.name).collect();
    let expected: Vec<String> = entries.into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn tampered_vault_fails_like_wrong_password() {
    let mut blob = vault_fixture(PASSWORD, &[("github", GITHUB_SEED)]);
    let last = blob.len() - 1;
    blob[last] ^= 0x80;

    let store = SecretStore::new();
    let err = unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .expect_err("tampered vault must fail");

    // Same public message as the wrong-password case: no tamper oracle.
    assert_eq!(err.public_message(), GENERIC_UNLOCK_ERROR);
    assert!(matches!(err, UnlockError::Crypto(_)));
}

#[tokio::test]
async fn vault_payload_that_is_not_an_account_array_fails_schema() {
    let blob = otpvault_crypto::seal(
        PASSWORD.as_bytes(),
        br#"{"name":"github","secret":"JBSWY3DPEHPK3PXP"}"#,
    )
    .unwrap();
    let store = SecretStore::new();

    let err = unlock(&blob, &SecretString::new(PASSWORD), &store)
        .await
        .expect_err("bare object is not an account list");
    assert!(matches!(err, UnlockError::Schema(_)));
    assert_eq!(err.public_message(), GENERIC_UNLOCK_ERROR);
}
