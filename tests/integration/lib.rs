//! Shared helpers for otpvault integration tests.

use otpvault_core::Account;

/// Build a JSON account list for vault fixtures.
pub fn accounts_json(entries: &[(&str, &str)]) -> Vec<u8> {
    let accounts: Vec<Account> = entries
        .iter()
        .map(|(name, secret)| Account {
            name: name.to_string(),
            secret: secret.to_string(),
        })
        .collect();
    serde_json::to_vec(&accounts).expect("fixture serialization")
}

/// Encrypt a vault blob for the given accounts and password.
pub fn vault_fixture(password: &str, entries: &[(&str, &str)]) -> Vec<u8> {
    otpvault_crypto::seal(password.as_bytes(), &accounts_json(entries)).expect("seal fixture")
}
