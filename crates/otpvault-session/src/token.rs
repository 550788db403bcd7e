//! Session token generation.

use rand::RngCore;

/// Token length in raw bytes: 128 bits of randomness, hex-encoded to 32
/// characters.
const TOKEN_BYTES: usize = 16;

/// Generate a fresh unguessable session token.
///
/// Issued once per successful unlock; a new token always replaces the
/// previous one, so tokens are never reused across unlock attempts.
pub fn issue() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
