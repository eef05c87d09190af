//! Hash and key-derivation primitives consumed by the mnemonic code.
//!
//! Provides the SHA-256 digest used for the entropy checksum and the
//! PBKDF2-HMAC-SHA512 function used for seed stretching. These are the
//! only places the crate touches external cryptography.

use hmac::Hmac;
use sha2::{Digest, Sha256, Sha512};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Stretch a password and salt into 64 bytes with PBKDF2-HMAC-SHA512.
///
/// # Arguments
/// * `password` - The password bytes.
/// * `salt` - The salt bytes.
/// * `rounds` - PBKDF2 iteration count.
///
/// # Returns
/// A 64-byte derived key.
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    type PrfSha512 = Hmac<Sha512>;
    let mut output = [0u8; 64];
    pbkdf2::pbkdf2::<PrfSha512>(password, salt, rounds, &mut output)
        .expect("HMAC accepts any key length");
    output
}
