//! Seed derivation from a mnemonic sentence and an optional passphrase.
//!
//! The derived key is PBKDF2-HMAC-SHA512 over the NFKD-normalized
//! sentence, salted with `"mnemonic"` plus the NFKD-normalized
//! passphrase, 2048 rounds, 64 bytes out. Normalization is mandatory:
//! ASCII-only inputs pass through it unchanged, but a non-ASCII
//! passphrase derives a different seed without it.

use std::fmt;

use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::error::Bip39Error;
use crate::hash::pbkdf2_hmac_sha512;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count mandated by the standard.
const PBKDF2_ROUNDS: u32 = 2048;

/// Constant salt prefix; the passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

/// 64 bytes of key material derived from a mnemonic sentence.
///
/// The bytes are scrubbed from memory when the value is dropped.
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Derive a seed from a mnemonic sentence and passphrase.
    ///
    /// Pass an empty `passphrase` when the caller has none. The
    /// derivation is deterministic; it is CPU-bound and takes on the
    /// order of milliseconds.
    ///
    /// # Arguments
    /// * `mnemonic` - The mnemonic sentence.
    /// * `passphrase` - Optional protective passphrase, may be empty.
    ///
    /// # Returns
    /// The derived `Seed`, or `Bip39Error::EmptyMnemonic` when the
    /// mnemonic is empty after trimming whitespace.
    pub fn from_mnemonic(mnemonic: &str, passphrase: &str) -> Result<Self, Bip39Error> {
        if mnemonic.trim().is_empty() {
            return Err(Bip39Error::EmptyMnemonic);
        }

        let password: String = mnemonic.nfkd().collect();
        let passphrase: String = passphrase.nfkd().collect();
        let mut salt = String::with_capacity(SALT_PREFIX.len() + passphrase.len());
        salt.push_str(SALT_PREFIX);
        salt.push_str(&passphrase);

        Ok(Seed(pbkdf2_hmac_sha512(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
        )))
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// The seed bytes as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Hex encoding of the seed bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        // Overwrite the key material before the memory is released.
        self.0.zeroize();
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of debug output.
        f.write_str("Seed(..)")
    }
}
