//! BIP-39 mnemonic codes: entropy encoding and seed derivation.
//!
//! This crate provides the building blocks for deterministic-wallet
//! key material:
//! - Mnemonic encoding from caller-supplied entropy (validation,
//!   checksum, 11-bit word mapping)
//! - 64-byte seed derivation via PBKDF2-HMAC-SHA512
//! - MSB-first bit reader/writer primitives
//! - The embedded 2048-word English word list

pub mod hash;
pub mod bits;
pub mod wordlist;
pub mod mnemonic;
pub mod seed;

mod error;
pub use error::Bip39Error;
pub use mnemonic::Mnemonic;
pub use seed::Seed;
pub use wordlist::Wordlist;
