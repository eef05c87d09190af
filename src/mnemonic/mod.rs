//! Mnemonic encoding: entropy validation, checksum, and word mapping.
//!
//! Encoding follows the standard construction: SHA-256 the entropy, append
//! the leading ENT/32 digest bits to the entropy bits, and cut the result
//! into 11-bit word indices. A single flipped bit yields a different but
//! well-formed sentence, so the implementation is pinned to the published
//! reference vectors.

use std::fmt;

use crate::bits::{BitReader, BitWriter};
use crate::error::Bip39Error;
use crate::hash::sha256;
use crate::wordlist::Wordlist;

/// Smallest allowed entropy size in bits (12-word sentence).
pub const MIN_ENTROPY_BITS: usize = 128;
/// Largest allowed entropy size in bits (24-word sentence).
pub const MAX_ENTROPY_BITS: usize = 256;
/// Entropy sizes must be a multiple of this many bits.
pub const ENTROPY_STEP_BITS: usize = 32;

/// Bits per word index.
const WORD_BITS: usize = 11;

/// Check that `entropy` has a legal length.
///
/// # Arguments
/// * `entropy` - Caller-supplied entropy bytes.
///
/// # Returns
/// `Ok(())` for 128-256 bits in multiples of 32, otherwise
/// `Bip39Error::InvalidEntropy`. Runs before any bit manipulation;
/// everything downstream assumes a valid length.
pub fn validate_entropy(entropy: &[u8]) -> Result<(), Bip39Error> {
    let bits = entropy.len() * 8;
    if bits < MIN_ENTROPY_BITS || bits > MAX_ENTROPY_BITS || bits % ENTROPY_STEP_BITS != 0 {
        return Err(Bip39Error::InvalidEntropy { bits });
    }
    Ok(())
}

/// Checksum of validated entropy: the leading ENT/32 bits of
/// SHA-256(entropy), returned right-aligned.
///
/// ENT/32 never exceeds 8, so the checksum always fits in the first
/// digest byte; no other digest byte is read.
fn checksum(entropy: &[u8]) -> u8 {
    let cs = entropy.len() / 4;
    let digest = sha256(entropy);
    digest[0] >> (8 - cs)
}

/// An ordered sentence of words encoding entropy plus its checksum.
///
/// Construct with [`Mnemonic::from_entropy`]. `Display` joins the words
/// with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<&'static str>,
}

impl Mnemonic {
    /// Encode entropy into a mnemonic sentence.
    ///
    /// Identical entropy always yields the identical sentence; no
    /// randomness is introduced here, so entropy quality is the
    /// caller's responsibility.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
    ///
    /// # Returns
    /// A 12, 15, 18, 21, or 24-word `Mnemonic`, or
    /// `Bip39Error::InvalidEntropy` for an illegal length.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, Bip39Error> {
        validate_entropy(entropy)?;

        let cs_bits = entropy.len() / 4;
        let total_bits = entropy.len() * 8 + cs_bits;

        let mut writer = BitWriter::with_capacity(total_bits);
        for &byte in entropy {
            writer.write_byte(byte);
        }
        writer.write_bits(checksum(entropy) as u16, cs_bits);
        let encoded = writer.into_bytes();

        let list = Wordlist::english();
        let mut reader = BitReader::new(&encoded);
        let mut words = Vec::with_capacity(total_bits / WORD_BITS);
        for _ in 0..total_bits / WORD_BITS {
            let index = reader.read_bits(WORD_BITS)?;
            words.push(list.word(index)?);
        }
        Ok(Mnemonic { words })
    }

    /// The words of the sentence, in order.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Number of words in the sentence.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The sentence as a single-space-joined string.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}
