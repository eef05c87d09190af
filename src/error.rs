/// Unified error type for all mnemonic and seed operations.
///
/// Covers errors from entropy validation, bit-stream handling, word lookup,
/// and seed derivation.
#[derive(Debug, thiserror::Error)]
pub enum Bip39Error {
    #[error("invalid entropy length: {bits} bits (expected 128-256 bits in multiples of 32)")]
    InvalidEntropy { bits: usize },

    #[error("mnemonic is empty")]
    EmptyMnemonic,

    #[error("word index {0} out of range for the 2048-word list")]
    WordIndexOutOfRange(u16),

    #[error("unexpected end of bit stream")]
    UnexpectedEndOfBits,
}
