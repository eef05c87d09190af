//! The English word table used for index-to-word mapping.
//!
//! The 2048-entry list ships with the crate and is parsed once into a
//! process-wide read-only table. A list of the wrong size is a fatal
//! configuration error at first access, never a per-call error.

use std::sync::LazyLock;

use crate::error::Bip39Error;

/// Number of entries every conformant word list carries.
pub const WORDLIST_LEN: usize = 2048;

static ENGLISH: LazyLock<Wordlist> =
    LazyLock::new(|| Wordlist::parse(include_str!("english.txt")));

/// An ordered, immutable table of 2048 words.
///
/// Entries are sorted, which membership lookups rely on.
pub struct Wordlist {
    words: Vec<&'static str>,
}

impl Wordlist {
    fn parse(raw: &'static str) -> Self {
        let words: Vec<&'static str> = raw.lines().collect();
        assert_eq!(
            words.len(),
            WORDLIST_LEN,
            "embedded word list must contain exactly {} entries",
            WORDLIST_LEN
        );
        Wordlist { words }
    }

    /// The shared English word list.
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Look up the word at `index`.
    ///
    /// # Arguments
    /// * `index` - Word index in [0, 2047].
    ///
    /// # Returns
    /// The word, or `Bip39Error::WordIndexOutOfRange` if the index falls
    /// outside the table.
    pub fn word(&self, index: u16) -> Result<&'static str, Bip39Error> {
        self.words
            .get(index as usize)
            .copied()
            .ok_or(Bip39Error::WordIndexOutOfRange(index))
    }

    /// Find the index of `word` by binary search.
    ///
    /// # Arguments
    /// * `word` - Candidate word.
    ///
    /// # Returns
    /// `Some(index)` when the word is in the table.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words.binary_search(&word).ok().map(|i| i as u16)
    }

    /// Check whether `word` is in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty. Always false for a parsed table.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
