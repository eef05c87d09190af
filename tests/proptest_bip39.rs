use proptest::prelude::*;

use bip39_core::hash::sha256;
use bip39_core::mnemonic::{validate_entropy, Mnemonic};
use bip39_core::seed::Seed;
use bip39_core::wordlist::Wordlist;

fn valid_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn word_count_matches_entropy_length(entropy in valid_entropy()) {
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
        // 16/20/24/28/32 bytes -> 12/15/18/21/24 words
        prop_assert_eq!(mnemonic.word_count(), entropy.len() * 3 / 4);
    }

    #[test]
    fn every_word_is_in_the_list(entropy in valid_entropy()) {
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
        let list = Wordlist::english();
        for word in mnemonic.words() {
            prop_assert!(list.contains(word));
        }
    }

    #[test]
    fn encoding_is_deterministic(entropy in valid_entropy()) {
        let a = Mnemonic::from_entropy(&entropy).unwrap();
        let b = Mnemonic::from_entropy(&entropy).unwrap();
        prop_assert_eq!(a.phrase(), b.phrase());
    }

    #[test]
    fn checksum_bits_come_from_first_digest_byte(entropy in valid_entropy()) {
        // The low ENT/32 bits of the final word index are the checksum,
        // which must equal the leading ENT/32 bits of SHA-256(entropy).
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
        let list = Wordlist::english();

        let last_word = mnemonic.words().last().copied().unwrap();
        let last_index = list.index_of(last_word).unwrap();

        let cs_bits = entropy.len() / 4;
        let expected = (sha256(&entropy)[0] >> (8 - cs_bits)) as u16;
        prop_assert_eq!(last_index & ((1 << cs_bits) - 1), expected);
    }

    #[test]
    fn invalid_entropy_lengths_are_rejected(len in 0usize..64) {
        prop_assume!(!matches!(len, 16 | 20 | 24 | 28 | 32));
        let entropy = vec![0x55u8; len];
        prop_assert!(validate_entropy(&entropy).is_err());
        prop_assert!(Mnemonic::from_entropy(&entropy).is_err());
    }

    #[test]
    fn seed_derivation_is_deterministic(entropy in valid_entropy(), passphrase in "[ -~]{0,16}") {
        let phrase = Mnemonic::from_entropy(&entropy).unwrap().phrase();
        let a = Seed::from_mnemonic(&phrase, &passphrase).unwrap();
        let b = Seed::from_mnemonic(&phrase, &passphrase).unwrap();
        prop_assert_eq!(a.to_hex(), b.to_hex());
    }
}
