// wallet-core/src/crypto/mnemonic.rs
//
// Seed phrase material for wallet accounts.
// BIP-39 English wordlist, CSPRNG entropy, checksum validation.

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// Validated BIP-39 phrase, the raw material behind mnemonic-backed accounts.
///
/// The phrase is zeroed on drop and never shown by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh phrase of the requested length from OS entropy.
    pub fn generate(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // max 32 bytes
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();
        let mnemonic = mnemonic.map_err(map_bip39_error)?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Restore from user input.
    ///
    /// Whitespace is normalized before the word count, wordlist and checksum
    /// checks run.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if WordCount::from_len(count).is_none() {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse(normalized_phrase.as_str()).map_err(map_bip39_error)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Owned copy of the words, in order.
    ///
    /// Accounts keep their words as a list; the caller takes over
    /// responsibility for zeroing the copy.
    pub fn to_words(&self) -> Vec<String> {
        self.phrase.split_whitespace().map(str::to_owned).collect()
    }

    /// Quick check without keeping the phrase around.
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

fn map_bip39_error(err: bip39::Error) -> WalletError {
    let mapped = match err {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(index),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TEST_MNEMONIC_24: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    #[test]
    fn test_generate_lengths() {
        for count in [WordCount::Twelve, WordCount::TwentyFour] {
            let mnemonic = WalletMnemonic::generate(count).unwrap();
            assert_eq!(mnemonic.word_count(), count as usize);
            assert!(WalletMnemonic::validate(mnemonic.phrase()));
        }
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace() {
        let messy =
            "  abandon  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = WalletMnemonic::from_phrase(messy).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_to_words() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_24).unwrap();
        let words = mnemonic.to_words();
        assert_eq!(words.len(), 24);
        assert_eq!(words[0], "abandon");
        assert_eq!(words[23], "art");
    }

    #[test]
    fn test_invalid_word_count() {
        let result = WalletMnemonic::from_phrase("abandon abandon abandon");
        assert_eq!(
            result.unwrap_err(),
            WalletError::Mnemonic(MnemonicError::InvalidWordCount(3))
        );
    }

    #[test]
    fn test_unknown_word() {
        let invalid = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon invalidword";
        assert!(matches!(
            WalletMnemonic::from_phrase(invalid),
            Err(WalletError::Mnemonic(MnemonicError::UnknownWord(11)))
        ));
    }

    #[test]
    fn test_bad_checksum() {
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            WalletMnemonic::from_phrase(bad),
            Err(WalletError::Mnemonic(MnemonicError::ChecksumFailed))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);
        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_unique_generation() {
        let m1 = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        let m2 = WalletMnemonic::generate(WordCount::Twelve).unwrap();
        assert_ne!(m1.phrase(), m2.phrase());
    }
}
