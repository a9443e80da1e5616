// wallet-core/src/accounts/account_type.rs
//
// Key material families backing a wallet account.

use crate::crypto::WalletMnemonic;
use crate::error::{ParseError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// Key material of an account, fixed when the account is created.
///
/// Secret fields are zeroed on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub enum AccountType {
    /// BIP-39 seed phrase. `salt` is the optional BIP-39 passphrase.
    Mnemonic {
        words: Vec<String>,
        salt: Option<String>,
    },
    /// Raw private key import
    PrivateKey { key: Vec<u8> },
    /// EOS account name with its active permission key
    Eos {
        account: String,
        active_private_key: String,
    },
    /// Seed phrase for Zcash's own key scheme (restored from a birthday height)
    Zcash { words: Vec<String> },
}

impl AccountType {
    /// Mnemonic account from user input, checked against the BIP-39 wordlist.
    pub fn mnemonic_from_phrase(phrase: &str, salt: Option<&str>) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::from_phrase(phrase)?;
        Ok(AccountType::Mnemonic {
            words: mnemonic.to_words(),
            salt: salt.map(str::to_owned),
        })
    }

    /// Zcash account from user input, checked against the BIP-39 wordlist.
    pub fn zcash_from_phrase(phrase: &str) -> WalletResult<Self> {
        let mnemonic = WalletMnemonic::from_phrase(phrase)?;
        Ok(AccountType::Zcash {
            words: mnemonic.to_words(),
        })
    }

    /// Seed words, for the phrase-backed variants.
    pub fn words(&self) -> Option<&[String]> {
        match self {
            AccountType::Mnemonic { words, .. } | AccountType::Zcash { words } => Some(words.as_slice()),
            AccountType::PrivateKey { .. } | AccountType::Eos { .. } => None,
        }
    }

    /// True for an unsalted mnemonic of exactly `word_count` words.
    pub(crate) fn is_plain_mnemonic(&self, word_count: usize) -> bool {
        matches!(
            self,
            AccountType::Mnemonic { words, salt: None } if words.len() == word_count
        )
    }

    pub(crate) fn is_zcash_with(&self, word_count: usize) -> bool {
        matches!(self, AccountType::Zcash { words } if words.len() == word_count)
    }

    fn kind(&self) -> &'static str {
        match self {
            AccountType::Mnemonic { .. } => "mnemonic",
            AccountType::PrivateKey { .. } => "privateKey",
            AccountType::Eos { .. } => "eos",
            AccountType::Zcash { .. } => "zcash",
        }
    }
}

impl Drop for AccountType {
    fn drop(&mut self) {
        match self {
            AccountType::Mnemonic { words, salt } => {
                words.zeroize();
                salt.zeroize();
            }
            AccountType::PrivateKey { key } => key.zeroize(),
            AccountType::Eos {
                active_private_key, ..
            } => active_private_key.zeroize(),
            AccountType::Zcash { words } => words.zeroize(),
        }
    }
}

// Never prints words, salts or keys
impl fmt::Debug for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("AccountType");
        out.field("kind", &self.kind());
        match self {
            AccountType::Mnemonic { words, salt } => {
                out.field("word_count", &words.len())
                    .field("salted", &salt.is_some());
            }
            AccountType::Zcash { words } => {
                out.field("word_count", &words.len());
            }
            AccountType::Eos { account, .. } => {
                out.field("account", account);
            }
            AccountType::PrivateKey { .. } => {}
        }
        out.finish_non_exhaustive()
    }
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Address derivation scheme for UTXO coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    /// Legacy P2PKH (`m/44'/...`)
    Bip44,
    /// Nested SegWit P2SH-P2WPKH (`m/49'/...`)
    Bip49,
    /// Native SegWit P2WPKH (`m/84'/...`)
    Bip84,
}

impl Derivation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Derivation::Bip44 => "bip44",
            Derivation::Bip49 => "bip49",
            Derivation::Bip84 => "bip84",
        }
    }

    /// BIP-43 purpose field of the scheme's paths.
    pub const fn purpose(self) -> u32 {
        match self {
            Derivation::Bip44 => 44,
            Derivation::Bip49 => 49,
            Derivation::Bip84 => 84,
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Derivation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bip44" => Ok(Derivation::Bip44),
            "bip49" => Ok(Derivation::Bip49),
            "bip84" => Ok(Derivation::Bip84),
            other => Err(ParseError::UnknownDerivation(other.to_owned())),
        }
    }
}
