// wallet-core/src/accounts/predefined.rs
//
// Account creation templates. Each coin belongs to exactly one template,
// and the template knows how to generate an account every one of its coins
// accepts.

use super::AccountType;
use crate::crypto::{WalletMnemonic, WordCount};
use crate::error::WalletResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredefinedAccountType {
    /// 12-word BIP-39 phrase: Bitcoin family, Ethereum and ERC-20 tokens
    Standard,
    /// 24-word BIP-39 phrase: Binance Chain and Binance Smart Chain
    Binance,
    /// 24-word phrase under the Zcash key scheme
    Zcash,
}

impl PredefinedAccountType {
    pub const ALL: [PredefinedAccountType; 3] = [
        PredefinedAccountType::Standard,
        PredefinedAccountType::Binance,
        PredefinedAccountType::Zcash,
    ];

    pub const fn word_count(self) -> WordCount {
        match self {
            PredefinedAccountType::Standard => WordCount::Twelve,
            PredefinedAccountType::Binance => WordCount::TwentyFour,
            PredefinedAccountType::Zcash => WordCount::TwentyFour,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            PredefinedAccountType::Standard => "Standard",
            PredefinedAccountType::Binance => "Binance",
            PredefinedAccountType::Zcash => "Zcash",
        }
    }

    /// Short list of what the template serves, for the creation wizard.
    pub const fn coin_codes(self) -> &'static str {
        match self {
            PredefinedAccountType::Standard => "BTC, ETH, LTC, BCH, DASH, ERC20 tokens",
            PredefinedAccountType::Binance => "BNB, BEP2, BEP20 tokens",
            PredefinedAccountType::Zcash => "ZEC",
        }
    }

    /// Whether `account` has the shape this template produces.
    ///
    /// Matches `CoinType::can_support` for every coin grouped under this
    /// template.
    pub fn supports(self, account: &AccountType) -> bool {
        let words = self.word_count() as usize;
        match self {
            PredefinedAccountType::Standard | PredefinedAccountType::Binance => {
                account.is_plain_mnemonic(words)
            }
            PredefinedAccountType::Zcash => account.is_zcash_with(words),
        }
    }

    /// Generate a fresh account of this template's shape.
    pub fn create_account(self) -> WalletResult<AccountType> {
        let mnemonic = WalletMnemonic::generate(self.word_count())?;
        let words = mnemonic.to_words();

        tracing::info!(
            template = %self,
            word_count = words.len(),
            "generated new account key material"
        );

        let account = match self {
            PredefinedAccountType::Standard | PredefinedAccountType::Binance => {
                AccountType::Mnemonic { words, salt: None }
            }
            PredefinedAccountType::Zcash => AccountType::Zcash { words },
        };
        Ok(account)
    }
}

impl fmt::Display for PredefinedAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts() {
        assert_eq!(PredefinedAccountType::Standard.word_count() as usize, 12);
        assert_eq!(PredefinedAccountType::Binance.word_count() as usize, 24);
        assert_eq!(PredefinedAccountType::Zcash.word_count() as usize, 24);
    }

    #[test]
    fn test_created_accounts_match_template() {
        for template in PredefinedAccountType::ALL {
            let account = template.create_account().unwrap();
            assert!(template.supports(&account), "{} rejected its own account", template);

            for other in PredefinedAccountType::ALL {
                if other != template {
                    assert!(!other.supports(&account), "{} accepted {}", other, template);
                }
            }
        }
    }

    #[test]
    fn test_zcash_account_variant() {
        let account = PredefinedAccountType::Zcash.create_account().unwrap();
        assert!(matches!(account, AccountType::Zcash { .. }));
        assert_eq!(account.words().map(<[String]>::len), Some(24));
    }

    #[test]
    fn test_key_imports_fit_no_template() {
        let key = AccountType::PrivateKey { key: vec![7; 32] };
        assert!(PredefinedAccountType::ALL.iter().all(|t| !t.supports(&key)));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PredefinedAccountType::Binance).unwrap();
        assert_eq!(json, r#""binance""#);
    }
}
