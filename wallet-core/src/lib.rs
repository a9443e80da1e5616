//! Coin and account rules for a multi-coin wallet.
//!
//! Decides which accounts can hold which coins, what settings a coin is
//! enabled with by default, and what extra input restoring it needs.
//!
//! ```
//! use wallet_coin_policy::{AccountType, CoinType, PredefinedAccountType};
//!
//! let coin: CoinType = "bep2|BNB".parse().unwrap();
//! assert_eq!(coin.predefined_account_type(), PredefinedAccountType::Binance);
//!
//! let account = AccountType::Mnemonic { words: vec!["abandon".into(); 24], salt: None };
//! assert!(coin.can_support(&account));
//! assert!(!CoinType::Bitcoin.can_support(&account));
//! ```

pub mod accounts;
pub mod api;
pub mod coins;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod settings;

pub use accounts::{AccountType, Derivation, PredefinedAccountType};
pub use coins::CoinType;
pub use config::CoreConfig;
pub use error::{MnemonicError, ParseError, WalletError, WalletResult};
pub use settings::{
    BitcoinCashCoinType, CoinSettingType, CoinSettings, RestoreSettingType, RestoreSettings,
};
