// wallet-core/src/settings/mod.rs

//! Coin settings offered at enable time and inputs required at restore time.

pub mod coin_settings;
pub mod restore_settings;

pub use coin_settings::{BitcoinCashCoinType, CoinSettingType, CoinSettings};
pub use restore_settings::{RestoreSettingType, RestoreSettings};
