// wallet-core/src/coins/policy.rs
//
// Coin/account compatibility and per-coin defaults.
//
// Every mapping matches on the full CoinType set with no wildcard arm, so a
// new coin variant does not compile until each rule below has an answer for it.

use super::CoinType;
use crate::accounts::{AccountType, Derivation, PredefinedAccountType};
use crate::settings::{BitcoinCashCoinType, CoinSettingType, CoinSettings, RestoreSettingType};

/// Seed length for Bitcoin-family, Ethereum and ERC-20 accounts
const STANDARD_WORD_COUNT: usize = 12;
/// Seed length for Binance chains and Zcash
const EXTENDED_WORD_COUNT: usize = 24;

impl CoinType {
    // =========================================================================
    // COMPATIBILITY
    // =========================================================================

    /// Whether `account` can hold this coin.
    ///
    /// | Coin | Account |
    /// |---|---|
    /// | Bitcoin, Litecoin, BitcoinCash, Dash, Ethereum, Erc20 | unsalted 12-word `Mnemonic` |
    /// | BinanceSmartChain, Bep20, Bep2 | unsalted 24-word `Mnemonic` |
    /// | Zcash | 24-word `Zcash` |
    /// | Unsupported | nothing |
    pub fn can_support(&self, account: &AccountType) -> bool {
        let supported = match self {
            CoinType::Bitcoin
            | CoinType::Litecoin
            | CoinType::BitcoinCash
            | CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_) => account.is_plain_mnemonic(STANDARD_WORD_COUNT),
            CoinType::BinanceSmartChain | CoinType::Bep20(_) | CoinType::Bep2(_) => {
                account.is_plain_mnemonic(EXTENDED_WORD_COUNT)
            }
            CoinType::Zcash => account.is_zcash_with(EXTENDED_WORD_COUNT),
            CoinType::Unsupported(_) => false,
        };

        tracing::debug!(coin = %self, account = ?account, supported, "compatibility check");
        supported
    }

    // =========================================================================
    // DISPLAY METADATA
    // =========================================================================

    /// Display name when one is defined.
    pub fn title_opt(&self) -> Option<&'static str> {
        match self {
            CoinType::Bitcoin => Some("Bitcoin"),
            CoinType::Litecoin => Some("Litecoin"),
            CoinType::BitcoinCash => Some("BitcoinCash"),
            CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::BinanceSmartChain
            | CoinType::Bep20(_)
            | CoinType::Bep2(_)
            | CoinType::Zcash
            | CoinType::Unsupported(_) => None,
        }
    }

    /// Display name, empty for coins without one. See [`title_opt`](Self::title_opt).
    pub fn title(&self) -> &'static str {
        self.title_opt().unwrap_or_else(|| {
            tracing::debug!(coin = %self, "no title defined for coin");
            ""
        })
    }

    /// Token standard badge, `None` for base-layer coins.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CoinType::Erc20(_) => Some("ERC20"),
            CoinType::Bep20(_) => Some("BEP20"),
            CoinType::Bep2(_) => Some("BEP2"),
            CoinType::Bitcoin
            | CoinType::Litecoin
            | CoinType::BitcoinCash
            | CoinType::Dash
            | CoinType::Ethereum
            | CoinType::BinanceSmartChain
            | CoinType::Zcash
            | CoinType::Unsupported(_) => None,
        }
    }

    /// Whether the swap feature is offered for this coin.
    pub fn swappable(&self) -> bool {
        match self {
            CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::BinanceSmartChain
            | CoinType::Bep20(_) => true,
            CoinType::Bitcoin
            | CoinType::Litecoin
            | CoinType::BitcoinCash
            | CoinType::Dash
            | CoinType::Bep2(_)
            | CoinType::Zcash
            | CoinType::Unsupported(_) => false,
        }
    }

    // =========================================================================
    // ACCOUNT TEMPLATE
    // =========================================================================

    pub fn predefined_account_type(&self) -> PredefinedAccountType {
        match self {
            CoinType::Bitcoin
            | CoinType::Litecoin
            | CoinType::BitcoinCash
            | CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::Unsupported(_) => PredefinedAccountType::Standard,
            CoinType::BinanceSmartChain | CoinType::Bep20(_) | CoinType::Bep2(_) => {
                PredefinedAccountType::Binance
            }
            CoinType::Zcash => PredefinedAccountType::Zcash,
        }
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    /// Setting keys the coin needs when it is enabled.
    pub fn coin_setting_types(&self) -> Vec<CoinSettingType> {
        match self {
            CoinType::Bitcoin | CoinType::Litecoin => vec![CoinSettingType::Derivation],
            CoinType::BitcoinCash => vec![CoinSettingType::BitcoinCashCoinType],
            CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::BinanceSmartChain
            | CoinType::Bep20(_)
            | CoinType::Bep2(_)
            | CoinType::Zcash
            | CoinType::Unsupported(_) => Vec::new(),
        }
    }

    /// Configurations enabled by default, one wallet per entry.
    ///
    /// Keys of every entry are drawn from [`coin_setting_types`](Self::coin_setting_types).
    pub fn default_settings_array(&self) -> Vec<CoinSettings> {
        match self {
            CoinType::Bitcoin | CoinType::Litecoin => vec![CoinSettings::new()
                .with(CoinSettingType::Derivation, Derivation::Bip49.as_str())],
            CoinType::BitcoinCash => vec![CoinSettings::new().with(
                CoinSettingType::BitcoinCashCoinType,
                BitcoinCashCoinType::Type145.as_str(),
            )],
            CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::BinanceSmartChain
            | CoinType::Bep20(_)
            | CoinType::Bep2(_)
            | CoinType::Zcash
            | CoinType::Unsupported(_) => Vec::new(),
        }
    }

    /// Inputs the restore flow must collect for this coin.
    pub fn restore_setting_types(&self) -> Vec<RestoreSettingType> {
        match self {
            CoinType::Zcash => vec![RestoreSettingType::BirthdayHeight],
            CoinType::Bitcoin
            | CoinType::Litecoin
            | CoinType::BitcoinCash
            | CoinType::Dash
            | CoinType::Ethereum
            | CoinType::Erc20(_)
            | CoinType::BinanceSmartChain
            | CoinType::Bep20(_)
            | CoinType::Bep2(_)
            | CoinType::Unsupported(_) => Vec::new(),
        }
    }
}
