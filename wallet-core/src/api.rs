// wallet-core/src/api.rs
//
// Flat entry points for the app layer (account creation, coin enabling,
// restore). Coins are addressed by catalog id so the bridge only passes
// strings and JSON-friendly structs.

use crate::accounts::{AccountType, PredefinedAccountType};
use crate::coins::CoinType;
use crate::config::CoreConfig;
use crate::error::WalletResult;
use crate::logging;
use crate::settings::{CoinSettingType, RestoreSettingType};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static CORE_INITIALIZED: OnceLock<()> = OnceLock::new();

// Core Initialization
pub fn init_core(config: &CoreConfig) -> WalletResult<()> {
    if CORE_INITIALIZED.get().is_some() {
        return Ok(());
    }
    logging::init_logging(config.log_format, &config.log_level)?;
    let _ = CORE_INITIALIZED.set(());
    tracing::info!(level = %config.log_level, "wallet core initialized");
    Ok(())
}

// --- Account Creation ---

pub fn predefined_account_type(coin_id: &str) -> PredefinedAccountType {
    CoinType::from(coin_id).predefined_account_type()
}

pub fn create_account(template: PredefinedAccountType) -> WalletResult<AccountType> {
    template.create_account()
}

pub fn can_support(coin_id: &str, account: &AccountType) -> bool {
    CoinType::from(coin_id).can_support(account)
}

/// Coins from `coins` that `account` can hold, in input order.
pub fn supported_coins<'a, I>(coins: I, account: &AccountType) -> Vec<CoinType>
where
    I: IntoIterator<Item = &'a CoinType>,
{
    coins
        .into_iter()
        .filter(|coin| coin.can_support(account))
        .cloned()
        .collect()
}

// --- Coin Enabling ---

/// Everything the enable screen needs to render one coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinEnableOptions {
    pub coin_id: String,
    /// Empty when the coin has no defined title
    pub title: String,
    pub label: Option<String>,
    pub swappable: bool,
    pub coin_setting_types: Vec<CoinSettingType>,
    /// Settings ids, e.g. `"derivation:bip49"`
    pub default_settings: Vec<String>,
}

pub fn coin_enable_options(coin_id: &str) -> CoinEnableOptions {
    let coin = CoinType::from(coin_id);
    CoinEnableOptions {
        coin_id: coin.id(),
        title: coin.title().to_string(),
        label: coin.label().map(str::to_owned),
        swappable: coin.swappable(),
        coin_setting_types: coin.coin_setting_types(),
        default_settings: coin
            .default_settings_array()
            .iter()
            .map(|settings| settings.id())
            .collect(),
    }
}

// --- Restore ---

pub fn restore_requirements(coin_id: &str) -> Vec<RestoreSettingType> {
    CoinType::from(coin_id).restore_setting_types()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_coin_enable_options_bitcoin() {
        let options = coin_enable_options("bitcoin");
        assert_eq!(options.coin_id, "bitcoin");
        assert_eq!(options.title, "Bitcoin");
        assert_eq!(options.label, None);
        assert!(!options.swappable);
        assert_eq!(options.coin_setting_types, vec![CoinSettingType::Derivation]);
        assert_eq!(options.default_settings, vec!["derivation:bip49".to_string()]);
    }

    #[test]
    fn test_coin_enable_options_token() {
        let options = coin_enable_options("bep20|0xabc");
        assert_eq!(options.label.as_deref(), Some("BEP20"));
        assert!(options.swappable);
        assert!(options.coin_setting_types.is_empty());
        assert!(options.default_settings.is_empty());
    }

    #[test]
    fn test_coin_enable_options_json_shape() {
        let json = serde_json::to_value(coin_enable_options("bitcoinCash")).unwrap();
        assert_eq!(json["coinId"], "bitcoinCash");
        assert_eq!(json["coinSettingTypes"][0], "bitcoinCashCoinType");
        assert_eq!(json["defaultSettings"][0], "bitcoinCashCoinType:type145");
    }

    #[test]
    fn test_can_support_by_id() {
        let account = AccountType::mnemonic_from_phrase(TEST_MNEMONIC_12, None).unwrap();
        assert!(can_support("ethereum", &account));
        assert!(can_support("erc20|0xdac17f958d2ee523a2206206994597c13d831ec7", &account));
        assert!(!can_support("binanceSmartChain", &account));
        assert!(!can_support("solana", &account));
    }

    #[test]
    fn test_supported_coins() {
        let catalog = vec![
            CoinType::Bitcoin,
            CoinType::Bep2("BNB".into()),
            CoinType::Dash,
            CoinType::Zcash,
        ];
        let account = AccountType::mnemonic_from_phrase(TEST_MNEMONIC_12, None).unwrap();
        assert_eq!(
            supported_coins(&catalog, &account),
            vec![CoinType::Bitcoin, CoinType::Dash]
        );
    }

    #[test]
    fn test_create_account_for_coin() {
        let template = predefined_account_type("zcash");
        assert_eq!(template, PredefinedAccountType::Zcash);
        let account = create_account(template).unwrap();
        assert!(can_support("zcash", &account));
    }

    #[test]
    fn test_restore_requirements() {
        assert_eq!(
            restore_requirements("zcash"),
            vec![RestoreSettingType::BirthdayHeight]
        );
        assert!(restore_requirements("bitcoin").is_empty());
    }
}
