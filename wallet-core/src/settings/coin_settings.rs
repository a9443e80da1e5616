// wallet-core/src/settings/coin_settings.rs
//
// Per-coin configuration chosen when a coin is enabled on an account.

use crate::accounts::Derivation;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const ENTRY_SEPARATOR: char = '|';
const KEY_VALUE_SEPARATOR: char = ':';

/// Keys a coin may require in its [`CoinSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoinSettingType {
    /// Address derivation scheme, value is a [`Derivation`]
    Derivation,
    /// Bitcoin Cash chain variant, value is a [`BitcoinCashCoinType`]
    BitcoinCashCoinType,
}

impl CoinSettingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            CoinSettingType::Derivation => "derivation",
            CoinSettingType::BitcoinCashCoinType => "bitcoinCashCoinType",
        }
    }
}

impl fmt::Display for CoinSettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoinSettingType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "derivation" => Ok(CoinSettingType::Derivation),
            "bitcoinCashCoinType" => Ok(CoinSettingType::BitcoinCashCoinType),
            other => Err(ParseError::UnknownCoinSettingType(other.to_owned())),
        }
    }
}

/// Bitcoin Cash SLIP-44 coin type used for address derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitcoinCashCoinType {
    /// Legacy coin type shared with Bitcoin (0)
    #[serde(rename = "type0")]
    Type0,
    /// Dedicated Bitcoin Cash coin type (145)
    #[serde(rename = "type145")]
    Type145,
}

impl BitcoinCashCoinType {
    pub const fn as_str(self) -> &'static str {
        match self {
            BitcoinCashCoinType::Type0 => "type0",
            BitcoinCashCoinType::Type145 => "type145",
        }
    }
}

impl fmt::Display for BitcoinCashCoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BitcoinCashCoinType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type0" => Ok(BitcoinCashCoinType::Type0),
            "type145" => Ok(BitcoinCashCoinType::Type145),
            other => Err(ParseError::UnknownBitcoinCashCoinType(other.to_owned())),
        }
    }
}

/// One fully specified configuration of a coin.
///
/// Values are kept string-encoded, the same way they are persisted next to
/// the enabled wallet. Keys are unique; iteration order is the key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinSettings {
    settings: BTreeMap<CoinSettingType, String>,
}

impl CoinSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: CoinSettingType, value: impl Into<String>) -> Self {
        self.settings.insert(key, value.into());
        self
    }

    pub fn insert(&mut self, key: CoinSettingType, value: impl Into<String>) -> Option<String> {
        self.settings.insert(key, value.into())
    }

    pub fn get(&self, key: CoinSettingType) -> Option<&str> {
        self.settings.get(&key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = CoinSettingType> + '_ {
        self.settings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Parsed derivation, `None` when absent or not a known scheme.
    pub fn derivation(&self) -> Option<Derivation> {
        self.get(CoinSettingType::Derivation)?.parse().ok()
    }

    pub fn bitcoin_cash_coin_type(&self) -> Option<BitcoinCashCoinType> {
        self.get(CoinSettingType::BitcoinCashCoinType)?.parse().ok()
    }

    /// Persisted id, e.g. `derivation:bip49`.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CoinSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.settings.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ENTRY_SEPARATOR)?;
            }
            write!(f, "{}{}{}", key, KEY_VALUE_SEPARATOR, value)?;
        }
        Ok(())
    }
}

impl FromStr for CoinSettings {
    type Err = ParseError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let mut settings = BTreeMap::new();
        for entry in id.split(ENTRY_SEPARATOR).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once(KEY_VALUE_SEPARATOR)
                .ok_or_else(|| ParseError::MalformedSettingsEntry(entry.to_owned()))?;
            settings.insert(key.parse()?, value.to_owned());
        }
        Ok(Self { settings })
    }
}

impl FromIterator<(CoinSettingType, String)> for CoinSettings {
    fn from_iter<I: IntoIterator<Item = (CoinSettingType, String)>>(iter: I) -> Self {
        Self {
            settings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let settings = CoinSettings::new().with(CoinSettingType::Derivation, "bip49");
        assert_eq!(settings.id(), "derivation:bip49");
        assert_eq!(CoinSettings::new().id(), "");
    }

    #[test]
    fn test_id_is_key_ordered() {
        let settings = CoinSettings::new()
            .with(CoinSettingType::BitcoinCashCoinType, "type145")
            .with(CoinSettingType::Derivation, "bip44");
        assert_eq!(
            settings.id(),
            "derivation:bip44|bitcoinCashCoinType:type145"
        );
    }

    #[test]
    fn test_parse_id() {
        let settings: CoinSettings = "bitcoinCashCoinType:type0".parse().unwrap();
        assert_eq!(
            settings.bitcoin_cash_coin_type(),
            Some(BitcoinCashCoinType::Type0)
        );
        assert_eq!(settings.derivation(), None);

        let empty: CoinSettings = "".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert_eq!(
            "derivation".parse::<CoinSettings>().unwrap_err(),
            ParseError::MalformedSettingsEntry("derivation".into())
        );
        assert_eq!(
            "fee:low".parse::<CoinSettings>().unwrap_err(),
            ParseError::UnknownCoinSettingType("fee".into())
        );
    }

    #[test]
    fn test_typed_accessors_ignore_unknown_values() {
        let settings = CoinSettings::new().with(CoinSettingType::Derivation, "bip86");
        assert_eq!(settings.get(CoinSettingType::Derivation), Some("bip86"));
        assert_eq!(settings.derivation(), None);
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut settings = CoinSettings::new();
        assert_eq!(settings.insert(CoinSettingType::Derivation, "bip44"), None);
        assert_eq!(
            settings.insert(CoinSettingType::Derivation, "bip84"),
            Some("bip44".to_string())
        );
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.derivation(), Some(Derivation::Bip84));
    }

    #[test]
    fn test_serialization() {
        let settings = CoinSettings::new().with(CoinSettingType::BitcoinCashCoinType, "type145");
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"bitcoinCashCoinType":"type145"}"#);
    }
}
