// wallet-core/src/settings/restore_settings.rs
//
// Extra inputs a coin needs only while an existing account is being restored.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RestoreSettingType {
    /// Block height the wallet was created at; scanning starts there
    BirthdayHeight,
}

impl RestoreSettingType {
    pub const fn as_str(self) -> &'static str {
        match self {
            RestoreSettingType::BirthdayHeight => "birthdayHeight",
        }
    }
}

impl fmt::Display for RestoreSettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestoreSettingType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birthdayHeight" => Ok(RestoreSettingType::BirthdayHeight),
            other => Err(ParseError::UnknownRestoreSettingType(other.to_owned())),
        }
    }
}

/// Values the user entered for a coin's [`RestoreSettingType`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestoreSettings {
    values: BTreeMap<RestoreSettingType, String>,
}

impl RestoreSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: RestoreSettingType) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn insert(&mut self, key: RestoreSettingType, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// `None` when missing or not a non-negative integer.
    pub fn birthday_height(&self) -> Option<u64> {
        self.get(RestoreSettingType::BirthdayHeight)?.parse().ok()
    }

    pub fn set_birthday_height(&mut self, height: u64) {
        self.insert(RestoreSettingType::BirthdayHeight, height.to_string());
    }

    /// True when every requested setting has a value.
    pub fn satisfies(&self, required: &[RestoreSettingType]) -> bool {
        required.iter().all(|key| self.values.contains_key(key))
    }
}
