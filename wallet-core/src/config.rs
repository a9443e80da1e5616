// wallet-core/src/config.rs
//
// Core configuration, passed as JSON across the app boundary.

use crate::error::{WalletError, WalletResult};
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"debug,wallet_coin_policy=trace"`.
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Human,
        }
    }
}

impl CoreConfig {
    /// Missing fields fall back to [`CoreConfig::default`].
    pub fn from_json(json: &str) -> WalletResult<Self> {
        serde_json::from_str(json).map_err(|e| WalletError::Config(e.to_string()))
    }
}
