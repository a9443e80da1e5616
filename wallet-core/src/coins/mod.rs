// wallet-core/src/coins/mod.rs

//! Coin identification and the rules tying coins to accounts.
//!
//! - [`CoinType`]: base chains and token standards, decoded from catalog ids.
//! - `policy`: which accounts can hold a coin, its display metadata, default
//!   settings and restore-time requirements.

pub mod coin_type;
mod policy;

pub use coin_type::CoinType;
