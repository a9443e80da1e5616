// wallet-core/src/crypto/mod.rs

//! Seed phrase handling for account creation and restore.
//!
//! Only phrase generation and validation live here. Key derivation from the
//! phrase is done by the chain kits that consume the resulting accounts.

pub mod mnemonic;

pub use mnemonic::{WalletMnemonic, WordCount};
