// wallet-core/src/accounts/mod.rs

//! Account key material families and the templates used to create them.

pub mod account_type;
pub mod predefined;

pub use account_type::{AccountType, Derivation};
pub use predefined::PredefinedAccountType;
