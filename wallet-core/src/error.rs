use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Parse Error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Logging Error: {0}")]
    Logging(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word at position {0} not found in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

/// Failures decoding catalog/settings strings into typed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown derivation '{0}'")]
    UnknownDerivation(String),

    #[error("Unknown Bitcoin Cash coin type '{0}'")]
    UnknownBitcoinCashCoinType(String),

    #[error("Unknown coin setting type '{0}'")]
    UnknownCoinSettingType(String),

    #[error("Unknown restore setting type '{0}'")]
    UnknownRestoreSettingType(String),

    #[error("Malformed settings entry '{0}', expected 'key:value'")]
    MalformedSettingsEntry(String),
}
