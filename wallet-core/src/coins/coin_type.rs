// wallet-core/src/coins/coin_type.rs
//
// Coin identification - base chains and token standards.
// Catalog records carry coins as string ids, e.g. "bitcoin", "erc20|0xdac1...".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between a token standard prefix and its payload.
const ID_SEPARATOR: char = '|';

/// A blockchain or a token standard the wallet knows how to hold.
///
/// Equality is structural: two `Erc20` coins are equal only when their
/// contract addresses are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoinType {
    Bitcoin,
    Litecoin,
    BitcoinCash,
    Dash,
    Ethereum,
    /// ERC-20 token, payload is the contract address
    Erc20(String),
    BinanceSmartChain,
    /// BEP-20 token, payload is the contract address
    Bep20(String),
    /// BEP-2 token, payload is the asset symbol
    Bep2(String),
    Zcash,
    /// Anything the catalog lists that this build cannot handle
    Unsupported(String),
}

impl CoinType {
    /// Stable catalog id.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinType::Bitcoin => f.write_str("bitcoin"),
            CoinType::Litecoin => f.write_str("litecoin"),
            CoinType::BitcoinCash => f.write_str("bitcoinCash"),
            CoinType::Dash => f.write_str("dash"),
            CoinType::Ethereum => f.write_str("ethereum"),
            CoinType::Erc20(address) => write!(f, "erc20{}{}", ID_SEPARATOR, address),
            CoinType::BinanceSmartChain => f.write_str("binanceSmartChain"),
            CoinType::Bep20(address) => write!(f, "bep20{}{}", ID_SEPARATOR, address),
            CoinType::Bep2(symbol) => write!(f, "bep2{}{}", ID_SEPARATOR, symbol),
            CoinType::Zcash => f.write_str("zcash"),
            CoinType::Unsupported(raw) => write!(f, "unsupported{}{}", ID_SEPARATOR, raw),
        }
    }
}

/// Decoding never fails: ids this build does not recognise become
/// [`CoinType::Unsupported`], which every account rejects.
impl FromStr for CoinType {
    type Err = Infallible;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let coin = match id {
            "bitcoin" => CoinType::Bitcoin,
            "litecoin" => CoinType::Litecoin,
            "bitcoinCash" => CoinType::BitcoinCash,
            "dash" => CoinType::Dash,
            "ethereum" => CoinType::Ethereum,
            "binanceSmartChain" => CoinType::BinanceSmartChain,
            "zcash" => CoinType::Zcash,
            _ => match id.split_once(ID_SEPARATOR) {
                Some(("erc20", address)) => CoinType::Erc20(address.to_owned()),
                Some(("bep20", address)) => CoinType::Bep20(address.to_owned()),
                Some(("bep2", symbol)) => CoinType::Bep2(symbol.to_owned()),
                Some((_, payload)) => CoinType::Unsupported(payload.to_owned()),
                None => CoinType::Unsupported(id.to_owned()),
            },
        };
        Ok(coin)
    }
}

impl From<&str> for CoinType {
    fn from(id: &str) -> Self {
        match id.parse() {
            Ok(coin) => coin,
            Err(never) => match never {},
        }
    }
}

impl Serialize for CoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CoinType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(CoinType::from(id.as_str()))
    }
}
