//! Candidate records returned by a search provider

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of instrument a candidate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Stock,
    Crypto,
    /// Any kind this client does not know about (etf, option, ...)
    #[serde(other)]
    Other,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Stock => write!(f, "stock"),
            AssetKind::Crypto => write!(f, "crypto"),
            AssetKind::Other => write!(f, "other"),
        }
    }
}

/// One match for a query: `{symbol, name, kind}`
///
/// Serialized with the key `type` for the kind, which is what the asset
/// search endpoint sends and what the CLI prints on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AssetKind,
}

impl Candidate {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn stock(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(symbol, name, AssetKind::Stock)
    }
}
