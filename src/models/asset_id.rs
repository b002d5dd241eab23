use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of an asset as referenced by transaction records.
///
/// The network's base currency has no explicit identifier on the wire: an
/// absent or empty asset-id field means [`AssetId::Native`]. Every other
/// value is carried verbatim as [`AssetId::Issued`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AssetId {
    #[default]
    Native,
    Issued(String),
}

impl AssetId {
    /// Canonicalizes a raw wire value. `None` and the empty string are the
    /// native sentinel; anything else is an explicit identifier.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => AssetId::Native,
            Some(s) if s.is_empty() => AssetId::Native,
            Some(s) => AssetId::Issued(s.to_string()),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetId::Native)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetId::Native => Ok(()),
            AssetId::Issued(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for AssetId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetId::from_raw(Some(s)))
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            AssetId::Native => serializer.serialize_str(""),
            AssetId::Issued(id) => serializer.serialize_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(AssetId::from_raw(raw.as_deref()))
    }
}
