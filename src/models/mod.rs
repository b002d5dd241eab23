//! Shared domain models for transaction normalization.
//!
//! This module contains the small set of types that flow through every layer
//! of the crate: asset identifiers and descriptors, asset pairs for exchange
//! orders, and canonical recipients.
//!
//! # Key Types
//!
//! - [`AssetId`] - Wire-level asset identifier (native sentinel or explicit id)
//! - [`Asset`] - Resolved asset descriptor carrying the decimal precision
//! - [`AssetPair`] - The amount/price asset legs of an exchange order
//! - [`Recipient`] - A transfer target, either a direct address or an alias

use serde::{Deserialize, Serialize};

pub mod asset_id;
pub use asset_id::AssetId;

/// A resolved asset descriptor.
///
/// Descriptors are looked up by identifier through an
/// [`AssetResolver`](crate::transactions::AssetResolver) and are immutable
/// once resolved. `decimals` is the number of fractional digits separating
/// the smallest on-chain unit from the human-readable token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    /// Short display symbol, when the network assigns one.
    pub ticker: Option<String>,
    pub decimals: u32,
}

impl Asset {
    /// Display symbol for the asset: the ticker when present, otherwise the
    /// identifier itself.
    pub fn symbol(&self) -> &str {
        match &self.ticker {
            Some(ticker) => ticker,
            None => match &self.id {
                AssetId::Native => "native",
                AssetId::Issued(id) => id,
            },
        }
    }
}

/// The two asset legs of an exchange order, already canonicalized.
///
/// Either leg may be absent or null on the wire, which denotes the native
/// asset and deserializes to [`AssetId::Native`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    #[serde(default)]
    pub amount_asset: AssetId,
    #[serde(default)]
    pub price_asset: AssetId,
}

/// A transfer target in canonical form.
///
/// Wire records carry recipients as bare strings that are either a direct
/// address or an alias reference (`alias:<chain>:<name>`). Downstream code
/// matches on the variant instead of re-inspecting the raw format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recipient {
    Address(String),
    Alias(String),
}

impl Recipient {
    /// The underlying address or alias name.
    pub fn as_str(&self) -> &str {
        match self {
            Recipient::Address(s) => s,
            Recipient::Alias(s) => s,
        }
    }
}
