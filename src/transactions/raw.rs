//! Wire-format transaction records as received from a node or indexer.
//!
//! Records arrive as JSON objects discriminated by an integer `type` field.
//! [`RawTransaction`] is a closed union over the kinds this crate
//! understands; any other discriminant is preserved untouched in
//! [`RawTransaction::Unrecognized`] so callers can pass unknown kinds
//! through a parse batch unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{AssetId, AssetPair};
use crate::money::RawAmount;

/// Wire values of the `type` discriminant.
pub mod wire_type {
    pub const LEGACY_TRANSFER: u64 = 2;
    pub const ISSUE: u64 = 3;
    pub const TRANSFER: u64 = 4;
    pub const REISSUE: u64 = 5;
    pub const BURN: u64 = 6;
    pub const EXCHANGE: u64 = 7;
    pub const LEASE: u64 = 8;
    pub const CANCEL_LEASE: u64 = 9;
    pub const CREATE_ALIAS: u64 = 10;
    pub const MASS_TRANSFER: u64 = 11;
}

/// One raw transaction record, discriminated by wire `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTransaction {
    LegacyTransfer(RawLegacyTransfer),
    Issue(RawIssue),
    Transfer(RawTransfer),
    Reissue(RawReissue),
    Burn(RawBurn),
    Exchange(RawExchange),
    Lease(RawLease),
    CancelLease(RawCancelLease),
    CreateAlias(RawCreateAlias),
    MassTransfer(RawMassTransfer),
    /// A transaction kind this crate does not understand, kept verbatim.
    Unrecognized(Value),
}

impl<'de> Deserialize<'de> for RawTransaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tx = match value.get("type").and_then(Value::as_u64) {
            Some(wire_type::LEGACY_TRANSFER) => RawTransaction::LegacyTransfer(from_wire(value)?),
            Some(wire_type::ISSUE) => RawTransaction::Issue(from_wire(value)?),
            Some(wire_type::TRANSFER) => RawTransaction::Transfer(from_wire(value)?),
            Some(wire_type::REISSUE) => RawTransaction::Reissue(from_wire(value)?),
            Some(wire_type::BURN) => RawTransaction::Burn(from_wire(value)?),
            Some(wire_type::EXCHANGE) => RawTransaction::Exchange(from_wire(value)?),
            Some(wire_type::LEASE) => RawTransaction::Lease(from_wire(value)?),
            Some(wire_type::CANCEL_LEASE) => RawTransaction::CancelLease(from_wire(value)?),
            Some(wire_type::CREATE_ALIAS) => RawTransaction::CreateAlias(from_wire(value)?),
            Some(wire_type::MASS_TRANSFER) => RawTransaction::MassTransfer(from_wire(value)?),
            _ => RawTransaction::Unrecognized(value),
        };
        Ok(tx)
    }
}

fn from_wire<T, E>(value: Value) -> Result<T, E>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(value).map_err(E::custom)
}

/// Side of an exchange order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

/// Legacy transfer record (wire type 2), always denominated in the native
/// asset and without an attachment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLegacyTransfer {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub recipient: String,
    pub amount: RawAmount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: RawAmount,
    pub decimals: u32,
    #[serde(default)]
    pub reissuable: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransfer {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub recipient: String,
    pub amount: RawAmount,
    #[serde(default)]
    pub asset_id: AssetId,
    #[serde(default)]
    pub fee_asset: AssetId,
    #[serde(default)]
    pub attachment: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReissue {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub asset_id: AssetId,
    pub quantity: RawAmount,
    #[serde(default)]
    pub reissuable: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBurn {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub asset_id: AssetId,
    pub amount: RawAmount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExchange {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub order1: RawExchangeOrder,
    pub order2: RawExchangeOrder,
    pub buy_matcher_fee: RawAmount,
    pub sell_matcher_fee: RawAmount,
}

/// One side of an exchange transaction as signed by its originator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExchangeOrder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    pub order_type: OrderSide,
    pub asset_pair: AssetPair,
    pub price: RawAmount,
    pub amount: RawAmount,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub matcher_fee: RawAmount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLease {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub recipient: String,
    pub amount: RawAmount,
    /// Lifecycle status reported by the indexer ("active" once confirmed).
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCancelLease {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    #[serde(default)]
    pub lease_id: Option<String>,
    /// The full lease record being cancelled.
    pub lease: RawLease,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateAlias {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMassTransfer {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub height: Option<u64>,
    pub fee: RawAmount,
    #[serde(default)]
    pub asset_id: AssetId,
    pub total_amount: RawAmount,
    pub transfers: Vec<RawTransferEntry>,
    #[serde(default)]
    pub attachment: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransferEntry {
    pub recipient: String,
    pub amount: RawAmount,
}
