//! Normalized transaction records produced by the parser.
//!
//! Every amount has been joined with its resolved [`Asset`](crate::models::Asset)
//! descriptor and carried as a [`Money`] value, recipients are canonical
//! [`Recipient`] values, and attachments are decoded to text. Wire kinds the
//! parser does not understand surface as
//! [`ParsedTransaction::Unrecognized`], byte for byte what came in.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::{AssetPair, Recipient};
use crate::money::Money;
use crate::transactions::raw::OrderSide;

/// A transfer attachment in decoded and wire form.
///
/// `decoded` is `None` when the payload was not valid base58-encoded UTF-8;
/// `raw` always keeps the base58 string exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub decoded: Option<String>,
    pub raw: String,
}

/// One normalized transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedTransaction {
    Transfer(ParsedTransfer),
    Issue(ParsedIssue),
    Reissue(ParsedReissue),
    Burn(ParsedBurn),
    Exchange(ParsedExchange),
    Lease(ParsedLease),
    CancelLease(ParsedCancelLease),
    CreateAlias(ParsedCreateAlias),
    MassTransfer(ParsedMassTransfer),
    /// Transaction kind the parser does not understand, passed through
    /// unchanged from the input batch.
    Unrecognized(Value),
}

impl ParsedTransaction {
    /// Stable label for the transaction kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "transfer",
            Self::Issue(_) => "issue",
            Self::Reissue(_) => "reissue",
            Self::Burn(_) => "burn",
            Self::Exchange(_) => "exchange",
            Self::Lease(_) => "lease",
            Self::CancelLease(_) => "cancel_lease",
            Self::CreateAlias(_) => "create_alias",
            Self::MassTransfer(_) => "mass_transfer",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Asset transfer to a single recipient.
///
/// Legacy transfers (wire type 2) normalize into this shape as well, with a
/// native amount and fee and an empty attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransfer {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    /// Fee in the asset it was paid in, not necessarily the native one.
    pub fee: Money,
    pub recipient: Recipient,
    pub amount: Money,
    pub attachment: Attachment,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIssue {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub name: String,
    pub description: String,
    /// Issued quantity in the newly created asset itself.
    pub quantity: Money,
    pub reissuable: bool,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReissue {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub quantity: Money,
    pub reissuable: bool,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBurn {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub amount: Money,
    pub is_utx: bool,
}

/// Matched exchange between one buy and one sell order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExchange {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub order1: ParsedExchangeOrder,
    pub order2: ParsedExchangeOrder,
    /// Side of the order that initiated the match: the one signed later.
    pub exchange_type: OrderSide,
    /// Execution price in the price asset, taken from the first order.
    pub price: Money,
    /// Executed amount in the amount asset, the smaller of the two orders.
    pub amount: Money,
    /// Executed volume in the price asset, the smaller of the two order
    /// totals.
    pub total: Money,
    pub buy_matcher_fee: Money,
    pub sell_matcher_fee: Money,
    pub is_utx: bool,
}

impl ParsedExchange {
    /// The buy side of the match.
    pub fn buy_order(&self) -> &ParsedExchangeOrder {
        match self.order1.order_type {
            OrderSide::Buy => &self.order1,
            OrderSide::Sell => &self.order2,
        }
    }

    /// The sell side of the match.
    pub fn sell_order(&self) -> &ParsedExchangeOrder {
        match self.order1.order_type {
            OrderSide::Sell => &self.order1,
            OrderSide::Buy => &self.order2,
        }
    }
}

/// One side of an exchange with its amounts joined to resolved assets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExchangeOrder {
    pub id: Option<String>,
    pub sender: Option<String>,
    pub order_type: OrderSide,
    pub asset_pair: AssetPair,
    /// Limit price in the price asset.
    pub price: Money,
    /// Order size in the amount asset.
    pub amount: Money,
    /// Order volume in the price asset: size times price.
    pub total: Money,
    pub matcher_fee: Money,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLease {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub recipient: Recipient,
    pub amount: Money,
    /// Whether the lease is still in force.
    pub is_active: bool,
    pub status: Option<String>,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCancelLease {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub lease_id: Option<String>,
    /// The cancelled lease, normalized as a confirmed record.
    pub lease: ParsedLease,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCreateAlias {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub alias: String,
    pub is_utx: bool,
}

/// Transfer of one asset to many recipients in a single transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMassTransfer {
    pub id: String,
    pub sender: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub height: Option<u64>,
    pub fee: Money,
    pub total_amount: Money,
    pub transfers: Vec<ParsedTransferEntry>,
    pub attachment: Attachment,
    pub is_utx: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransferEntry {
    pub recipient: Recipient,
    pub amount: Money,
}
