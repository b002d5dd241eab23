pub mod http;
pub mod models;
pub mod money;
pub mod transactions;

pub use crate::models::{Asset, AssetId};
pub use crate::money::{AmountFormat, Money, MoneyError};
pub use crate::transactions::{ParseError, ParsedTransaction, RawTransaction, TransactionParser};
