use thiserror::Error;

use crate::models::AssetId;
use crate::money::MoneyError;
use crate::transactions::parser::resolver::ResolveError;

/// Errors surfaced while normalizing a transaction batch.
///
/// Any error aborts the whole batch: callers get either every transaction
/// normalized or none of them.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Asset resolution failed: {0}")]
    Resolution(#[from] ResolveError),

    #[error("Asset {0:?} was referenced but not returned by the resolver")]
    UnresolvedAsset(AssetId),

    #[error("Invalid amount: {0}")]
    Amount(#[from] MoneyError),

    #[error("Malformed exchange transaction {id}: {reason}")]
    MalformedExchange { id: String, reason: String },
}
