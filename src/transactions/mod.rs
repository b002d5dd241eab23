//! Transaction normalization for raw node and indexer records.
//!
//! This module turns batches of wire-format transactions into normalized
//! records ready for display or downstream processing:
//!
//! - **Typed wire model**: [`RawTransaction`] dispatches on the integer wire
//!   discriminant and preserves unknown kinds verbatim
//! - **Batched asset resolution**: one resolver call per parse batch, however
//!   many assets the batch references
//! - **Money scaling**: every amount is joined with its resolved descriptor
//!   and carried as a [`Money`](crate::money::Money) value
//! - **Attachment decoding**: base58 payloads become UTF-8 text, the wire
//!   form kept alongside
//! - **Exchange reconciliation**: buy and sell orders are paired and reduced
//!   to the executed price, amount and total
//!
//! # Architecture
//!
//! ```text
//! +----------------+     +--------------------+     +-------------------+
//! | RawTransaction |---->| discover_asset_ids |---->| AssetResolver     |
//! | (wire JSON)    |     | (one batch walk)   |     | (one lookup call) |
//! +----------------+     +--------------------+     +-------------------+
//!         |                                                   |
//!         v                                                   v
//! +-------------------+     +------------------+     +-------------------+
//! | TransactionParser |---->| per-kind rules + |---->| ParsedTransaction |
//! | (batch driver)    |     | exchange logic   |     | (normalized)      |
//! +-------------------+     +------------------+     +-------------------+
//! ```
//!
//! # Parse Lifecycle
//!
//! 1. **Discovery**: the batch is walked once and every referenced asset id
//!    is collected, the native asset always included
//! 2. **Resolution**: the [`AssetResolver`] is asked for every descriptor in
//!    a single call
//! 3. **Normalization**: each record is normalized against the resolved
//!    descriptors by its kind's rule
//! 4. **Reconciliation**: exchange records additionally pair their buy and
//!    sell orders and derive the executed figures
//!
//! Any failure aborts the whole batch; callers never receive a partially
//! normalized result.
//!
//! # Key Types
//!
//! - [`TransactionParser`]: Batch driver tying resolution and normalization together
//! - [`RawTransaction`] / [`ParsedTransaction`]: Wire input and normalized output unions
//! - [`AssetResolver`]: Descriptor lookup seam with HTTP, in-memory and caching implementations
//! - [`ParseError`]: Batch-aborting failure modes
//!
//! # Example
//!
//! ```rust,ignore
//! use txview::http::AssetClient;
//! use txview::transactions::{HttpAssetResolver, RawTransaction, TransactionParser};
//!
//! let client = AssetClient::new("https://indexer.example.com/".parse()?)?;
//! let parser = TransactionParser::new(HttpAssetResolver::new(client));
//!
//! let raw: Vec<RawTransaction> = serde_json::from_str(&body)?;
//! let parsed = parser.parse(&raw, false).await?;
//! ```
//!
//! # Modules
//!
//! - [`raw`]: Wire-format records and the `type` discriminant dispatch
//! - [`parsed`]: Normalized records carrying resolved amounts
//! - [`parser`]: Batch driver, per-kind rules, exchange reconciliation and resolvers

pub mod parsed;
pub mod parser;
pub mod raw;

pub use parsed::{
    Attachment, ParsedBurn, ParsedCancelLease, ParsedCreateAlias, ParsedExchange,
    ParsedExchangeOrder, ParsedIssue, ParsedLease, ParsedMassTransfer, ParsedReissue,
    ParsedTransaction, ParsedTransfer, ParsedTransferEntry,
};
pub use parser::{
    AssetResolver, CachingAssetResolver, HttpAssetResolver, InMemoryAssetResolver, ParseError,
    ResolveError, ResolvedAssets, TransactionParser, discover_asset_ids, transaction_asset_ids,
};
pub use raw::{
    OrderSide, RawBurn, RawCancelLease, RawCreateAlias, RawExchange, RawExchangeOrder, RawIssue,
    RawLease, RawLegacyTransfer, RawMassTransfer, RawReissue, RawTransaction, RawTransfer,
    RawTransferEntry,
};
