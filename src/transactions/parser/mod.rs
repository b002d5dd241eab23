mod attachment;
mod discovery;
mod error;
mod exchange;
mod normalize;
mod processor;
pub mod resolver;
mod rules;

pub use attachment::decode_attachment;
pub use discovery::{discover_asset_ids, transaction_asset_ids};
pub use error::ParseError;
pub use normalize::normalize_recipient;
pub use processor::TransactionParser;
pub use resolver::{
    AssetResolver, CachingAssetResolver, HttpAssetResolver, InMemoryAssetResolver, ResolveError,
    ResolvedAssets,
};
