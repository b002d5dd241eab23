mod cache;
mod error;
mod http;
mod in_memory;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{Asset, AssetId};

pub use cache::CachingAssetResolver;
pub use error::ResolveError;
pub use http::HttpAssetResolver;
pub use in_memory::InMemoryAssetResolver;

/// Asset descriptors keyed by identifier, as returned by one resolver call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedAssets {
    assets: HashMap<AssetId, Asset>,
}

impl ResolvedAssets {
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            assets: assets
                .into_iter()
                .map(|asset| (asset.id.clone(), asset))
                .collect(),
        }
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    pub fn insert(&mut self, asset: Asset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.assets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Trait for resolving asset descriptors from different sources.
#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// Resolves descriptors for the given identifiers.
    ///
    /// Implementations may return more descriptors than were asked for but
    /// never have to: the parser checks completeness against the set it
    /// requested.
    async fn resolve(&self, ids: &[AssetId]) -> Result<ResolvedAssets, ResolveError>;
}
