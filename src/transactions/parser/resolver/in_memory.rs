use async_trait::async_trait;

use crate::models::{Asset, AssetId};

use super::{AssetResolver, ResolveError, ResolvedAssets};

/// Resolves assets from a fixed catalog held in memory.
///
/// Suited to tests and to callers that already hold the full descriptor set.
/// Unlike a remote resolver, the catalog is authoritative: an identifier it
/// does not contain fails immediately with [`ResolveError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetResolver {
    catalog: ResolvedAssets,
}

impl InMemoryAssetResolver {
    pub fn new(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            catalog: ResolvedAssets::from_assets(assets),
        }
    }
}

#[async_trait]
impl AssetResolver for InMemoryAssetResolver {
    async fn resolve(&self, ids: &[AssetId]) -> Result<ResolvedAssets, ResolveError> {
        let mut resolved = ResolvedAssets::default();
        for id in ids {
            match self.catalog.get(id) {
                Some(asset) => resolved.insert(asset.clone()),
                None => return Err(ResolveError::NotFound(id.clone())),
            }
        }
        Ok(resolved)
    }
}
