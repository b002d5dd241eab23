use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::models::{Asset, AssetId};

use super::{AssetResolver, ResolveError, ResolvedAssets};

/// Caching layer over another resolver.
///
/// Asset descriptors are immutable once issued, so cached entries never
/// expire. Each call serves what it can from the cache and forwards only the
/// missing identifiers to the inner resolver.
pub struct CachingAssetResolver<R> {
    inner: R,
    cache: RwLock<HashMap<AssetId, Asset>>,
}

impl<R> CachingAssetResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of descriptors currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl<R: AssetResolver> AssetResolver for CachingAssetResolver<R> {
    async fn resolve(&self, ids: &[AssetId]) -> Result<ResolvedAssets, ResolveError> {
        let mut resolved = ResolvedAssets::default();
        let mut misses = Vec::new();
        {
            let cache = self.cache.read().await;
            for id in ids {
                match cache.get(id) {
                    Some(asset) => resolved.insert(asset.clone()),
                    None => misses.push(id.clone()),
                }
            }
        }

        if misses.is_empty() {
            return Ok(resolved);
        }

        debug!(misses = misses.len(), requested = ids.len(); "Fetching descriptors absent from the cache");
        let fetched = self.inner.resolve(&misses).await?;

        let mut cache = self.cache.write().await;
        for id in &misses {
            if let Some(asset) = fetched.get(id) {
                cache.insert(id.clone(), asset.clone());
                resolved.insert(asset.clone());
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct RecordingResolver {
        catalog: ResolvedAssets,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Vec<AssetId>>>,
    }

    #[async_trait]
    impl AssetResolver for RecordingResolver {
        async fn resolve(&self, ids: &[AssetId]) -> Result<ResolvedAssets, ResolveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = ids.to_vec();

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

    fn asset(id: AssetId) -> Asset {
        Asset {
            id,
            name: "Test".to_string(),
            ticker: None,
            decimals: 8,
        }
    }

    fn recording_resolver() -> (RecordingResolver, Arc<AtomicUsize>, Arc<Mutex<Vec<AssetId>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_request = Arc::new(Mutex::new(Vec::new()));
        let resolver = RecordingResolver {
            catalog: ResolvedAssets::from_assets([
                asset(AssetId::Native),
                asset(AssetId::Issued("abc".to_string())),
                asset(AssetId::Issued("def".to_string())),
            ]),
            calls: calls.clone(),
            last_request: last_request.clone(),
        };
        (resolver, calls, last_request)
    }

    #[tokio::test]
    async fn test_repeated_lookups_hit_the_cache() {
        let (inner, calls, _) = recording_resolver();
        let resolver = CachingAssetResolver::new(inner);
        let ids = [AssetId::Native, AssetId::Issued("abc".to_string())];

        resolver.resolve(&ids).await.unwrap();
        resolver.resolve(&ids).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.cached_count().await, 2);
    }

    #[tokio::test]
    async fn test_only_misses_are_forwarded() {
        let (inner, calls, last_request) = recording_resolver();
        let resolver = CachingAssetResolver::new(inner);

        resolver.resolve(&[AssetId::Native]).await.unwrap();
        let resolved = resolver
            .resolve(&[AssetId::Native, AssetId::Issued("def".to_string())])
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            *last_request.lock().unwrap(),
            vec![AssetId::Issued("def".to_string())]
        );
        assert_eq!(resolved.len(), 2);
    }

    #[tokio::test]
    async fn test_inner_errors_pass_through() {
        let (inner, _, _) = recording_resolver();
        let resolver = CachingAssetResolver::new(inner);

        let err = resolver
            .resolve(&[AssetId::Issued("unknown".to_string())])
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::NotFound(_)));
    }
}
