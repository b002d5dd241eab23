//! HTTP client for batched asset-descriptor lookups.
//!
//! This module provides the [`AssetClient`] struct, which fetches asset
//! descriptors from a node or indexer's asset endpoint. Lookups are always
//! batched: one request carries every identifier a parse batch references.
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use txview::http::AssetClient;
//! use txview::models::AssetId;
//!
//! # async fn example() -> Result<(), txview::http::HttpError> {
//! let client = AssetClient::new(Url::parse("http://localhost:8080")?)?;
//!
//! let ids = vec![AssetId::Native, AssetId::Issued("abc123".to_string())];
//! let assets = client.fetch_assets(&ids).await?;
//! for asset in assets {
//!     println!("{} has {} decimals", asset.name, asset.decimals);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};

use log::debug;
use tokio::sync::RwLock;
use url::Url;

use crate::models::{Asset, AssetId};

use super::error::HttpError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP client for the asset-lookup endpoint of a node or indexer.
///
/// Transient failures are retried with exponential backoff; retry policy
/// lives entirely in this client, never in the transaction parser consuming
/// it. The client is safe to share across threads and async tasks.
pub struct AssetClient {
    base_url: Url,
    client: reqwest_middleware::ClientWithMiddleware,
    last_latency: RwLock<Option<(Duration, Instant)>>,
}

impl AssetClient {
    /// Creates a client with the default timeout (30s) and retry count (3).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized
    /// (e.g., TLS backend initialization failure).
    pub fn new(base_url: Url) -> Result<Self, HttpError> {
        Self::with_config(base_url, DEFAULT_MAX_RETRIES, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom retry count and timeout.
    ///
    /// Set `max_retries` to 0 to disable retries.
    pub fn with_config(base_url: Url, max_retries: u32, timeout: Duration) -> Result<Self, HttpError> {
        let retry_policy = reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(max_retries);

        let inner_client = reqwest::Client::builder().timeout(timeout).build()?;

        let client = reqwest_middleware::ClientBuilder::new(inner_client)
            .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            base_url,
            client,
            last_latency: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches descriptors for the given identifiers in one request.
    ///
    /// Sends `POST {base_url}/assets` with a JSON body of the form
    /// `{"ids": ["", "abc123", ...]}` (the empty string is the native-asset
    /// sentinel) and expects a JSON array of asset descriptors back. The
    /// server is free to return fewer descriptors than requested; completeness
    /// is checked by the caller, which knows which identifiers it needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable after retries, the
    /// server responds with a non-success status, or the response body is
    /// not a descriptor array.
    pub async fn fetch_assets(&self, ids: &[AssetId]) -> Result<Vec<Asset>, HttpError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(); "Requesting asset descriptors");
        let start = Instant::now();
        let url = self.base_url.join("assets")?;

        let body = serde_json::json!({ "ids": ids });
        let resp = self
            .client
            .post(url)
            .body(serde_json::to_string(&body)?)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let latency = start.elapsed();
        self.update_latency(latency).await;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(HttpError::ServerError { status, body });
        }

        Ok(resp.json().await?)
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some((duration, Instant::now()));
    }

    /// Round-trip time of the most recent request, if any was made.
    pub async fn latency(&self) -> Option<Duration> {
        self.last_latency.read().await.map(|(d, _)| d)
    }
}
