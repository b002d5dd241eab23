//! HTTP client module for asset-descriptor lookups.
//!
//! This module provides the HTTP plumbing behind the network-backed
//! [`AssetResolver`](crate::transactions::AssetResolver) implementation:
//! a batched asset endpoint client with built-in retry logic and latency
//! tracking.
//!
//! # Architecture
//!
//! - [`AssetClient`] - Client for the batched asset-lookup endpoint
//! - [`HttpError`] - Error types for HTTP operations
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable exponential backoff retry policy for
//!   transient failures
//! - **Latency Tracking**: Built-in measurement of request round-trip times
//! - **Batched Lookups**: One request per parse batch, never per transaction
//!
//! # Error Handling
//!
//! All operations return [`Result`] types. The [`HttpError`] enum provides
//! specific variants for network failures, server errors (4xx/5xx),
//! serialization errors, and URL parsing errors.

mod asset_client;
mod error;

pub use asset_client::AssetClient;
pub use error::HttpError;
