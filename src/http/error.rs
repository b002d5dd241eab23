//! Error types for HTTP client operations.
//!
//! This module defines the [`HttpError`] enum which encompasses all possible
//! failure modes when communicating with a node or indexer's asset-lookup
//! endpoint.

use thiserror::Error;

/// Errors that can occur during HTTP client operations.
///
/// This enum provides specific error variants for different failure modes,
/// enabling callers to handle errors appropriately based on their type.
/// All variants implement [`std::error::Error`] and [`std::fmt::Display`]
/// through the `thiserror` derive macro.
///
/// # Error Categories
///
/// - **Network errors**: [`RequestFailed`](HttpError::RequestFailed),
///   [`MiddlewareError`](HttpError::MiddlewareError)
/// - **Server errors**: [`ServerError`](HttpError::ServerError)
/// - **Client errors**: [`UrlError`](HttpError::UrlError),
///   [`JsonError`](HttpError::JsonError)
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// This typically indicates connectivity issues such as:
    /// - Connection refused (server not running)
    /// - Connection timeout
    /// - DNS resolution failure
    /// - TLS/SSL handshake errors
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// An error occurred in the HTTP middleware layer.
    ///
    /// The middleware handles retry logic and other cross-cutting concerns.
    /// This error may indicate that all retry attempts have been exhausted.
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),

    /// The server returned a non-success HTTP status code.
    ///
    /// Contains both the HTTP status code and the response body for
    /// debugging. A `404` here usually means the endpoint path is wrong for
    /// the configured indexer; a `400` usually means an identifier in the
    /// request was rejected.
    #[error("Server error {status}: {body}")]
    ServerError {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// Failed to parse or construct a URL.
    ///
    /// This error occurs when joining the base URL with a path produces
    /// an invalid URL, or when the base URL itself is malformed.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// Failed to serialize or deserialize JSON data.
    ///
    /// Common causes include schema mismatches between the client and the
    /// indexer or malformed JSON in the response.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
