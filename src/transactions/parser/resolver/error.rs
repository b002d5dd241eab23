use thiserror::Error;

use crate::http::HttpError;
use crate::models::AssetId;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Asset lookup request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Unknown asset: {0:?}")]
    NotFound(AssetId),
}
