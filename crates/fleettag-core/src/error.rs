use thiserror::Error;

use crate::{engine::AllocError, provider::ProviderError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("region could not be determined; pass --region or set AWS_REGION")]
    RegionUnresolved,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
