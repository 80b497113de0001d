use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("scaling group not found: {0}")]
    GroupNotFound(String),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("inventory is for region '{inventory}', not '{requested}'")]
    RegionMismatch { inventory: String, requested: String },

    #[error("malformed inventory: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ProviderError {
    fn from(e: std::io::Error) -> Self {
        ProviderError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Parse(e.to_string())
    }
}
