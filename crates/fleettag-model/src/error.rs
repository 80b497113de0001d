use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("digits must be at least 1, got {0}")]
    InvalidDigits(u32),

    #[error("unknown collision policy: {0}")]
    UnknownCollision(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
