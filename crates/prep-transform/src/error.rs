use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid number at position {index}: {value:?}")]
    InvalidNumber { index: usize, value: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
