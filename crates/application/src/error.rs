use edge_pad_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read dimensions: {0}")]
    DimensionRead(String),
    #[error("edge sampling failed: {0}")]
    Sampling(String),
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("io error: {0}")]
    Io(String),
}
