use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid ratio format {0:?}, expected <width>x<height> such as 9x16")]
    InvalidRatioFormat(String),
    #[error("unsupported ratio {token}, allowed: {allowed}")]
    UnsupportedRatio { token: String, allowed: String },
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
