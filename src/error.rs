use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Value that cannot be mapped through a scale domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("value must be > 0 on a logarithmic scale")]
    NonPositive,

    #[error("value must be finite")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("error value count mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("unknown series index {index}")]
    UnknownSeries { index: usize },

    #[error("scale domain error: {0}")]
    Domain(#[from] DomainError),
}
