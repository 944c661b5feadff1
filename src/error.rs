use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("entry index {index} is out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
