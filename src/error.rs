use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no plottable values: every plottable is empty")]
    NoPlottableValues,

    #[error("invalid range at position {index}: [{min}, {max})")]
    InvalidRange { index: usize, min: usize, max: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
