use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid component bounds: width={width}, height={height}")]
    InvalidBounds { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
