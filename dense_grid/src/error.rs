use std::result::Result;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid dimensions {width}x{height} overflow the addressable cell count")]
    DimensionOverflow { width: usize, height: usize },
    #[error("Failed to allocate storage for a {width}x{height} grid")]
    AllocationFailed { width: usize, height: usize },
}

pub type GridResult<T> = Result<T, GridError>;
