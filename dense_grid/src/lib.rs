//! A resizable, row-major 2D store for small cell values.
//!
//! [`DenseGrid`] keeps `width * height` elements in one contiguous buffer and
//! addresses them by `(x, y)`. Out-of-range coordinates are programmer errors
//! and panic in every build profile; [`DenseGrid::get`] is there for callers
//! that want to check a coordinate first.

pub mod error;
pub mod grid;

pub use error::{GridError, GridResult};
pub use grid::{CellPos, DenseGrid};
