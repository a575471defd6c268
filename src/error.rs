//! Error types for grid construction, lookups and search preconditions.
use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("{point} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        point: Point,
        rows: usize,
        cols: usize,
    },

    #[error("invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, GridError>;
