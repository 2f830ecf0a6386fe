//! Error types.

use thiserror::Error;

/// The failures of building a geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The ring has not enough different points to enclose any area.
    #[error("a polygon requires at least 3 distinct points, got {distinct}")]
    TooFewPoints {
        /// The amount of distinct points in the ring.
        distinct: usize,
    },
}

/// The errors surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Repairing a self-intersecting polygon did not yield a valid one.
    #[error("polygon is still invalid after being repaired")]
    InvalidPolygon,

    /// The series to compare have different lengths.
    #[error("series length mismatch: {left} != {right}")]
    LengthMismatch {
        /// The length of the first series.
        left: usize,
        /// The length of the second series.
        right: usize,
    },

    /// The values cannot make up a clean series.
    #[error("invalid series: {0}")]
    Series(String),
}

impl Error {
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    pub fn series(message: impl Into<String>) -> Self {
        Self::Series(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
