//! Error types for the MRFO optimizer.

use thiserror::Error;

/// Errors that can occur when constructing or running the optimizer.
///
/// All variants are configuration failures reported at construction
/// time; a running engine never produces an error.
#[derive(Debug, Error)]
pub enum MrfoError {
    /// Population size is zero.
    #[error("population size must be at least 1, got {size}")]
    PopulationTooSmall {
        /// The invalid population size
        size: usize,
    },

    /// Search space dimensionality is zero.
    #[error("dimensions must be at least 1, got {dimensions}")]
    DimensionsTooSmall {
        /// The invalid dimensionality
        dimensions: usize,
    },

    /// Iteration budget is zero.
    #[error("max iterations must be at least 1, got {iterations}")]
    MaxIterationsTooSmall {
        /// The invalid iteration budget
        iterations: usize,
    },

    /// Search space bounds are non-finite or not strictly ordered.
    #[error("invalid search space: bounds must be finite with lower ({lower}) < upper ({upper})")]
    InvalidBounds {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },
}

/// A specialized `Result` type for MRFO operations.
pub type Result<T> = std::result::Result<T, MrfoError>;
