//! Geometric utility functions.
//!
//! Point-set generators used by the count-based constructors, tests and
//! benchmarks.

pub mod point_generation;

pub use point_generation::*;

use thiserror::Error;

/// Errors that can occur while generating point sets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RandomPointGenerationError {
    /// The coordinate range is empty or inverted.
    #[error("Invalid coordinate range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound, as a string.
        min: String,
        /// Upper bound, as a string.
        max: String,
    },
    /// The requested number of points is not usable.
    #[error("Invalid point count: {n_points}")]
    InvalidPointCount {
        /// The rejected count.
        n_points: usize,
    },
    /// A generated coordinate could not be represented.
    #[error("Point generation failed: {details}")]
    GenerationFailed {
        /// Description of the failure.
        details: String,
    },
}
