//! Geometry error types
//!
//! Error handling for degenerate inputs to the slicing pipeline. An empty
//! cross-section is not an error; these variants cover inputs the engine
//! refuses to process rather than let NaNs leak downstream.

use std::fmt;

/// Error type for slicing operations
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A realm whose rows are not orthonormal or not full-rank
    DegenerateRealm(String),
    /// A segment too short to carry a direction
    DegenerateSegment { length: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DegenerateRealm(detail) => {
                write!(f, "Degenerate realm: {}", detail)
            }
            GeometryError::DegenerateSegment { length } => {
                write!(f, "Degenerate segment: length {} is below tolerance", length)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
