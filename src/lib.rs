//! hyperslice - 3D cross-sections of a 4D hypercube
//!
//! The engine computes the polygons where a tesseract meets a moving 3D
//! viewing hyperplane. A slice is a pure function from (center, alpha,
//! beta) to a polygon collection; whatever renders or animates the result
//! lives outside this crate and calls in through [`slice`] or [`Slicer`].
//!
//! ## Crates
//!
//! - `hyperslice_math` - [`Vec4`], [`Mat4`], [`Realm`]
//! - `hyperslice_engine` - facets, intersection, polygon ordering

pub mod config;

pub use hyperslice_engine::{
    dedup_points, extend_into_dimension, intersect_realm_segment, realm_normal,
    segment_crossing, slice, viewer_realm, Crossing, Cube, Edge, Face, GeometryError,
    Slicer, Tesseract, DEFAULT_EPSILON,
};
pub use hyperslice_math::{Mat4, Realm, Vec4, STANDARD_BASIS};
