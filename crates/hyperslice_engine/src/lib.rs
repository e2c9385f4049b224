//! Tesseract cross-section engine
//!
//! Computes the 3D cross-sections produced when a 4D hypercube is
//! intersected by a moving 3D viewing hyperplane, emitting ordered,
//! renderable polygons.
//!
//! ## Pipeline
//!
//! 1. [`Tesseract::facets`] - decompose the 4-cube into 8 cubic facets
//! 2. [`viewer_realm`] - build the slicing flat from two angles
//! 3. [`intersect`] - cross every facet edge with the flat
//! 4. [`Slicer::slice`] - deduplicate, project, and order the polygons
//!
//! Every public operation is a pure function over immutable values; the
//! engine keeps no state between calls and is freely callable from
//! multiple threads.

pub mod cube;
pub mod error;
pub mod hull;
pub mod intersect;
pub mod slicer;
pub mod tesseract;
pub mod viewer;

pub use hyperslice_math::{Mat4, Realm, Vec4};

pub use cube::{extend_into_dimension, Cube, Edge};
pub use error::GeometryError;
pub use intersect::{intersect_realm_segment, realm_normal, segment_crossing, Crossing};
pub use slicer::{dedup_points, slice, Face, Slicer, DEFAULT_EPSILON};
pub use tesseract::Tesseract;
pub use viewer::viewer_realm;
