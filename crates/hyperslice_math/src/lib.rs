//! 4D Mathematics Library
//!
//! This crate provides the 4D vector, matrix, and basis types for the
//! hyperslice engine.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 matrix for plane rotations in 4-space
//! - [`Realm`] - an ordered orthonormal basis spanning a 3-flat of 4-space

mod vec4;
pub mod mat4;
mod realm;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use realm::{Realm, STANDARD_BASIS};
