//! Slicing-plane generator: the viewer's realm inside 4-space
//!
//! The viewer looks through a 3-flat obtained by rotating the default
//! {x, y, z} realm with two plane rotations: alpha mixes the y and w axes,
//! beta mixes the x and w axes. Both are pure plane rotations, so the
//! resulting realm stays orthonormal with no renormalization step.
//!
//! The realm rows are row vectors multiplied on the right by the rotation
//! product; with the column-major [`Mat4`] convention that is the
//! transposed factors applied in swapped order, which `plane_rotation`
//! with swapped axis arguments provides directly.

use hyperslice_math::{mat4, Realm};

/// The viewer's orthonormal 3-realm for angles `alpha` (y/w rotation) and
/// `beta` (x/w rotation)
///
/// `alpha = beta = 0` recovers [`Realm::XYZ`], i.e. the w = 0 slicing flat.
pub fn viewer_realm(alpha: f32, beta: f32) -> Realm {
    let rot_alpha = mat4::plane_rotation(alpha, 3, 1);
    let rot_beta = mat4::plane_rotation(beta, 3, 0);
    Realm::XYZ.transformed(mat4::mul(rot_beta, rot_alpha))
}
