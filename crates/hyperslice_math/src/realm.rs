//! Realm: an ordered basis spanning a 3-flat of 4-space
//!
//! "Realm" is the project's term for a 3D sub-flat of 4D space, represented
//! by three ordered basis rows. A cube facet lies in a realm; the viewer
//! looks through one. Wherever projections must be distance-preserving the
//! rows are expected to be orthonormal - facet realms inherit this from the
//! standard basis, and the viewer realm is produced by plane rotations that
//! preserve it.

use serde::{Serialize, Deserialize};

use crate::{Vec4, mat4::Mat4, mat4};

/// The standard basis directions of 4-space, in x, y, z, w order
pub const STANDARD_BASIS: [Vec4; 4] = [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];

/// An ordered triple of basis rows spanning a 3-flat of 4-space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    rows: [Vec4; 3],
}

impl Realm {
    /// The default realm spanned by the x, y, z axes (the w = 0 flat)
    pub const XYZ: Self = Self { rows: [Vec4::X, Vec4::Y, Vec4::Z] };

    /// Create a realm from three basis rows
    ///
    /// Rows are taken as given; orthonormality is the caller's concern and
    /// is validated at the engine boundary, not here.
    #[inline]
    pub const fn new(rows: [Vec4; 3]) -> Self {
        Self { rows }
    }

    /// The basis rows, in order
    #[inline]
    pub fn rows(&self) -> &[Vec4; 3] {
        &self.rows
    }

    /// The standard basis with row `axis` removed: the realm spanned by the
    /// three axes complementary to `axis`
    ///
    /// # Panics
    /// Panics if `axis >= 4`.
    pub fn standard_complement(axis: usize) -> Self {
        assert!(axis < 4, "axis {} out of range for 4-space", axis);
        let mut rows = [Vec4::ZERO; 3];
        let mut at = 0;
        for (i, &direction) in STANDARD_BASIS.iter().enumerate() {
            if i != axis {
                rows[at] = direction;
                at += 1;
            }
        }
        Self { rows }
    }

    /// Apply a 4x4 transform to every row, yielding a new realm
    pub fn transformed(&self, m: Mat4) -> Self {
        Self {
            rows: [
                mat4::transform(m, self.rows[0]),
                mat4::transform(m, self.rows[1]),
                mat4::transform(m, self.rows[2]),
            ],
        }
    }

    /// Express a 4D point in this realm's coordinates
    ///
    /// Right-multiplies by the realm transpose: the result components are
    /// the dot products of the point with the three rows. For an orthonormal
    /// realm this is a distance-preserving projection onto the flat.
    #[inline]
    pub fn project(&self, p: Vec4) -> [f32; 3] {
        [p.dot(self.rows[0]), p.dot(self.rows[1]), p.dot(self.rows[2])]
    }

    /// Check that every row has unit length and each pair is perpendicular,
    /// within `tol`
    pub fn is_orthonormal(&self, tol: f32) -> bool {
        for i in 0..3 {
            if (self.rows[i].length() - 1.0).abs() > tol {
                return false;
            }
            for j in (i + 1)..3 {
                if self.rows[i].dot(self.rows[j]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl std::ops::Index<usize> for Realm {
    type Output = Vec4;

    #[inline]
    fn index(&self, row: usize) -> &Vec4 {
        &self.rows[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_realm() {
        assert_eq!(Realm::XYZ.rows(), &[Vec4::X, Vec4::Y, Vec4::Z]);
        assert!(Realm::XYZ.is_orthonormal(1e-6));
    }

    #[test]
    fn test_standard_complement_skips_axis() {
        assert_eq!(Realm::standard_complement(0).rows(), &[Vec4::Y, Vec4::Z, Vec4::W]);
        assert_eq!(Realm::standard_complement(1).rows(), &[Vec4::X, Vec4::Z, Vec4::W]);
        assert_eq!(Realm::standard_complement(2).rows(), &[Vec4::X, Vec4::Y, Vec4::W]);
        assert_eq!(Realm::standard_complement(3).rows(), &[Vec4::X, Vec4::Y, Vec4::Z]);
    }

    #[test]
    #[should_panic]
    fn test_standard_complement_bad_axis() {
        Realm::standard_complement(4);
    }

    #[test]
    fn test_complements_are_orthonormal() {
        for axis in 0..4 {
            assert!(Realm::standard_complement(axis).is_orthonormal(1e-6));
        }
    }

    #[test]
    fn test_project_default_realm() {
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        // Projection onto {x,y,z} drops the w component
        assert_eq!(Realm::XYZ.project(p), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_transformed_by_plane_rotation_stays_orthonormal() {
        let m = mat4::plane_rotation(0.7, 3, 1);
        let realm = Realm::XYZ.transformed(m);
        assert!(realm.is_orthonormal(1e-6));
    }

    #[test]
    fn test_is_orthonormal_rejects_scaled_row() {
        let realm = Realm::new([Vec4::X * 2.0, Vec4::Y, Vec4::Z]);
        assert!(!realm.is_orthonormal(1e-3));
    }

    #[test]
    fn test_is_orthonormal_rejects_dependent_rows() {
        let realm = Realm::new([Vec4::X, Vec4::X, Vec4::Z]);
        assert!(!realm.is_orthonormal(1e-3));
    }

    #[test]
    fn test_index() {
        let realm = Realm::standard_complement(1);
        assert_eq!(realm[0], Vec4::X);
        assert_eq!(realm[2], Vec4::W);
    }
}
