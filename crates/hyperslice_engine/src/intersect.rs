//! Hyperplane / segment intersection
//!
//! The slicing flat is the realm's span through the origin; its unit normal
//! is the one direction orthogonal to all three realm rows, recovered as
//! the right-singular vector of the zero singular value. Segment
//! classification follows the line-plane intersection formula with an
//! absolute-dot-product tolerance separating the parallel and crossing
//! branches.

use nalgebra::Matrix4;

use hyperslice_math::{Realm, Vec4};

use crate::cube::Edge;
use crate::error::GeometryError;

/// Result of crossing one segment with the slicing flat
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    /// The segment does not meet the flat
    Miss,
    /// The segment crosses the flat in a single point
    Point(Vec4),
    /// The segment lies inside the flat; both endpoints are returned
    Contained(Vec4, Vec4),
}

/// Unit normal of the realm's span: the direction orthogonal to all three
/// rows
///
/// Computed from the SVD of the realm matrix (padded with a zero row); the
/// right-singular vector of the smallest singular value spans the null
/// space. Fails when the rows are rank-deficient, since the null space is
/// then not a unique direction.
pub fn realm_normal(realm: &Realm, eps: f32) -> Result<Vec4, GeometryError> {
    let r = realm.rows();
    let m = Matrix4::new(
        r[0].x, r[0].y, r[0].z, r[0].w,
        r[1].x, r[1].y, r[1].z, r[1].w,
        r[2].x, r[2].y, r[2].z, r[2].w,
        0.0, 0.0, 0.0, 0.0,
    );

    // Singular values come back sorted descending; index 3 belongs to the
    // zero row, index 2 is the smallest genuine one.
    let svd = m.svd(true, true);
    if svd.singular_values[2] < eps {
        return Err(GeometryError::DegenerateRealm(format!(
            "rows are rank-deficient (third singular value {})",
            svd.singular_values[2]
        )));
    }

    let v_t = svd
        .v_t
        .ok_or_else(|| GeometryError::DegenerateRealm("SVD produced no singular vectors".to_string()))?;
    let n = v_t.row(3);
    Ok(Vec4::new(n[0], n[1], n[2], n[3]))
}

/// Classify one segment against the flat with unit normal `normal`
///
/// A segment direction within `eps` of perpendicular to the normal is
/// parallel to the flat; it is contained when its start point also lies
/// within `eps` of the flat. Otherwise the crossing parameter is solved
/// along the unit direction and accepted when it falls inside the segment.
pub fn segment_crossing(normal: Vec4, edge: &Edge, eps: f32) -> Result<Crossing, GeometryError> {
    let direction = edge.direction();
    let length = direction.length();
    let direction = direction
        .try_normalized(eps)
        .ok_or(GeometryError::DegenerateSegment { length })?;

    let slope = direction.dot(normal);
    if slope.abs() < eps {
        // Segment parallel to the flat
        if edge.start.dot(normal).abs() < eps {
            Ok(Crossing::Contained(edge.start, edge.end))
        } else {
            Ok(Crossing::Miss)
        }
    } else {
        let d = -edge.start.dot(normal) / slope;
        if d >= 0.0 && d <= length {
            Ok(Crossing::Point(edge.start + direction * d))
        } else {
            Ok(Crossing::Miss)
        }
    }
}

/// Intersect a realm and a segment directly
///
/// Convenience wrapper computing the normal per call; the slicer hoists
/// [`realm_normal`] out of its edge loop instead.
pub fn intersect_realm_segment(
    realm: &Realm,
    edge: &Edge,
    eps: f32,
) -> Result<Crossing, GeometryError> {
    let normal = realm_normal(realm, eps)?;
    segment_crossing(normal, edge, eps)
}
