//! The slicing entry point: (center, alpha, beta) -> polygon collection
//!
//! A slice is a pure function with no shared state: build the viewer's
//! realm, decompose the tesseract into facets, cross every facet edge with
//! the flat, deduplicate, re-express the survivors in viewer coordinates,
//! and order each facet's points into a closed polygon. Facets the flat
//! misses are silently omitted; genuinely degenerate facet intersections
//! are skipped with a debug log.

use std::collections::HashSet;

use serde::{Serialize, Deserialize};

use hyperslice_math::{Realm, Vec4};

use crate::error::GeometryError;
use crate::hull::planar_order;
use crate::intersect::{realm_normal, segment_crossing, Crossing};
use crate::tesseract::Tesseract;
use crate::viewer::viewer_realm;

/// Default precision tolerance for near-parallel / near-contained
/// classification
pub const DEFAULT_EPSILON: f32 = 1e-3;

/// One cross-section polygon in viewer coordinates
///
/// `points` is a closed, simple loop: the first vertex is repeated as the
/// last. `facet` identifies which of the 8 tesseract facets produced it
/// (0..8, in facet emission order), for downstream color assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub facet: usize,
    pub points: Vec<[f32; 3]>,
}

/// Cross-section engine with an explicit precision tolerance
///
/// The tolerance decides which configurations count as parallel, contained,
/// or degenerate near exact alignments, so it is a visible knob rather than
/// a buried constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slicer {
    epsilon: f32,
}

impl Default for Slicer {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }
}

impl Slicer {
    #[inline]
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Slice the tesseract centered at `center` with the viewer realm for
    /// angles `alpha` and `beta`
    ///
    /// An empty collection is a valid result: every facet missed the flat.
    pub fn slice(&self, center: Vec4, alpha: f32, beta: f32) -> Result<Vec<Face>, GeometryError> {
        self.slice_with_realm(center, &viewer_realm(alpha, beta))
    }

    /// Slice with a caller-supplied realm
    ///
    /// The realm must be orthonormal; anything else is rejected as
    /// degenerate rather than silently misprocessed.
    pub fn slice_with_realm(&self, center: Vec4, realm: &Realm) -> Result<Vec<Face>, GeometryError> {
        if !realm.is_orthonormal(self.epsilon) {
            return Err(GeometryError::DegenerateRealm(
                "rows are not orthonormal".to_string(),
            ));
        }
        let normal = realm_normal(realm, self.epsilon)?;

        let mut faces = Vec::new();
        for (facet_index, facet) in Tesseract::new(center).facets().into_iter().enumerate() {
            let mut points = Vec::new();
            for edge in facet.edges() {
                match segment_crossing(normal, &edge, self.epsilon)? {
                    Crossing::Miss => {}
                    Crossing::Point(p) => points.push(p),
                    Crossing::Contained(a, b) => {
                        points.push(a);
                        points.push(b);
                    }
                }
            }

            let points = dedup_points(points);
            if points.is_empty() {
                continue;
            }

            let projected: Vec<[f32; 3]> = points.iter().map(|&p| realm.project(p)).collect();
            let Some(order) = planar_order(&projected, self.epsilon) else {
                log::debug!(
                    "facet {}: degenerate intersection ({} points), no polygon",
                    facet_index,
                    points.len()
                );
                continue;
            };

            let mut loop_points: Vec<[f32; 3]> =
                order.iter().map(|&i| projected[i]).collect();
            loop_points.push(loop_points[0]);
            faces.push(Face { facet: facet_index, points: loop_points });
        }

        log::trace!("slice produced {} face(s)", faces.len());
        Ok(faces)
    }
}

/// Slice with the default tolerance
pub fn slice(center: Vec4, alpha: f32, beta: f32) -> Result<Vec<Face>, GeometryError> {
    Slicer::default().slice(center, alpha, beta)
}

/// Drop exact duplicate points, keeping first-seen order
///
/// Rows are keyed on the bit pattern of their components, so only
/// bit-identical duplicates collapse - exactly the double-counting produced
/// by adjacent edges sharing an endpoint on the flat.
pub fn dedup_points(points: Vec<Vec4>) -> Vec<Vec4> {
    let mut seen: HashSet<[u32; 4]> = HashSet::with_capacity(points.len());
    points
        .into_iter()
        .filter(|p| seen.insert(p.to_array().map(f32::to_bits)))
        .collect()
}
