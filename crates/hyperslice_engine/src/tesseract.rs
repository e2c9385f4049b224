//! Tesseract (4D hypercube) decomposed into its 8 cubic facets
//!
//! The tesseract here is always of half-width 1; it stores only its center
//! and produces facets on demand. Each facet is a [`Cube`] lying in the
//! realm complementary to one axis, pushed out by ±1 along that axis.

use hyperslice_math::{Realm, Vec4, STANDARD_BASIS};

use crate::cube::Cube;

/// A 4-cube of half-width 1 centered at `center`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tesseract {
    pub center: Vec4,
}

impl Tesseract {
    #[inline]
    pub fn new(center: Vec4) -> Self {
        Self { center }
    }

    /// The 8 cubic facets, in order: axis 0 negative, axis 0 positive,
    /// axis 1 negative, axis 1 positive, ...
    ///
    /// For each axis the facet realm is the standard basis with that axis
    /// removed, and the two opposing facets sit at center ∓ direction.
    pub fn facets(&self) -> Vec<Cube> {
        let mut facets = Vec::with_capacity(8);
        for (axis, &direction) in STANDARD_BASIS.iter().enumerate() {
            let complement = Realm::standard_complement(axis);
            let facet = Cube::new(self.center, complement);
            facets.push(facet - direction);
            facets.push(facet + direction);
        }
        facets
    }
}
