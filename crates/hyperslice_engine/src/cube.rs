//! Cube: an affine 3D cube embedded in 4-space
//!
//! A cube is a center plus a realm of three directions. Vertices and edges
//! are derived on demand from center + realm, never stored; translating a
//! cube yields a new value.

use hyperslice_math::{Realm, Vec4};

/// An ordered pair of 4D endpoints (a degenerate 2-point segment)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Vec4,
    pub end: Vec4,
}

impl Edge {
    #[inline]
    pub fn new(start: Vec4, end: Vec4) -> Self {
        Self { start, end }
    }

    /// Endpoint difference, end - start
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.end - self.start
    }
}

/// Double a point set along `direction`: the negative copy first, then the
/// positive copy
///
/// Order matters downstream: edge enumeration relies on vertex i and
/// vertex i + 2^(j-1) differing only in the bit introduced at extension
/// step j.
pub fn extend_into_dimension(vertices: &[Vec4], direction: Vec4) -> Vec<Vec4> {
    let mut extended = Vec::with_capacity(vertices.len() * 2);
    extended.extend(vertices.iter().map(|&v| v - direction));
    extended.extend(vertices.iter().map(|&v| v + direction));
    extended
}

/// An affine 3D cube in 4-space: a center and a realm of 3 directions
///
/// Half-width along each direction equals the direction's length; with unit
/// realm rows the cube spans ±1 around its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub center: Vec4,
    pub realm: Realm,
}

impl Cube {
    #[inline]
    pub fn new(center: Vec4, realm: Realm) -> Self {
        Self { center, realm }
    }

    /// The 8 corner points, in deterministic order
    ///
    /// Starting from the single center point, extend once per realm row.
    /// Vertex i then carries realm-row j along bit j of i: bit clear means
    /// the negative copy, bit set the positive one.
    pub fn vertices(&self) -> Vec<Vec4> {
        let mut vertices = vec![self.center];
        for &direction in self.realm.rows() {
            vertices = extend_into_dimension(&vertices, direction);
        }
        vertices
    }

    /// The 12 edges connecting vertices that differ in exactly one
    /// extension bit
    ///
    /// For each extension level j the vertex set splits into blocks of
    /// 2^j; within a block, offset i pairs with offset i + 2^(j-1). This
    /// walks the d-cube adjacency without materializing the combinatorial
    /// graph.
    pub fn edges(&self) -> Vec<Edge> {
        let vertices = self.vertices();
        let mut edges = Vec::with_capacity(12);

        for j in 1..=3usize {
            let half = 1 << (j - 1);
            let block = 1 << j;
            for k in (0..8).step_by(block) {
                for i in 0..half {
                    edges.push(Edge::new(vertices[i + k], vertices[i + k + half]));
                }
            }
        }

        edges
    }
}

impl std::ops::Add<Vec4> for Cube {
    type Output = Self;

    #[inline]
    fn add(self, vector: Vec4) -> Self {
        Self::new(self.center + vector, self.realm)
    }
}

impl std::ops::Sub<Vec4> for Cube {
    type Output = Self;

    #[inline]
    fn sub(self, vector: Vec4) -> Self {
        self + (-vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Cube {
        Cube::new(Vec4::ZERO, Realm::XYZ)
    }

    #[test]
    fn test_extend_into_dimension_orders_negative_first() {
        let points = [Vec4::ZERO];
        let extended = extend_into_dimension(&points, Vec4::X);
        assert_eq!(extended, vec![-Vec4::X, Vec4::X]);
    }

    #[test]
    fn test_extend_into_dimension_doubles() {
        let points = [Vec4::ZERO, Vec4::Y];
        let extended = extend_into_dimension(&points, Vec4::X);
        assert_eq!(extended.len(), 4);
        assert_eq!(extended[0], -Vec4::X);
        assert_eq!(extended[1], Vec4::Y - Vec4::X);
        assert_eq!(extended[2], Vec4::X);
        assert_eq!(extended[3], Vec4::Y + Vec4::X);
    }

    #[test]
    fn test_vertices_count() {
        assert_eq!(unit_cube().vertices().len(), 8);
    }

    #[test]
    fn test_vertices_bit_order() {
        let vertices = unit_cube().vertices();
        // Bit 0 = x, bit 1 = y, bit 2 = z; clear = -1, set = +1
        for (i, v) in vertices.iter().enumerate() {
            let expect = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
            assert_eq!(v.x, expect(0), "vertex {} x", i);
            assert_eq!(v.y, expect(1), "vertex {} y", i);
            assert_eq!(v.z, expect(2), "vertex {} z", i);
            assert_eq!(v.w, 0.0, "vertex {} w", i);
        }
    }

    #[test]
    fn test_vertices_offset_center() {
        let center = Vec4::new(5.0, 0.0, 0.0, 2.0);
        let cube = Cube::new(center, Realm::XYZ);
        for v in cube.vertices() {
            assert_eq!(v.w, 2.0);
            assert!((v.x - 5.0).abs() == 1.0);
        }
    }

    #[test]
    fn test_edges_count() {
        assert_eq!(unit_cube().edges().len(), 12);
    }

    #[test]
    fn test_edges_match_hypercube_adjacency() {
        // Every edge must connect vertices differing in exactly one bit,
        // and each of the 12 bit-adjacent pairs must appear exactly once.
        let cube = unit_cube();
        let vertices = cube.vertices();
        let mut seen = std::collections::HashSet::new();

        for edge in cube.edges() {
            let a = vertices.iter().position(|&v| v == edge.start).unwrap();
            let b = vertices.iter().position(|&v| v == edge.end).unwrap();
            assert_eq!((a ^ b).count_ones(), 1, "edge ({}, {}) not bit-adjacent", a, b);
            assert!(a < b, "lower-index vertex should come first");
            assert!(seen.insert((a, b)), "edge ({}, {}) duplicated", a, b);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_edges_have_uniform_length() {
        for edge in unit_cube().edges() {
            assert!((edge.direction().length() - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_counts_hold_for_any_realm() {
        let realm = Realm::standard_complement(1);
        let cube = Cube::new(Vec4::new(0.3, -1.0, 2.0, 0.5), realm);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.edges().len(), 12);
    }

    #[test]
    fn test_translation_returns_new_cube() {
        let cube = unit_cube();
        let moved = cube + Vec4::W;
        assert_eq!(moved.center, Vec4::W);
        assert_eq!(cube.center, Vec4::ZERO);
        assert_eq!((moved - Vec4::W).center, Vec4::ZERO);
    }
}
