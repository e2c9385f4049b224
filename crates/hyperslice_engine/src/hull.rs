//! Polygon ordering for a planar point cloud
//!
//! The points of one facet intersection are coplanar inside the viewer's
//! realm but arrive in edge-enumeration order. To order them into a simple
//! boundary: subtract the centroid, fit the plane with an SVD of the
//! centered point matrix, project onto the top-2 singular directions, and
//! run a 2D convex hull on that projection. The hull's cyclic order is then
//! applied to the original points.

use nalgebra::DMatrix;

/// Cyclic boundary order of a coplanar 3D point set, as indices into the
/// input
///
/// Returns `None` when the set cannot form a polygon: fewer than 3 points,
/// fewer than 3 hull corners (collinear or isolated touch points), or a
/// point set that is not actually planar within `eps` (a facet lying inside
/// the slicing flat produces one). All of those mean "emit no polygon",
/// not an error.
pub fn planar_order(points: &[[f32; 3]], eps: f32) -> Option<Vec<usize>> {
    if points.len() < 3 {
        return None;
    }

    let n = points.len();
    let mut centroid = [0.0f32; 3];
    for p in points {
        for axis in 0..3 {
            centroid[axis] += p[axis];
        }
    }
    for c in &mut centroid {
        *c /= n as f32;
    }

    let centered = DMatrix::from_fn(n, 3, |i, j| points[i][j] - centroid[j]);
    let svd = centered.clone().svd(false, true);
    let v_t = svd.v_t?;

    // Coplanar data leaves the third singular value near zero; anything
    // larger means the points span a volume and no single polygon exists.
    let scale = svd.singular_values[0].max(1.0);
    if svd.singular_values[2] > eps * scale {
        return None;
    }

    let projected: Vec<[f32; 2]> = (0..n)
        .map(|i| {
            let mut uv = [0.0f32; 2];
            for (k, coord) in uv.iter_mut().enumerate() {
                for j in 0..3 {
                    *coord += centered[(i, j)] * v_t[(k, j)];
                }
            }
            uv
        })
        .collect();

    let hull = convex_hull_indices(&projected);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

/// Andrew's monotone chain over point indices, counter-clockwise, strict
/// (collinear points are dropped)
fn convex_hull_indices(points: &[[f32; 2]]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a][0]
            .total_cmp(&points[b][0])
            .then(points[a][1].total_cmp(&points[b][1]))
    });

    let cross = |o: usize, a: usize, b: usize| -> f32 {
        (points[a][0] - points[o][0]) * (points[b][1] - points[o][1])
            - (points[a][1] - points[o][1]) * (points[b][0] - points[o][0])
    };

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], i) <= 0.0 {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], i) <= 0.0 {
            upper.pop();
        }
        upper.push(i);
    }

    // Endpoints of each chain coincide with the other chain's start
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn signed_area(points: &[[f32; 2]]) -> f32 {
        let n = points.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += points[i][0] * points[j][1] - points[j][0] * points[i][1];
        }
        area * 0.5
    }

    #[test]
    fn test_square_ordering_visits_all_points() {
        // A square in the y/z plane at x = -1, listed in scrambled order
        let points = [
            [-1.0, 1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ];
        let order = planar_order(&points, EPS).unwrap();
        assert_eq!(order.len(), 4);

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3]);

        // Consecutive corners of a square share one coordinate
        for i in 0..4 {
            let a = points[order[i]];
            let b = points[order[(i + 1) % 4]];
            let shared = (1..3).filter(|&axis| a[axis] == b[axis]).count();
            assert_eq!(shared, 1, "corners {:?} and {:?} not adjacent", a, b);
        }
    }

    #[test]
    fn test_hexagon_ordering_is_convex() {
        use std::f32::consts::PI;

        // Hexagon in a tilted plane, scrambled
        let mut points: Vec<[f32; 3]> = (0..6)
            .map(|i| {
                let t = 2.0 * PI * i as f32 / 6.0;
                let (u, v) = (t.cos(), t.sin());
                // plane spanned by (1,0,1)/√2 and (0,1,0)
                [u / 2f32.sqrt(), v, u / 2f32.sqrt()]
            })
            .collect();
        points.swap(0, 3);
        points.swap(1, 5);

        let order = planar_order(&points, EPS).unwrap();
        assert_eq!(order.len(), 6);

        // The ordered projection must have strictly consistent turns
        let hull_2d: Vec<[f32; 2]> = order.iter().map(|&i| [points[i][1], points[i][2]]).collect();
        let area = signed_area(&hull_2d);
        assert!(area.abs() > 1e-3);
        for i in 0..6 {
            let o = hull_2d[i];
            let a = hull_2d[(i + 1) % 6];
            let b = hull_2d[(i + 2) % 6];
            let turn = (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0]);
            assert!(turn * area > 0.0, "inconsistent turn at corner {}", i);
        }
    }

    #[test]
    fn test_fewer_than_three_points_is_no_polygon() {
        assert!(planar_order(&[], EPS).is_none());
        assert!(planar_order(&[[0.0, 0.0, 0.0]], EPS).is_none());
        assert!(planar_order(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], EPS).is_none());
    }

    #[test]
    fn test_collinear_points_give_no_polygon() {
        let points = [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [2.0, 2.0, 0.0],
            [3.0, 3.0, 0.0],
        ];
        assert!(planar_order(&points, EPS).is_none());
    }

    #[test]
    fn test_non_planar_points_rejected() {
        // All 8 corners of a cube span a volume, not a plane
        let mut points = Vec::new();
        for i in 0..8u32 {
            points.push([
                if i & 1 != 0 { 1.0 } else { -1.0 },
                if i & 2 != 0 { 1.0 } else { -1.0 },
                if i & 4 != 0 { 1.0 } else { -1.0 },
            ]);
        }
        assert!(planar_order(&points, EPS).is_none());
    }

    #[test]
    fn test_ordering_is_stable_under_translation() {
        let base = [
            [0.0, 1.0, 1.0],
            [0.0, -1.0, -1.0],
            [0.0, 1.0, -1.0],
            [0.0, -1.0, 1.0],
        ];
        let shifted: Vec<[f32; 3]> = base.iter().map(|p| [p[0] + 7.0, p[1] - 3.0, p[2]]).collect();
        assert_eq!(planar_order(&base, EPS), planar_order(&shifted, EPS));
    }
}
