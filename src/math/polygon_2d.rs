use std::f64::consts::PI;

use super::intersect_2d::segments_intersect;
use super::vector_2d::{normalize, polar_angle};
use super::{Point2, Tolerance, Vector2};

/// Signed shoelace area of a polygon, positive for counter-clockwise winding.
#[must_use]
pub fn signed_area(polygon: &[Point2]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Whether the polygon winds clockwise (negative signed area).
#[must_use]
pub fn is_clockwise(polygon: &[Point2], tol: &Tolerance) -> bool {
    signed_area(polygon) < -tol.area
}

/// Removes consecutive near-duplicate vertices, including the wrap-around
/// pair. Idempotent.
#[must_use]
pub fn deduplication(polygon: &[Point2], tol: &Tolerance) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(polygon.len());
    for p in polygon {
        if out.last().is_none_or(|last| !tol.points_equal(last, p)) {
            out.push(*p);
        }
    }
    while out.len() > 1 {
        let first = out[0];
        let last = out[out.len() - 1];
        if tol.points_equal(&first, &last) {
            out.pop();
        } else {
            break;
        }
    }
    out
}

/// Drops vertices whose adjacent edges are collinear.
///
/// Collinearity is tested on the sine between unit edge vectors, so the
/// check is scale-free. Degenerate edges keep their vertex.
#[must_use]
pub fn simplify_collinear(polygon: &[Point2], tol: &Tolerance) -> Vec<Point2> {
    let n = polygon.len();
    if n < 3 {
        return polygon.to_vec();
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &polygon[(i + n - 1) % n];
        let cur = &polygon[i];
        let next = &polygon[(i + 1) % n];
        let (Ok(v1), Ok(v2)) = (normalize(&(cur - prev)), normalize(&(next - cur))) else {
            out.push(*cur);
            continue;
        };
        if super::vector_2d::cross(&v1, &v2).abs() >= tol.collinear {
            out.push(*cur);
        }
    }
    out
}

/// Parity ray test: whether `p` lies strictly inside the polygon.
///
/// Points on the boundary are ambiguous under this method; use
/// [`point_on_polygon_boundary`] for boundary-exact queries.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (b.x - a.x) * (p.y - a.y) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Whether `p` lies on any polygon edge within `tol.boundary`.
#[must_use]
pub fn point_on_polygon_boundary(p: &Point2, polygon: &[Point2], tol: &Tolerance) -> bool {
    let n = polygon.len();
    if n < 2 {
        return false;
    }
    (0..n).any(|i| {
        super::distance_2d::point_on_segment(p, &polygon[i], &polygon[(i + 1) % n], tol)
    })
}

/// Whether `inner` lies strictly inside `outer`.
///
/// Every vertex of `inner` must be interior and no edge pair may intersect,
/// so boundary-touching polygons do not count as inside.
#[must_use]
pub fn polygon_inside_polygon(inner: &[Point2], outer: &[Point2], tol: &Tolerance) -> bool {
    if inner.len() < 3 || outer.len() < 3 {
        return false;
    }
    if !inner.iter().all(|p| point_in_polygon(p, outer)) {
        return false;
    }
    !edges_intersect(inner, outer, tol)
}

/// Whether two polygons intersect: any crossing edge pair, or one polygon
/// contained in the other.
#[must_use]
pub fn polygons_intersect(a: &[Point2], b: &[Point2], tol: &Tolerance) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    edges_intersect(a, b, tol)
        || a.iter().all(|p| point_in_polygon(p, b))
        || b.iter().all(|p| point_in_polygon(p, a))
}

fn edges_intersect(a: &[Point2], b: &[Point2], tol: &Tolerance) -> bool {
    let na = a.len();
    let nb = b.len();
    for i in 0..na {
        for j in 0..nb {
            if segments_intersect(&a[i], &a[(i + 1) % na], &b[j], &b[(j + 1) % nb], tol) {
                return true;
            }
        }
    }
    false
}

/// Whether the polygon has at least one concave (reflex) vertex.
///
/// Cross-product signs at successive vertices must all agree for a convex
/// polygon; collinear vertices are neutral.
#[must_use]
pub fn is_concave(polygon: &[Point2], tol: &Tolerance) -> bool {
    let poly = deduplication(polygon, tol);
    let n = poly.len();
    if n < 4 {
        return false;
    }
    let mut sign = 0.0_f64;
    for i in 0..n {
        let prev = &poly[(i + n - 1) % n];
        let cur = &poly[i];
        let next = &poly[(i + 1) % n];
        let cross = super::vector_2d::cross_about(prev, next, cur);
        if cross.abs() < tol.area {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return true;
        }
    }
    false
}

/// Vertex centroid (arithmetic mean of the vertices).
#[must_use]
pub fn centroid(polygon: &[Point2]) -> Point2 {
    if polygon.is_empty() {
        return Point2::origin();
    }
    let mut sum = Vector2::zeros();
    for p in polygon {
        sum += p.coords;
    }
    #[allow(clippy::cast_precision_loss)]
    Point2::from(sum / polygon.len() as f64)
}

/// Sorts points counter-clockwise by polar angle about their centroid.
///
/// Ties on angle break on distance from the centroid, nearest first, which
/// keeps the order deterministic for collinear fans.
#[must_use]
pub fn sort_counter_clockwise(points: &[Point2]) -> Vec<Point2> {
    let origin = centroid(points);
    let mut out = points.to_vec();
    out.sort_by(|a, b| {
        polar_angle(a, &origin)
            .total_cmp(&polar_angle(b, &origin))
            .then_with(|| (a - origin).norm().total_cmp(&(b - origin).norm()))
    });
    out
}

/// Translates every vertex by `delta`.
#[must_use]
pub fn translate(polygon: &[Point2], delta: &Vector2) -> Vec<Point2> {
    polygon.iter().map(|p| p + delta).collect()
}

/// Rotates the vertex sequence so the lexicographically smallest `(x, y)`
/// vertex comes first. Winding is unchanged.
#[must_use]
pub fn rotate_to_canonical_start(polygon: &[Point2]) -> Vec<Point2> {
    let Some(start) = (0..polygon.len()).min_by(|&i, &j| {
        polygon[i]
            .x
            .total_cmp(&polygon[j].x)
            .then_with(|| polygon[i].y.total_cmp(&polygon[j].y))
    }) else {
        return Vec::new();
    };
    let mut out = polygon.to_vec();
    out.rotate_left(start);
    out
}

/// Whether `p` lies inside the axis-aligned rectangle spanned by two
/// opposite corners, boundary included within `tol.boundary`.
#[must_use]
pub fn point_in_rectangle(p: &Point2, c1: &Point2, c2: &Point2, tol: &Tolerance) -> bool {
    let eps = tol.boundary;
    p.x >= c1.x.min(c2.x) - eps
        && p.x <= c1.x.max(c2.x) + eps
        && p.y >= c1.y.min(c2.y) - eps
        && p.y <= c1.y.max(c2.y) + eps
}

/// Vertices of a regular `n`-gon inscribed in a circle, counter-clockwise
/// starting at `start_angle` radians. Empty for `n < 3`.
#[must_use]
pub fn regular_polygon_vertices(
    center: &Point2,
    radius: f64,
    n: usize,
    start_angle: f64,
) -> Vec<Point2> {
    if n < 3 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = start_angle + step * i as f64;
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Whether `p` lies inside the regular `n`-gon inscribed in the given
/// circle. Covers the octagon test as `n = 8`.
#[must_use]
pub fn point_in_regular_polygon(
    p: &Point2,
    center: &Point2,
    radius: f64,
    n: usize,
    start_angle: f64,
) -> bool {
    point_in_polygon(p, &regular_polygon_vertices(center, radius, n, start_angle))
}

/// Apothem of a regular `n`-gon inscribed in a circle: the distance from the
/// center to each edge midpoint. Zero for `n < 3`.
#[must_use]
pub fn inscribed_distance(radius: f64, n: usize) -> f64 {
    if n < 3 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let half_step = PI / n as f64;
    radius * half_step.cos()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square10() -> Vec<Point2> {
        vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]
    }

    // ── area and winding ──

    #[test]
    fn signed_area_ccw_positive() {
        let tol = Tolerance::default();
        let sq = square10();
        assert!((signed_area(&sq) - 100.0).abs() < TOL);
        assert!(!is_clockwise(&sq, &tol));
        let mut rev = sq;
        rev.reverse();
        assert!((signed_area(&rev) + 100.0).abs() < TOL);
        assert!(is_clockwise(&rev, &tol));
    }

    #[test]
    fn signed_area_degenerate_is_zero() {
        assert!(signed_area(&[pt(0.0, 0.0), pt(1.0, 1.0)]).abs() < TOL);
    }

    // ── deduplication ──

    #[test]
    fn deduplication_removes_consecutive_and_wraparound() {
        let tol = Tolerance::default();
        let poly = vec![
            pt(0.0, 0.0),
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 10.0),
            pt(10.0, 10.0),
            pt(0.0, 10.0),
            pt(0.0, 0.0),
        ];
        let d = deduplication(&poly, &tol);
        assert_eq!(d, square10());
    }

    #[test]
    fn deduplication_is_idempotent() {
        let tol = Tolerance::default();
        let poly = vec![pt(0.0, 0.0), pt(0.0, 0.0), pt(5.0, 0.0), pt(5.0, 5.0), pt(0.0, 0.0)];
        let once = deduplication(&poly, &tol);
        let twice = deduplication(&once, &tol);
        assert_eq!(once, twice);
    }

    #[test]
    fn simplify_collinear_drops_straight_run() {
        let tol = Tolerance::default();
        let poly = vec![
            pt(0.0, 0.0),
            pt(5.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 10.0),
            pt(0.0, 10.0),
        ];
        let s = simplify_collinear(&poly, &tol);
        assert_eq!(s, square10());
    }

    // ── containment ──

    #[test]
    fn point_in_square() {
        let sq = square10();
        assert!(point_in_polygon(&pt(5.0, 5.0), &sq));
        assert!(!point_in_polygon(&pt(15.0, 5.0), &sq));
        assert!(!point_in_polygon(&pt(-1.0, 5.0), &sq));
    }

    #[test]
    fn boundary_membership() {
        let tol = Tolerance::default();
        let sq = square10();
        assert!(point_on_polygon_boundary(&pt(5.0, 0.0), &sq, &tol));
        assert!(point_on_polygon_boundary(&pt(10.0, 10.0), &sq, &tol));
        assert!(!point_on_polygon_boundary(&pt(5.0, 5.0), &sq, &tol));
    }

    #[test]
    fn polygon_containment() {
        let tol = Tolerance::default();
        let outer = square10();
        let inner = vec![pt(2.0, 2.0), pt(8.0, 2.0), pt(8.0, 8.0), pt(2.0, 8.0)];
        assert!(polygon_inside_polygon(&inner, &outer, &tol));
        assert!(!polygon_inside_polygon(&outer, &inner, &tol));
        // Overlapping but not contained.
        let shifted = translate(&inner, &Vector2::new(7.0, 0.0));
        assert!(!polygon_inside_polygon(&shifted, &outer, &tol));
    }

    #[test]
    fn polygons_intersect_cases() {
        let tol = Tolerance::default();
        let a = square10();
        let b = translate(&a, &Vector2::new(5.0, 5.0));
        assert!(polygons_intersect(&a, &b, &tol));
        let far = translate(&a, &Vector2::new(100.0, 0.0));
        assert!(!polygons_intersect(&a, &far, &tol));
        // Containment without edge crossings still intersects.
        let inner = vec![pt(2.0, 2.0), pt(8.0, 2.0), pt(8.0, 8.0), pt(2.0, 8.0)];
        assert!(polygons_intersect(&a, &inner, &tol));
    }

    // ── shape classification ──

    #[test]
    fn concavity_detection() {
        let tol = Tolerance::default();
        assert!(!is_concave(&square10(), &tol));
        let notch = vec![
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 10.0),
            pt(5.0, 3.0),
            pt(0.0, 10.0),
        ];
        assert!(is_concave(&notch, &tol));
    }

    // ── ordering helpers ──

    #[test]
    fn sort_counter_clockwise_recovers_square() {
        let tol = Tolerance::default();
        let scrambled = vec![pt(10.0, 10.0), pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 0.0)];
        let sorted = sort_counter_clockwise(&scrambled);
        assert!(!is_clockwise(&sorted, &tol));
        assert!((signed_area(&sorted) - 100.0).abs() < TOL);
    }

    #[test]
    fn canonical_start_is_rotation_invariant() {
        let sq = square10();
        let mut rotated = sq.clone();
        rotated.rotate_left(2);
        assert_eq!(rotate_to_canonical_start(&sq), rotate_to_canonical_start(&rotated));
    }

    // ── rectangle / regular polygon ──

    #[test]
    fn rectangle_membership_any_corner_order() {
        let tol = Tolerance::default();
        let c1 = pt(10.0, 10.0);
        let c2 = pt(0.0, 0.0);
        assert!(point_in_rectangle(&pt(5.0, 5.0), &c1, &c2, &tol));
        assert!(point_in_rectangle(&pt(0.0, 5.0), &c1, &c2, &tol));
        assert!(!point_in_rectangle(&pt(11.0, 5.0), &c1, &c2, &tol));
    }

    #[test]
    fn regular_octagon_membership() {
        let center = pt(0.0, 0.0);
        // Octagon with a flat facing +x (start angle π/8): the apothem along
        // +x is 10·cos(π/8) ≈ 9.24, so 9.9 is inside the circle but outside
        // the octagon.
        let start = PI / 8.0;
        assert!(point_in_regular_polygon(&pt(0.0, 0.0), &center, 10.0, 8, start));
        assert!(point_in_regular_polygon(&pt(9.0, 0.0), &center, 10.0, 8, start));
        assert!(!point_in_regular_polygon(&pt(9.9, 0.0), &center, 10.0, 8, start));
    }

    #[test]
    fn inscribed_distance_of_hexagon() {
        // Apothem of a unit hexagon is √3/2.
        let d = inscribed_distance(1.0, 6);
        assert!((d - 3.0_f64.sqrt() / 2.0).abs() < TOL);
    }

    #[test]
    fn regular_polygon_vertices_on_circle() {
        let verts = regular_polygon_vertices(&pt(1.0, 2.0), 3.0, 5, 0.3);
        assert_eq!(verts.len(), 5);
        for v in &verts {
            assert!(((v - pt(1.0, 2.0)).norm() - 3.0).abs() < TOL);
        }
    }
}
