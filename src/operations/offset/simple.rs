use crate::math::polygon_2d::{deduplication, signed_area};
use crate::math::vector_2d::{cross, normalize};
use crate::math::{Point2, Tolerance};

use crate::geometry::Polygon;

/// Vertex-normal miter offset for simple polygons.
///
/// The input is deduplicated and canonicalized to counter-clockwise
/// winding, then every vertex moves along its interior-angle bisector by
/// `gap / sin θ` with θ the angle between the adjacent edges; convex and
/// concave vertices flip the sign so `expand` consistently grows the
/// polygon and `!expand` shrinks it. Collinear vertices are dropped.
///
/// Correct only while the result does not self-intersect; large gaps
/// relative to feature size need [`super::PolygonOffset2D`].
#[must_use]
pub fn polygon_offset(polygon: &[Point2], gap: f64, expand: bool, tol: &Tolerance) -> Polygon {
    let mut poly = deduplication(polygon, tol);
    if poly.len() < 3 {
        return Vec::new();
    }
    if signed_area(&poly) < -tol.area {
        poly.reverse();
    }

    let n = poly.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &poly[(i + n - 1) % n];
        let cur = &poly[i];
        let next = &poly[(i + 1) % n];
        let (Ok(u1), Ok(u2)) = (normalize(&(cur - next)), normalize(&(cur - prev))) else {
            continue;
        };
        let sin = cross(&u1, &u2).abs();
        if sin < tol.collinear {
            // Collinear vertex: dropped, no replacement emitted.
            continue;
        }
        let convex = cross(&u1, &u2) > 0.0;
        let sign = if convex == expand { 1.0 } else { -1.0 };
        out.push(cur + (u1 + u2) * (gap / sin) * sign);
    }
    out
}
