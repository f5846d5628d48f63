use crate::math::polygon_2d::point_in_polygon;
use crate::math::vector_2d::{normalize, rotate_cw_90};
use crate::math::{Point2, Tolerance, Vector2};

/// Validated inward unit vector per vertex.
///
/// The candidate is the unit sum of the two adjacent edge directions away
/// from the vertex (the angle bisector); a short probe along it decides
/// whether it points into the polygon, flipping the sign when it does not.
/// Straight vertices, where the bisector sum vanishes, fall back to the
/// outgoing edge's normal before validation.
///
/// Returns `None` when an adjacent edge is degenerate; callers deduplicate
/// first, so that indicates unusable input.
pub(super) fn inward_directions(polygon: &[Point2], tol: &Tolerance) -> Option<Vec<Vector2>> {
    let n = polygon.len();
    let mut directions = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &polygon[(i + n - 1) % n];
        let cur = &polygon[i];
        let next = &polygon[(i + 1) % n];
        let u1 = normalize(&(prev - cur)).ok()?;
        let u2 = normalize(&(next - cur)).ok()?;
        let sum = u1 + u2;
        let mut dir = if sum.norm() < tol.collinear {
            rotate_cw_90(&u2)
        } else {
            sum / sum.norm()
        };
        // Probe inside the wedge the bisector stays in; capped so large
        // polygons do not overshoot narrow features.
        let step = ((prev - cur).norm().min((next - cur).norm()) * 0.5).min(1.0);
        let probe = cur + dir * step;
        if !point_in_polygon(&probe, polygon) {
            dir = -dir;
        }
        directions.push(dir);
    }
    Some(directions)
}

/// Offset vertex candidates along the validated directions.
///
/// The displacement along the unit bisector is `distance / sin(θ/2)` for an
/// included angle θ, which puts the candidate exactly `distance` away from
/// both adjacent edges. Positive distance moves inward, negative outward.
///
/// Returns `None` when a vertex forms a near-zero included angle (a spike
/// whose miter length diverges).
pub(super) fn infill_points(
    polygon: &[Point2],
    directions: &[Vector2],
    distance: f64,
    tol: &Tolerance,
) -> Option<Vec<Point2>> {
    let n = polygon.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = &polygon[(i + n - 1) % n];
        let cur = &polygon[i];
        let next = &polygon[(i + 1) % n];
        let u1 = normalize(&(prev - cur)).ok()?;
        let u2 = normalize(&(next - cur)).ok()?;
        // |u1 - u2| = 2·sin(θ/2) for the included angle θ.
        let sin_half = (u1 - u2).norm() * 0.5;
        if sin_half < tol.collinear {
            return None;
        }
        out.push(cur + directions[i] * (distance / sin_half));
    }
    Some(out)
}
