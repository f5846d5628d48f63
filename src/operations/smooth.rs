//! Corner filleting for polygons.

use crate::geometry::Polygon;
use crate::math::distance_2d::perpendicular_foot;
use crate::math::polygon_2d::deduplication;
use crate::math::vector_2d::{angle_at_vertex, cross, normalize, rotate_point, sweep_angle};
use crate::math::{Point2, Tolerance};

/// Corners flatter than this are left alone; a fillet there would be
/// indistinguishable from the straight edges.
const NEAR_STRAIGHT_DEG: f64 = 175.0;

/// Angular step between sampled fillet points, in degrees.
const SAMPLE_STEP_DEG: f64 = 2.0;

/// Replaces each corner of `polygon` with a sampled circular fillet of the
/// given radius.
///
/// A corner is kept as-is when either adjacent edge is shorter than the
/// radius or the included angle is nearly straight. When the shorter
/// adjacent edge is between one and two radii long the fillet radius is
/// halved so the tangent points stay on their edges. The fillet is emitted
/// as the two tangent points with arc samples every two degrees between
/// them, in traversal order.
#[must_use]
pub fn polygon_smooth(polygon: &[Point2], radius: f64, tol: &Tolerance) -> Polygon {
    let poly = deduplication(polygon, tol);
    let n = poly.len();
    if n < 3 || radius <= 0.0 {
        return poly;
    }

    let mut out = Vec::with_capacity(n * 4);
    for i in 0..n {
        let prev = &poly[(i + n - 1) % n];
        let cur = &poly[i];
        let next = &poly[(i + 1) % n];

        let min_edge = (prev - cur).norm().min((next - cur).norm());
        if min_edge <= radius {
            out.push(*cur);
            continue;
        }
        let eff_radius = if min_edge <= 2.0 * radius {
            radius * 0.5
        } else {
            radius
        };

        let angle = angle_at_vertex(prev, cur, next);
        if angle > NEAR_STRAIGHT_DEG {
            out.push(*cur);
            continue;
        }

        let Some(fillet) = fillet_corner(prev, cur, next, eff_radius, angle) else {
            out.push(*cur);
            continue;
        };
        out.extend(fillet);
    }
    out
}

/// Tangent points and arc samples replacing one corner.
fn fillet_corner(
    prev: &Point2,
    cur: &Point2,
    next: &Point2,
    radius: f64,
    angle_deg: f64,
) -> Option<Vec<Point2>> {
    let u1 = normalize(&(prev - cur)).ok()?;
    let u2 = normalize(&(next - cur)).ok()?;
    let bisector = normalize(&(u1 + u2)).ok()?;

    // Center on the bisector so both edges are tangent at distance `radius`.
    let half = (angle_deg * 0.5).to_radians();
    let center = cur + bisector * (radius / half.sin());
    let foot_in = perpendicular_foot(&center, prev, cur);
    let foot_out = perpendicular_foot(&center, cur, next);

    let sweep = sweep_angle(&foot_in, &foot_out, &center);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let samples = (sweep / SAMPLE_STEP_DEG) as usize;

    let ccw = cross(&(foot_in - center), &(foot_out - center)) > 0.0;
    let mut points = vec![foot_in];
    for k in 1..samples {
        #[allow(clippy::cast_precision_loss)]
        let step = sweep * (k as f64) / (samples as f64);
        let signed = if ccw { step } else { -step };
        points.push(rotate_point(&foot_in, &center, signed));
    }
    points.push(foot_out);
    Some(points)
}
