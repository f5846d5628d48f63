use std::f64::consts::PI;

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn dist(p1: &Point2, p2: &Point2) -> f64 {
    (p1 - p2).norm()
}

/// Returns the midpoint of `a` and `b`.
#[must_use]
pub fn mid(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Dot product of the vectors `origin→sp` and `origin→ep`.
#[must_use]
pub fn dot_about(sp: &Point2, ep: &Point2, origin: &Point2) -> f64 {
    (sp.x - origin.x) * (ep.x - origin.x) + (sp.y - origin.y) * (ep.y - origin.y)
}

/// Cross product of the vectors `origin→sp` and `origin→ep`.
///
/// This is twice the signed area of the triangle `sp-ep-origin`:
/// positive when `ep` lies counter-clockwise from `sp` about `origin`,
/// zero when the three points are collinear.
#[must_use]
pub fn cross_about(sp: &Point2, ep: &Point2, origin: &Point2) -> f64 {
    (sp.x - origin.x) * (ep.y - origin.y) - (ep.x - origin.x) * (sp.y - origin.y)
}

/// Cross product of two raw vectors.
#[must_use]
pub fn cross(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Returns the unit vector of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] when `|v|` is below [`TOLERANCE`];
/// callers must guard degenerate edges before normalizing.
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Unsigned angle in degrees between the rays `origin→p1` and `origin→p2`.
///
/// Always in `[0, 180]`.
#[must_use]
pub fn sweep_angle(p1: &Point2, p2: &Point2, origin: &Point2) -> f64 {
    let mut theta = (p1.y - origin.y).atan2(p1.x - origin.x)
        - (p2.y - origin.y).atan2(p2.x - origin.x);
    if theta > PI {
        theta -= 2.0 * PI;
    }
    if theta < -PI {
        theta += 2.0 * PI;
    }
    (theta * 180.0 / PI).abs()
}

/// Unsigned angle in degrees between two vectors, in `[0, 180]`.
///
/// The cosine is clamped before `acos`, so antiparallel and parallel inputs
/// return exactly 180 and 0 instead of NaN.
#[must_use]
pub fn angle_between(v1: &Vector2, v2: &Vector2) -> f64 {
    let dot = v1.dot(v2);
    let len1 = v1.norm();
    let len2 = v2.norm();
    if dot <= -len1 * len2 {
        return 180.0;
    }
    if dot >= len1 * len2 {
        return 0.0;
    }
    (dot / (len1 * len2)).acos() / PI * 180.0
}

/// Included angle at `b` of the path `a-b-c`, in degrees.
///
/// The three points must not be coincident at `b`.
#[must_use]
pub fn angle_at_vertex(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    angle_between(&(a - b), &(c - b))
}

/// Rotates `p` about `fixed` by `angle_deg` degrees counter-clockwise.
#[must_use]
pub fn rotate_point(p: &Point2, fixed: &Point2, angle_deg: f64) -> Point2 {
    let rad = angle_deg * PI / 180.0;
    let (sin, cos) = rad.sin_cos();
    let dx = p.x - fixed.x;
    let dy = p.y - fixed.y;
    Point2::new(
        fixed.x + dx * cos - dy * sin,
        fixed.y + dx * sin + dy * cos,
    )
}

/// Rotates a vector 90° clockwise about the origin.
#[must_use]
pub fn rotate_cw_90(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Rotates a vector 90° counter-clockwise about the origin.
#[must_use]
pub fn rotate_ccw_90(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Clockwise unit normal of the segment `a→b`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
pub fn perp_cw_unit(a: &Point2, b: &Point2) -> Result<Vector2> {
    Ok(rotate_cw_90(&normalize(&(b - a))?))
}

/// Counter-clockwise unit normal of the segment `a→b`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
pub fn perp_ccw_unit(a: &Point2, b: &Point2) -> Result<Vector2> {
    Ok(-perp_cw_unit(a, b)?)
}

/// Polar angle of `p` about `origin`, normalized into `[0, 2π)`.
#[must_use]
pub fn polar_angle(p: &Point2, origin: &Point2) -> f64 {
    let mut angle = (p.y - origin.y).atan2(p.x - origin.x);
    if angle < 0.0 {
        angle += 2.0 * PI;
    }
    angle
}
