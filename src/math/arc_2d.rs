use std::f64::consts::PI;

use super::{Point2, Tolerance, Vector2};

/// Relative position of one circle against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRelation {
    /// Disjoint, each outside the other.
    Separate,
    /// Touching at one point, disjoint interiors.
    ExternallyTangent,
    /// Crossing at two points.
    Intersecting,
    /// Touching at one point, one interior inside the other.
    InternallyTangent,
    /// One circle strictly inside the other, no contact.
    Contained,
}

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Circle through three points: `(center, radius)`.
///
/// Solves the 2×2 system from the perpendicular bisectors of the chords.
/// Returns `None` when the points are collinear (the bisectors are parallel
/// and no finite circle exists).
#[must_use]
pub fn circumcircle(p1: &Point2, p2: &Point2, p3: &Point2, tol: &Tolerance) -> Option<(Point2, f64)> {
    let det = 2.0 * ((p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y));
    if det.abs() < tol.collinear {
        return None;
    }
    let sq1 = p1.coords.norm_squared();
    let sq2 = p2.coords.norm_squared();
    let sq3 = p3.coords.norm_squared();
    let cx = ((sq2 - sq1) * (p3.y - p1.y) - (sq3 - sq1) * (p2.y - p1.y)) / det;
    let cy = ((sq3 - sq1) * (p2.x - p1.x) - (sq2 - sq1) * (p3.x - p1.x)) / det;
    let center = Point2::new(cx, cy);
    Some((center, (p1 - center).norm()))
}

/// Samples an arc into a chord chain, endpoints included.
///
/// The arc starts at `start_angle` radians and sweeps by `sweep` radians,
/// counter-clockwise when positive. `max_step_deg` bounds the angular step;
/// the actual step is shrunk so the samples divide the sweep evenly.
#[must_use]
pub fn arc_points(
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    max_step_deg: f64,
) -> Vec<Point2> {
    if radius <= 0.0 || max_step_deg <= 0.0 {
        return Vec::new();
    }
    let at = |angle: f64| center + Vector2::new(angle.cos(), angle.sin()) * radius;
    if sweep.abs() < super::TOLERANCE {
        return vec![at(start_angle)];
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (sweep.abs() / deg_to_rad(max_step_deg)).ceil().max(1.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    let step = sweep / steps as f64;
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            at(start_angle + step * i as f64)
        })
        .collect()
}

/// Whether `p` lies inside the circle, boundary included within
/// `tol.boundary`.
#[must_use]
pub fn point_in_circle(p: &Point2, center: &Point2, radius: f64, tol: &Tolerance) -> bool {
    (p - center).norm() <= radius + tol.boundary
}

/// Whether `p` lies on the circle within `tol.boundary`.
#[must_use]
pub fn point_on_circle(p: &Point2, center: &Point2, radius: f64, tol: &Tolerance) -> bool {
    ((p - center).norm() - radius).abs() < tol.boundary
}

/// Classifies the relative position of two circles.
#[must_use]
pub fn circle_relation(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
    tol: &Tolerance,
) -> CircleRelation {
    let d = (c1 - c2).norm();
    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if d > sum + tol.boundary {
        CircleRelation::Separate
    } else if (d - sum).abs() <= tol.boundary {
        CircleRelation::ExternallyTangent
    } else if (d - diff).abs() <= tol.boundary {
        CircleRelation::InternallyTangent
    } else if d < diff {
        CircleRelation::Contained
    } else {
        CircleRelation::Intersecting
    }
}

/// Tangent points on a circle from an external point.
///
/// Two points when `p` is outside, one (the point itself) when it lies on
/// the circle, none when it is inside.
#[must_use]
pub fn tangent_points(p: &Point2, center: &Point2, radius: f64, tol: &Tolerance) -> Vec<Point2> {
    let d = (p - center).norm();
    if d < radius - tol.boundary {
        return Vec::new();
    }
    if (d - radius).abs() <= tol.boundary {
        return vec![*p];
    }
    let base = (p.y - center.y).atan2(p.x - center.x);
    let offset = (radius / d).acos();
    let at = |angle: f64| center + Vector2::new(angle.cos(), angle.sin()) * radius;
    vec![at(base - offset), at(base + offset)]
}
