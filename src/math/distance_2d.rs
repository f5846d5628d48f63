use std::f64::consts::PI;

use super::{Point2, Tolerance, TOLERANCE};
use crate::error::{OperationError, Result};

/// Scalar projection parameter of `p` onto the segment `st→et`.
///
/// `r = ((p - st) · (et - st)) / |et - st|²`, so `r = 0` at `st`, `r = 1` at
/// `et`, `r < 0` before the start, `r > 1` past the end, and interior values
/// fall in `(0, 1)`. A degenerate (zero-length) segment yields `r = 0`.
#[must_use]
pub fn relation(p: &Point2, st: &Point2, et: &Point2) -> f64 {
    let d = et - st;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }
    (p - st).dot(&d) / len_sq
}

/// Foot of the perpendicular from `p` onto the infinite line through
/// `st` and `et`, independent of whether it falls within the segment.
#[must_use]
pub fn perpendicular_foot(p: &Point2, st: &Point2, et: &Point2) -> Point2 {
    let r = relation(p, st, et);
    st + (et - st) * r
}

/// Nearest point to `p` on the finite segment `st→et`.
///
/// The projection parameter is clamped to `[0, 1]`, so the result is an
/// endpoint when the perpendicular foot falls outside the segment.
#[must_use]
pub fn nearest_point_on_segment(p: &Point2, st: &Point2, et: &Point2) -> Point2 {
    let r = relation(p, st, et).clamp(0.0, 1.0);
    st + (et - st) * r
}

/// Minimum distance from `p` to the finite segment `st→et`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, st: &Point2, et: &Point2) -> f64 {
    (p - nearest_point_on_segment(p, st, et)).norm()
}

/// Minimum distance from `p` to the infinite line through `st` and `et`.
///
/// Falls back to point distance for a degenerate segment.
#[must_use]
pub fn point_to_line_dist(p: &Point2, st: &Point2, et: &Point2) -> f64 {
    let d = et - st;
    let len = d.norm();
    if len < TOLERANCE {
        return (p - st).norm();
    }
    (d.x * (p.y - st.y) - d.y * (p.x - st.x)).abs() / len
}

/// Whether `p` lies on the finite segment `st→et` within `tol.boundary`.
#[must_use]
pub fn point_on_segment(p: &Point2, st: &Point2, et: &Point2, tol: &Tolerance) -> bool {
    point_to_segment_dist(p, st, et) < tol.boundary
}

/// Index of the segment in `segments` nearest to `p`.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] when `segments` is empty; an
/// empty query set is a caller contract violation, not a geometric edge case.
pub fn nearest_segment(p: &Point2, segments: &[(Point2, Point2)]) -> Result<usize> {
    if segments.is_empty() {
        return Err(OperationError::InvalidInput("empty segment set".into()).into());
    }
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, (st, et)) in segments.iter().enumerate() {
        let d = point_to_segment_dist(p, st, et);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    Ok(best)
}

/// Minimum distance from `p` to a circular arc.
///
/// The arc starts at `start_angle` radians and sweeps by `sweep` radians,
/// counter-clockwise when positive. When the polar angle of `p` about the
/// center falls inside the swept range the distance is radial, otherwise it
/// is the distance to the nearer endpoint.
#[must_use]
pub fn point_to_arc_dist(
    p: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> f64 {
    let v = p - center;
    let angle = v.y.atan2(v.x);
    if angle_in_sweep(angle, start_angle, sweep) {
        return (v.norm() - radius).abs();
    }
    let end_angle = start_angle + sweep;
    let sp = center + super::Vector2::new(start_angle.cos(), start_angle.sin()) * radius;
    let ep = center + super::Vector2::new(end_angle.cos(), end_angle.sin()) * radius;
    (p - sp).norm().min((p - ep).norm())
}

fn angle_in_sweep(angle: f64, start_angle: f64, sweep: f64) -> bool {
    let mut delta = angle - start_angle;
    if sweep >= 0.0 {
        while delta < -TOLERANCE {
            delta += 2.0 * PI;
        }
        delta <= sweep + TOLERANCE
    } else {
        while delta > TOLERANCE {
            delta -= 2.0 * PI;
        }
        delta >= sweep - TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::vector_2d::dist;

    const TOL: f64 = 1e-10;

    // ── relation tests ──

    #[test]
    fn relation_at_endpoints_and_interior() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(4.0, 0.0);
        assert!(relation(&st, &st, &et).abs() < TOL);
        assert!((relation(&et, &st, &et) - 1.0).abs() < TOL);
        assert!((relation(&Point2::new(1.0, 3.0), &st, &et) - 0.25).abs() < TOL);
    }

    #[test]
    fn relation_outside_segment() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(4.0, 0.0);
        assert!(relation(&Point2::new(-2.0, 0.0), &st, &et) < 0.0);
        assert!(relation(&Point2::new(6.0, 0.0), &st, &et) > 1.0);
    }

    #[test]
    fn relation_degenerate_segment() {
        let st = Point2::new(1.0, 1.0);
        assert!(relation(&Point2::new(5.0, 5.0), &st, &st).abs() < TOL);
    }

    // ── foot / nearest-point tests ──

    #[test]
    fn perpendicular_foot_off_segment_stays_on_line() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(2.0, 0.0);
        // The foot of (5, 3) is (5, 0), well past the end of the segment.
        let foot = perpendicular_foot(&Point2::new(5.0, 3.0), &st, &et);
        assert!((foot.x - 5.0).abs() < TOL);
        assert!(foot.y.abs() < TOL);
    }

    #[test]
    fn nearest_point_clamps_to_endpoints() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(2.0, 0.0);
        let n = nearest_point_on_segment(&Point2::new(5.0, 3.0), &st, &et);
        assert!(dist(&n, &et) < TOL);
        let n = nearest_point_on_segment(&Point2::new(-5.0, 3.0), &st, &et);
        assert!(dist(&n, &st) < TOL);
    }

    // ── distance tests ──

    #[test]
    fn segment_dist_matches_foot_when_interior() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(2.0, 0.0);
        let p = Point2::new(1.0, 1.0);
        let d = point_to_segment_dist(&p, &st, &et);
        assert!((d - dist(&p, &perpendicular_foot(&p, &st, &et))).abs() < TOL);
        assert!((d - 1.0).abs() < TOL);
    }

    #[test]
    fn segment_dist_endpoint_cases() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(2.0, 0.0);
        // r < 0: distance to the start point.
        let p = Point2::new(-3.0, 4.0);
        assert!((point_to_segment_dist(&p, &st, &et) - 5.0).abs() < TOL);
        // r > 1: distance to the end point.
        let p = Point2::new(5.0, 4.0);
        assert!((point_to_segment_dist(&p, &st, &et) - 5.0).abs() < TOL);
    }

    #[test]
    fn segment_dist_degenerate() {
        let st = Point2::new(0.0, 0.0);
        let d = point_to_segment_dist(&Point2::new(3.0, 4.0), &st, &st);
        assert!((d - 5.0).abs() < TOL);
    }

    #[test]
    fn line_dist_ignores_segment_bounds() {
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(1.0, 0.0);
        let d = point_to_line_dist(&Point2::new(100.0, 2.0), &st, &et);
        assert!((d - 2.0).abs() < TOL);
    }

    // ── membership and queries ──

    #[test]
    fn point_on_segment_respects_boundary_tolerance() {
        let tol = Tolerance::default();
        let st = Point2::new(0.0, 0.0);
        let et = Point2::new(10.0, 0.0);
        assert!(point_on_segment(&Point2::new(5.0, 0.0), &st, &et, &tol));
        assert!(point_on_segment(&Point2::new(5.0, 1e-9), &st, &et, &tol));
        assert!(!point_on_segment(&Point2::new(5.0, 0.1), &st, &et, &tol));
        assert!(!point_on_segment(&Point2::new(11.0, 0.0), &st, &et, &tol));
    }

    #[test]
    fn nearest_segment_picks_closest() {
        let segments = vec![
            (Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)),
            (Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)),
            (Point2::new(0.0, -5.0), Point2::new(10.0, -5.0)),
        ];
        let idx = nearest_segment(&Point2::new(5.0, 0.0), &segments).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn nearest_segment_empty_input_is_an_error() {
        assert!(nearest_segment(&Point2::new(0.0, 0.0), &[]).is_err());
    }

    #[test]
    fn arc_dist_radial_when_in_sweep() {
        // Upper semicircle of the unit circle; (0, 2) projects radially.
        let d = point_to_arc_dist(&Point2::new(0.0, 2.0), &Point2::new(0.0, 0.0), 1.0, 0.0, PI);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn arc_dist_endpoint_when_outside_sweep() {
        // (0, -2) is below the upper semicircle; nearest endpoints are (±1, 0).
        let d = point_to_arc_dist(&Point2::new(0.0, -2.0), &Point2::new(0.0, 0.0), 1.0, 0.0, PI);
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-6, "d={d}");
    }

    #[test]
    fn arc_dist_clockwise_sweep() {
        // Lower semicircle traversed clockwise from angle 0 to -π.
        let d = point_to_arc_dist(&Point2::new(0.0, -2.0), &Point2::new(0.0, 0.0), 1.0, 0.0, -PI);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }
}
