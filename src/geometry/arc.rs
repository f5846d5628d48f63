use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::vector_2d::polar_angle;
use crate::math::{Point2, Tolerance, Vector2, TOLERANCE};

use super::element::Aabb;

/// Traversal direction of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Cw,
    Ccw,
}

/// A circular arc between two points on a circle, traversed in a fixed
/// direction.
///
/// The span angle is always recomputed from the endpoints, center, and
/// direction rather than stored, so it cannot drift out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    pub start_point: Point2,
    pub end_point: Point2,
    pub direction: Direction,
}

impl Arc {
    /// Builds an arc from its center, two endpoints, and a direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the radius is near zero or
    /// the endpoints are not equidistant from the center.
    pub fn from_center_points(
        center: Point2,
        start_point: Point2,
        end_point: Point2,
        direction: Direction,
    ) -> Result<Self> {
        let radius = (start_point - center).norm();
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius is zero".into()).into());
        }
        let end_radius = (end_point - center).norm();
        if (end_radius - radius).abs() > Tolerance::default().point_eq * radius.max(1.0) {
            return Err(GeometryError::Degenerate(
                "arc endpoints are not equidistant from the center".into(),
            )
            .into());
        }
        Ok(Self {
            center,
            radius,
            start_point,
            end_point,
            direction,
        })
    }

    /// Polar angle of the start point about the center, in `[0, 2π)`.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        polar_angle(&self.start_point, &self.center)
    }

    /// Polar angle of the end point about the center, in `[0, 2π)`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        polar_angle(&self.end_point, &self.center)
    }

    /// Unsigned swept angle in radians, recomputed from the endpoints and
    /// direction. Coincident endpoints yield zero.
    #[must_use]
    pub fn span_angle(&self) -> f64 {
        let delta = match self.direction {
            Direction::Ccw => self.end_angle() - self.start_angle(),
            Direction::Cw => self.start_angle() - self.end_angle(),
        };
        let mut span = delta % (2.0 * PI);
        if span < 0.0 {
            span += 2.0 * PI;
        }
        span
    }

    /// Swept angle with direction sign: positive counter-clockwise.
    #[must_use]
    pub fn signed_sweep(&self) -> f64 {
        match self.direction {
            Direction::Ccw => self.span_angle(),
            Direction::Cw => -self.span_angle(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.span_angle()
    }

    /// Point on the arc at normalized parameter `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle() + self.signed_sweep() * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Whether the polar angle `angle` falls within the swept range.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        let delta = match self.direction {
            Direction::Ccw => angle - self.start_angle(),
            Direction::Cw => self.start_angle() - angle,
        };
        let mut delta = delta % (2.0 * PI);
        if delta < -TOLERANCE {
            delta += 2.0 * PI;
        }
        delta <= self.span_angle() + TOLERANCE
    }

    /// Nearest point to `p` on the arc: the radial projection when `p`'s
    /// polar angle falls in the swept range, otherwise the nearer endpoint.
    /// The center itself maps to the start point.
    #[must_use]
    pub fn nearest_point(&self, p: &Point2) -> Point2 {
        let v = p - self.center;
        if v.norm() < TOLERANCE {
            return self.start_point;
        }
        let angle = v.y.atan2(v.x);
        if self.contains_angle(angle) {
            return self.center + v / v.norm() * self.radius;
        }
        if (p - self.start_point).norm() <= (p - self.end_point).norm() {
            self.start_point
        } else {
            self.end_point
        }
    }

    /// Minimum distance from `p` to the arc.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        (p - self.nearest_point(p)).norm()
    }

    /// Tight axis-aligned bounds: the endpoints plus every cardinal point of
    /// the circle the sweep passes through.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let mut pts = vec![self.start_point, self.end_point];
        for quarter in 0..4 {
            let angle = f64::from(quarter) * PI / 2.0;
            if self.contains_angle(angle) {
                pts.push(self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius);
            }
        }
        Aabb::of_points(&pts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn quarter_ccw() -> Arc {
        // Unit quarter arc from (1, 0) to (0, 1), counter-clockwise.
        Arc::from_center_points(
            Point2::origin(),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Direction::Ccw,
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_radii() {
        let bad = Arc::from_center_points(
            Point2::origin(),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 2.0),
            Direction::Ccw,
        );
        assert!(bad.is_err());
        let zero = Arc::from_center_points(
            Point2::origin(),
            Point2::origin(),
            Point2::origin(),
            Direction::Ccw,
        );
        assert!(zero.is_err());
    }

    #[test]
    fn span_recomputed_from_endpoints() {
        let a = quarter_ccw();
        assert_relative_eq!(a.span_angle(), PI / 2.0, epsilon = TOL);
        assert_relative_eq!(a.signed_sweep(), PI / 2.0, epsilon = TOL);
        // Same endpoints traversed clockwise sweep the other three quarters.
        let cw = Arc { direction: Direction::Cw, ..a };
        assert_relative_eq!(cw.span_angle(), 3.0 * PI / 2.0, epsilon = TOL);
        assert_relative_eq!(cw.signed_sweep(), -3.0 * PI / 2.0, epsilon = TOL);
    }

    #[test]
    fn length_and_point_at() {
        let a = quarter_ccw();
        assert_relative_eq!(a.length(), PI / 2.0, epsilon = TOL);
        let m = a.point_at(0.5);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!((m.x - inv_sqrt2).abs() < TOL && (m.y - inv_sqrt2).abs() < TOL);
        assert!((a.point_at(0.0) - a.start_point).norm() < TOL);
        assert!((a.point_at(1.0) - a.end_point).norm() < TOL);
    }

    #[test]
    fn nearest_point_radial_and_endpoint() {
        let a = quarter_ccw();
        // In sweep: radial projection.
        let n = a.nearest_point(&Point2::new(2.0, 2.0));
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!((n.x - inv_sqrt2).abs() < TOL && (n.y - inv_sqrt2).abs() < TOL);
        // Out of sweep: nearer endpoint.
        let n = a.nearest_point(&Point2::new(1.0, -1.0));
        assert!((n - a.start_point).norm() < TOL);
        assert!((a.distance_to(&Point2::new(2.0, 0.0)) - 1.0).abs() < TOL);
    }

    #[test]
    fn bounding_box_includes_cardinal_extreme() {
        // Semicircle over the top: the box must reach y = 1 even though
        // neither endpoint does more than touch y = 0.
        let a = Arc::from_center_points(
            Point2::origin(),
            Point2::new(1.0, 0.0),
            Point2::new(-1.0, 0.0),
            Direction::Ccw,
        )
        .unwrap();
        let bb = a.bounding_box();
        assert!((bb.max.y - 1.0).abs() < TOL);
        assert!(bb.min.y.abs() < TOL);
        assert!((bb.min.x + 1.0).abs() < TOL && (bb.max.x - 1.0).abs() < TOL);
    }
}
