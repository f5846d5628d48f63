use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Tolerance, Vector2};

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(
                GeometryError::Degenerate("circle radius must be non-negative".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Point on the circle at the given polar angle in radians.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Whether `p` lies inside the circle, boundary included.
    #[must_use]
    pub fn contains(&self, p: &Point2, tol: &Tolerance) -> bool {
        crate::math::arc_2d::point_in_circle(p, &self.center, self.radius, tol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn negative_radius_rejected() {
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
        assert!(Circle::new(Point2::origin(), 0.0).is_ok());
    }

    #[test]
    fn measures() {
        let c = Circle::new(Point2::origin(), 2.0).unwrap();
        assert_relative_eq!(c.circumference(), 4.0 * PI, epsilon = TOL);
        assert_relative_eq!(c.area(), 4.0 * PI, epsilon = TOL);
    }

    #[test]
    fn point_at_quarters() {
        let c = Circle::new(Point2::new(1.0, 1.0), 1.0).unwrap();
        let p = c.point_at(PI / 2.0);
        assert!((p.x - 1.0).abs() < TOL && (p.y - 2.0).abs() < TOL);
    }

    #[test]
    fn containment() {
        let tol = Tolerance::default();
        let c = Circle::new(Point2::origin(), 1.0).unwrap();
        assert!(c.contains(&Point2::new(0.5, 0.5), &tol));
        assert!(c.contains(&Point2::new(1.0, 0.0), &tol));
        assert!(!c.contains(&Point2::new(1.5, 0.0), &tol));
    }
}
