use crate::error::{GeometryError, Result};
use crate::math::{intersect_2d, Point2, Tolerance, TOLERANCE};

/// An infinite line in general form `a·x + b·y + c = 0`.
///
/// Built from two distinct points as `a = y2 - y1`, `b = x1 - x2`,
/// `c = x2·y1 - x1·y2`. The degenerate case `a = b = 0` is rejected at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through two distinct points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the points coincide.
    pub fn through(p1: &Point2, p2: &Point2) -> Result<Self> {
        let (a, b, c) = intersect_2d::general_form(p1, p2);
        if a.abs() < TOLERANCE && b.abs() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("line through coincident points".into()).into(),
            );
        }
        Ok(Self { a, b, c })
    }

    /// Signed evaluation of the line equation at `p`.
    ///
    /// The sign tells which half-plane `p` lies in; zero means on the line.
    #[must_use]
    pub fn eval(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Perpendicular distance from `p` to the line.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        self.eval(p).abs() / self.a.hypot(self.b)
    }

    /// Whether `p` lies on the line within `tol.boundary`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tol: &Tolerance) -> bool {
        self.distance_to(p) < tol.boundary
    }

    /// Intersection with another line, `None` when parallel or coincident.
    #[must_use]
    pub fn intersection(&self, other: &Self, tol: &Tolerance) -> Option<Point2> {
        let denom = self.a * other.b - other.a * self.b;
        if denom.abs() < tol.collinear {
            return None;
        }
        Some(Point2::new(
            (self.b * other.c - other.b * self.c) / denom,
            (other.a * self.c - self.a * other.c) / denom,
        ))
    }
}
