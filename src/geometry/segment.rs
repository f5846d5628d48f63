use crate::error::Result;
use crate::math::{distance_2d, Point2, Vector2};

use super::element::Aabb;
use super::line::Line;

/// A directed line segment from `start` to `end`.
///
/// Degenerate (zero-length) segments are representable; operations that
/// cannot handle them state so in their contracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-length segment.
    pub fn direction(&self) -> Result<Vector2> {
        crate::math::vector_2d::normalize(&(self.end - self.start))
    }

    /// The same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        crate::math::vector_2d::mid(&self.start, &self.end)
    }

    /// General-form line through this segment.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-length segment.
    pub fn line(&self) -> Result<Line> {
        Line::through(&self.start, &self.end)
    }

    /// Nearest point to `p` on the finite segment.
    #[must_use]
    pub fn nearest_point(&self, p: &Point2) -> Point2 {
        distance_2d::nearest_point_on_segment(p, &self.start, &self.end)
    }

    /// Minimum distance from `p` to the finite segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        distance_2d::point_to_segment_dist(p, &self.start, &self.end)
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::of_points(&[self.start, self.end])
    }
}
