use crate::math::Point2;

use super::arc::Arc;
use super::segment::Segment;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb {
    /// Smallest box containing all points. An empty slice yields a point box
    /// at the origin.
    #[must_use]
    pub fn of_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: Point2::origin(),
                max: Point2::origin(),
            };
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// One element of a mixed segment/arc path.
///
/// Segments and arcs share the capability set a path consumer needs;
/// matching on the variant replaces a single struct carrying unused
/// arc-only fields for straight elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    Segment(Segment),
    Arc(Arc),
}

impl PathElement {
    /// Nearest point to `p` on this element.
    #[must_use]
    pub fn nearest_point(&self, p: &Point2) -> Point2 {
        match self {
            Self::Segment(s) => s.nearest_point(p),
            Self::Arc(a) => a.nearest_point(p),
        }
    }

    /// Minimum distance from `p` to this element.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        match self {
            Self::Segment(s) => s.distance_to(p),
            Self::Arc(a) => a.distance_to(p),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Segment(s) => s.length(),
            Self::Arc(a) => a.length(),
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        match self {
            Self::Segment(s) => s.bounding_box(),
            Self::Arc(a) => a.bounding_box(),
        }
    }

    /// Start point in traversal order.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.start,
            Self::Arc(a) => a.start_point,
        }
    }

    /// End point in traversal order.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Segment(s) => s.end,
            Self::Arc(a) => a.end_point,
        }
    }
}
