use crate::math::{polygon_2d, Point2, Tolerance, Vector2};

/// An ordered vertex sequence with no closing duplicate of the first point.
pub type Polygon = Vec<Point2>;

/// A polygon with zero or more holes.
///
/// Outer boundary and holes wind in opposite directions by convention;
/// callers must be consistent about which winding is which.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonWithHoles {
    pub outer: Polygon,
    pub inner: Vec<Polygon>,
}

impl PolygonWithHoles {
    #[must_use]
    pub fn new(outer: Polygon) -> Self {
        Self {
            outer,
            inner: Vec::new(),
        }
    }

    /// Translates the outer boundary and every hole uniformly.
    pub fn update_pos(&mut self, delta: &Vector2) {
        for p in &mut self.outer {
            *p += delta;
        }
        for hole in &mut self.inner {
            for p in hole {
                *p += delta;
            }
        }
    }

    /// Enclosed area: the outer ring's area minus the holes'.
    #[must_use]
    pub fn area(&self) -> f64 {
        let outer = polygon_2d::signed_area(&self.outer).abs();
        let holes: f64 = self
            .inner
            .iter()
            .map(|h| polygon_2d::signed_area(h).abs())
            .sum();
        outer - holes
    }

    /// Whether `p` lies inside the outer boundary and outside every hole.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        polygon_2d::point_in_polygon(p, &self.outer)
            && !self.inner.iter().any(|h| polygon_2d::point_in_polygon(p, h))
    }

    /// Whether `p` lies on the outer boundary or any hole boundary.
    #[must_use]
    pub fn on_boundary(&self, p: &Point2, tol: &Tolerance) -> bool {
        polygon_2d::point_on_polygon_boundary(p, &self.outer, tol)
            || self
                .inner
                .iter()
                .any(|h| polygon_2d::point_on_polygon_boundary(p, h, tol))
    }
}
