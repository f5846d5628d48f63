use crate::math::Point2;

use super::polygon::{Polygon, PolygonWithHoles};

/// Kernel-to-screen coordinate conversion.
///
/// The kernel is Cartesian with y up; screen space has y down. Conversion
/// negates y rather than relabeling axes, so winding flips: a
/// counter-clockwise polygon in kernel space reads clockwise on screen.
#[must_use]
pub fn point_to_screen(p: &Point2) -> Point2 {
    Point2::new(p.x, -p.y)
}

/// Screen-to-kernel conversion; the inverse of [`point_to_screen`].
#[must_use]
pub fn point_from_screen(p: &Point2) -> Point2 {
    Point2::new(p.x, -p.y)
}

#[must_use]
pub fn polygon_to_screen(polygon: &[Point2]) -> Polygon {
    polygon.iter().map(point_to_screen).collect()
}

#[must_use]
pub fn polygon_from_screen(polygon: &[Point2]) -> Polygon {
    polygon.iter().map(point_from_screen).collect()
}

#[must_use]
pub fn polygon_with_holes_to_screen(p: &PolygonWithHoles) -> PolygonWithHoles {
    PolygonWithHoles {
        outer: polygon_to_screen(&p.outer),
        inner: p.inner.iter().map(|h| polygon_to_screen(h)).collect(),
    }
}
