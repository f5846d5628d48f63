//! Polygon offsetting.
//!
//! [`simple::polygon_offset`] miters every vertex and is exact while the
//! result stays simple. [`PolygonOffset2D`] layers detection and repair of
//! local collapses on top and splits self-intersecting results into simple
//! loops, so it stays correct when the offset distance is large relative to
//! the polygon's features.

mod direction;
mod loops;
mod repair;
pub mod simple;

use crate::geometry::Polygon;
use crate::math::polygon_2d::{deduplication, simplify_collinear};
use crate::math::{Tolerance, TOLERANCE};

/// Self-intersection-aware polygon offset.
///
/// Positive `distance` moves the contour inward, negative outward. The
/// result is a set of simple loops in the source winding; an empty set
/// means the offset annihilates the polygon (or the input was unusable).
#[derive(Debug, Clone)]
pub struct PolygonOffset2D {
    polygon: Polygon,
    distance: f64,
    tol: Tolerance,
}

impl PolygonOffset2D {
    #[must_use]
    pub fn new(polygon: Polygon, distance: f64) -> Self {
        Self {
            polygon,
            distance,
            tol: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    /// Runs the offset pipeline.
    ///
    /// Stages: offset every vertex along its validated inward bisector,
    /// flag offset edges that inverted against their source edge, collapse
    /// each invalid run to a miter vertex, drop vertices stranded on the
    /// wrong side of the source contour, then split whatever still
    /// self-intersects into simple loops.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        let tol = &self.tol;
        let poly = simplify_collinear(&deduplication(&self.polygon, tol), tol);
        if poly.len() < 3 || self.distance.abs() < TOLERANCE {
            return Vec::new();
        }

        let Some(directions) = direction::inward_directions(&poly, tol) else {
            return Vec::new();
        };
        let Some(offset) = direction::infill_points(&poly, &directions, self.distance, tol) else {
            return Vec::new();
        };

        let valid = repair::edge_validity(&poly, &offset);
        let Some(repaired) =
            repair::repair(&poly, &offset, &directions, &valid, self.distance, tol)
        else {
            return Vec::new();
        };
        if repaired.len() < 3 {
            return Vec::new();
        }

        let cleaned = deduplication(
            &loops::cleanup(&repaired, &poly, self.distance, tol),
            tol,
        );
        if cleaned.len() < 3 {
            return Vec::new();
        }

        let per_edge = loops::edge_intersections(&cleaned, tol);
        if per_edge.iter().all(Vec::is_empty) {
            return vec![cleaned];
        }
        loops::extract_loops(&poly, &cleaned, &per_edge, tol)
    }
}
