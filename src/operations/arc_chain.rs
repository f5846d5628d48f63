//! Arc reconstruction from chord chains.
//!
//! Imported contours often carry circular arcs flattened into runs of short
//! chords. The classifiers here decide, per vertex, whether the surrounding
//! vertices look like such a run, so callers can rebuild arcs from the flat
//! polygon.

use crate::math::arc_2d::circumcircle;
use crate::math::vector_2d::{angle_at_vertex, cross};
use crate::math::{Point2, Tolerance};

/// Included angles flatter than this qualify as chord joints.
const NEAR_STRAIGHT_DEG: f64 = 176.0;

/// How a polygon vertex relates to the arc-like chord runs around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexArcRelation {
    /// Interior vertex of a chord run.
    OnArcMid,
    /// First vertex of a chord run; only the following vertices qualify.
    OnArcStart,
    /// Last vertex of a chord run; only the preceding vertices qualify.
    OnArcEnd,
    /// Joint where one chord run ends and another begins.
    BetweenTwoArcs,
    /// No arc-like structure on either side.
    NotOnArc,
}

/// Longest chord an arc of radius `r` may be flattened into: the chord
/// subtending two degrees.
fn max_chord(r: f64) -> f64 {
    2.0 * r * f64::to_radians(1.0).sin()
}

/// Whether three consecutive points read as two chords of one arc.
///
/// The included angle at `p2` must be nearly straight, which rejects real
/// corners and leaves both flat runs and fine chord chains; the chord bound
/// against the fitted circumradius then rejects coarse polygons whose wide
/// angle is incidental. Collinear triples fit no circle and never qualify.
#[must_use]
pub fn chord_triple(p1: &Point2, p2: &Point2, p3: &Point2, tol: &Tolerance) -> bool {
    if angle_at_vertex(p1, p2, p3) < NEAR_STRAIGHT_DEG {
        return false;
    }
    let Some((_, r)) = circumcircle(p1, p2, p3, tol) else {
        return false;
    };
    let bound = max_chord(r);
    (p2 - p1).norm() < bound && (p3 - p2).norm() < bound
}

/// Whether the vertex at `index` is an interior point of a chord run.
///
/// Requires two neighbors on each side: the turn direction must agree at the
/// vertex and both neighbors, all three included angles must sit in the
/// nearly-straight band, and the two incident chords must stay below the
/// chord bound of the smaller circle fitted to either side.
#[must_use]
pub fn is_consecutive_chords(polygon: &[Point2], index: usize, tol: &Tolerance) -> bool {
    let n = polygon.len();
    if n < 5 {
        return false;
    }
    let at = |k: usize| &polygon[k % n];
    let (im2, im1, i, ip1, ip2) = (index + n - 2, index + n - 1, index + n, index + n + 1, index + n + 2);

    let turn = |k: usize| cross(&(at(k) - at(k + n - 1)), &(at(k + 1) - at(k)));
    let reference = turn(i);
    if reference.abs() < tol.collinear {
        return false;
    }
    for k in [im1, ip1] {
        let t = turn(k);
        if t.abs() < tol.collinear || (t > 0.0) != (reference > 0.0) {
            return false;
        }
    }

    for k in [im1, i, ip1] {
        if angle_at_vertex(at(k + n - 1), at(k), at(k + 1)) < NEAR_STRAIGHT_DEG {
            return false;
        }
    }

    let Some((_, r1)) = circumcircle(at(im2), at(im1), at(i), tol) else {
        return false;
    };
    let Some((_, r2)) = circumcircle(at(i), at(ip1), at(ip2), tol) else {
        return false;
    };
    let bound = max_chord(r1.min(r2));
    (at(i) - at(im1)).norm() < bound && (at(ip1) - at(i)).norm() < bound
}

/// Classifies the vertex at `index` against the chord runs around it.
///
/// An interior run vertex is [`VertexArcRelation::OnArcMid`]. A vertex that
/// fails the interior test itself is classified by which neighbors still
/// pass: only the next one means a run starts here, only the previous one
/// means a run ends here, both mean two runs meet here.
#[must_use]
pub fn vertex_arc_relation(polygon: &[Point2], index: usize, tol: &Tolerance) -> VertexArcRelation {
    if is_consecutive_chords(polygon, index, tol) {
        return VertexArcRelation::OnArcMid;
    }
    let n = polygon.len();
    if n < 5 {
        return VertexArcRelation::NotOnArc;
    }
    let before = is_consecutive_chords(polygon, (index + n - 1) % n, tol);
    let after = is_consecutive_chords(polygon, (index + 1) % n, tol);
    match (before, after) {
        (true, true) => VertexArcRelation::BetweenTwoArcs,
        (false, true) => VertexArcRelation::OnArcStart,
        (true, false) => VertexArcRelation::OnArcEnd,
        (false, false) => VertexArcRelation::NotOnArc,
    }
}
