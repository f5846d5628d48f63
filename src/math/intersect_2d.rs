use super::distance_2d::point_on_segment;
use super::vector_2d::cross_about;
use super::{Point2, Tolerance};

/// Coefficients `(a, b, c)` of the general-form line `a·x + b·y + c = 0`
/// through two points.
///
/// Degenerate (`a = b = 0`) when the points coincide; callers must not build
/// a line from coincident points.
#[must_use]
pub fn general_form(p1: &Point2, p2: &Point2) -> (f64, f64, f64) {
    let a = p2.y - p1.y;
    let b = p1.x - p2.x;
    let c = p2.x * p1.y - p1.x * p2.y;
    (a, b, c)
}

/// Intersection of the two infinite lines through `p1,p2` and `p3,p4`.
///
/// Solves the general-form system by Cramer's rule. Returns `None` when the
/// lines are parallel or coincident (denominator below `tol.collinear`).
#[must_use]
pub fn line_line_intersection(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    tol: &Tolerance,
) -> Option<Point2> {
    let (a1, b1, c1) = general_form(p1, p2);
    let (a2, b2, c2) = general_form(p3, p4);
    let denom = a1 * b2 - a2 * b1;
    if denom.abs() < tol.collinear {
        return None;
    }
    Some(Point2::new(
        (b1 * c2 - b2 * c1) / denom,
        (a2 * c1 - a1 * c2) / denom,
    ))
}

/// Whether the finite segments `u_st→u_et` and `v_st→v_et` intersect,
/// including touching endpoints.
///
/// Bounding-box rejection followed by an orientation straddle test on both
/// segments. Collinear overlap counts as intersecting.
#[must_use]
pub fn segments_intersect(
    u_st: &Point2,
    u_et: &Point2,
    v_st: &Point2,
    v_et: &Point2,
    tol: &Tolerance,
) -> bool {
    let eps = tol.boundary;
    if u_st.x.max(u_et.x) < v_st.x.min(v_et.x) - eps
        || v_st.x.max(v_et.x) < u_st.x.min(u_et.x) - eps
        || u_st.y.max(u_et.y) < v_st.y.min(v_et.y) - eps
        || v_st.y.max(v_et.y) < u_st.y.min(u_et.y) - eps
    {
        return false;
    }
    let d1 = cross_about(u_et, v_st, u_st);
    let d2 = cross_about(u_et, v_et, u_st);
    let d3 = cross_about(v_et, u_st, v_st);
    let d4 = cross_about(v_et, u_et, v_st);
    d1 * d2 <= tol.collinear && d3 * d4 <= tol.collinear
}

/// Intersection point of two finite segments, `None` when they do not cross.
///
/// The candidate point comes from the infinite-line solution and is then
/// verified against both segments' projection parameters, so parallel,
/// coincident, and disjoint pairs all return `None`.
#[must_use]
pub fn segment_segment_intersection(
    u_st: &Point2,
    u_et: &Point2,
    v_st: &Point2,
    v_et: &Point2,
    tol: &Tolerance,
) -> Option<Point2> {
    let p = line_line_intersection(u_st, u_et, v_st, v_et, tol)?;
    if point_on_segment(&p, u_st, u_et, tol) && point_on_segment(&p, v_st, v_et, tol) {
        Some(p)
    } else {
        None
    }
}

/// Intersection of the finite segment `st→et` with the infinite line through
/// `lp1, lp2`, `None` when parallel or outside the segment.
#[must_use]
pub fn segment_line_intersection(
    st: &Point2,
    et: &Point2,
    lp1: &Point2,
    lp2: &Point2,
    tol: &Tolerance,
) -> Option<Point2> {
    let p = line_line_intersection(st, et, lp1, lp2, tol)?;
    if point_on_segment(&p, st, et, tol) {
        Some(p)
    } else {
        None
    }
}

/// Whether `a` and `b` lie strictly on the same side of the line `st→et`.
///
/// A point on the line (within `tol.collinear` of the cross product) counts
/// as neither side.
#[must_use]
pub fn points_on_same_side(a: &Point2, b: &Point2, st: &Point2, et: &Point2, tol: &Tolerance) -> bool {
    let ca = cross_about(et, a, st);
    let cb = cross_about(et, b, st);
    ca > tol.collinear && cb > tol.collinear || ca < -tol.collinear && cb < -tol.collinear
}

/// Intersections of the infinite line through `p1,p2` with a circle.
///
/// Zero points when the line misses, one at tangency, two otherwise.
#[must_use]
pub fn line_circle_intersection(
    p1: &Point2,
    p2: &Point2,
    center: &Point2,
    radius: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    let d = p2 - p1;
    let len = d.norm();
    if len < tol.collinear {
        return Vec::new();
    }
    let dir = d / len;
    let foot = super::distance_2d::perpendicular_foot(center, p1, p2);
    let gap = (center - foot).norm();
    if gap > radius + tol.boundary {
        return Vec::new();
    }
    let half_sq = radius * radius - gap * gap;
    if half_sq < tol.boundary * tol.boundary {
        return vec![foot];
    }
    let half = half_sq.sqrt();
    vec![foot - dir * half, foot + dir * half]
}

/// Intersections of the finite segment `st→et` with a circle.
#[must_use]
pub fn segment_circle_intersection(
    st: &Point2,
    et: &Point2,
    center: &Point2,
    radius: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    line_circle_intersection(st, et, center, radius, tol)
        .into_iter()
        .filter(|p| point_on_segment(p, st, et, tol))
        .collect()
}

/// All intersection points of the segment `st→et` with a polygon's edges.
///
/// Near-duplicate hits at shared polygon vertices are collapsed to one point.
#[must_use]
pub fn segment_polygon_intersections(
    st: &Point2,
    et: &Point2,
    polygon: &[Point2],
    tol: &Tolerance,
) -> Vec<Point2> {
    let mut hits: Vec<Point2> = Vec::new();
    let n = polygon.len();
    if n < 2 {
        return hits;
    }
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if let Some(p) = segment_segment_intersection(st, et, a, b, tol) {
            if !hits.iter().any(|q| tol.points_equal(q, &p)) {
                hits.push(p);
            }
        }
    }
    hits
}
