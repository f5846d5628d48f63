use crate::math::intersect_2d::line_line_intersection;
use crate::math::vector_2d::{mid, normalize, rotate_cw_90};
use crate::math::{Point2, Tolerance, Vector2};

/// Per-edge validity of the offset polygon.
///
/// An offset edge that runs against its source edge has locally collapsed
/// or crossed over; the dot product of the two edge vectors goes negative.
pub(super) fn edge_validity(polygon: &[Point2], offset: &[Point2]) -> Vec<bool> {
    let n = polygon.len();
    (0..n)
        .map(|i| {
            let next = (i + 1) % n;
            let src = polygon[next] - polygon[i];
            let off = offset[next] - offset[i];
            src.dot(&off) > 0.0
        })
        .collect()
}

/// Collapses every maximal run of invalid offset edges to one vertex.
///
/// The replacement is the intersection of the infinite lines through the
/// valid offset edges bounding the run. When those lines are parallel (the
/// two sides of a thin feature passing each other), each in-run source edge
/// is shifted by three times the offset gap along its validated normal and
/// intersected against the bounding edges; the midpoint of the last such
/// pair stands in for the miter vertex.
///
/// Returns `None` when every edge is invalid or a run cannot be resolved.
pub(super) fn repair(
    polygon: &[Point2],
    offset: &[Point2],
    directions: &[Vector2],
    valid: &[bool],
    distance: f64,
    tol: &Tolerance,
) -> Option<Vec<Point2>> {
    let n = offset.len();
    if valid.iter().all(|v| *v) {
        return Some(offset.to_vec());
    }
    let start = valid.iter().position(|v| *v)?;

    let mut out = Vec::with_capacity(n);
    let mut idx = start;
    let mut processed = 0;
    while processed < n {
        if valid[idx] {
            // A vertex survives only when both incident edges are valid;
            // otherwise a run replacement already covers it.
            if valid[(idx + n - 1) % n] {
                out.push(offset[idx]);
            }
            idx = (idx + 1) % n;
            processed += 1;
        } else {
            let run_start = idx;
            let mut run_end = idx;
            let mut run_len = 1;
            while !valid[(run_end + 1) % n] {
                run_end = (run_end + 1) % n;
                run_len += 1;
            }
            let back = (run_start + n - 1) % n;
            let fwd = (run_end + 1) % n;
            let vertex = collapse_run(
                polygon, offset, directions, distance, back, run_start, run_end, fwd, tol,
            )?;
            out.push(vertex);
            idx = fwd;
            processed += run_len;
        }
    }
    Some(out)
}

#[allow(clippy::too_many_arguments)]
fn collapse_run(
    polygon: &[Point2],
    offset: &[Point2],
    directions: &[Vector2],
    distance: f64,
    back: usize,
    run_start: usize,
    run_end: usize,
    fwd: usize,
    tol: &Tolerance,
) -> Option<Point2> {
    let n = polygon.len();
    let back_a = &offset[back];
    let back_b = &offset[run_start];
    let fwd_a = &offset[fwd];
    let fwd_b = &offset[(fwd + 1) % n];

    if let Some(p) = line_line_intersection(back_a, back_b, fwd_a, fwd_b, tol) {
        return Some(p);
    }

    // Parallel bounding edges: fall back to the pairwise-offset heuristic.
    let mut p_back = None;
    let mut p_fwd = None;
    let mut j = run_start;
    loop {
        let jn = (j + 1) % n;
        if let Ok(tangent) = normalize(&(polygon[jn] - polygon[j])) {
            let mut normal = rotate_cw_90(&tangent);
            if normal.dot(&directions[j]) < 0.0 {
                normal = -normal;
            }
            let shift = normal * (3.0 * distance);
            let a = polygon[j] + shift;
            let b = polygon[jn] + shift;
            if let Some(p) = line_line_intersection(back_a, back_b, &a, &b, tol) {
                p_back = Some(p);
            }
            if let Some(p) = line_line_intersection(fwd_a, fwd_b, &a, &b, tol) {
                p_fwd = Some(p);
            }
        }
        if j == run_end {
            break;
        }
        j = jn;
    }
    match (p_back, p_fwd) {
        (Some(a), Some(b)) => Some(mid(&a, &b)),
        _ => None,
    }
}
