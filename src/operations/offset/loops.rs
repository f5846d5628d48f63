use crate::math::intersect_2d::segment_segment_intersection;
use crate::math::polygon_2d::{is_clockwise, point_in_polygon, point_on_polygon_boundary};
use crate::math::{Point2, Tolerance};

/// Drops repaired vertices that ended up on the wrong side of the source
/// contour: outside it when insetting, inside it when outsetting. Boundary
/// points survive either way.
pub(super) fn cleanup(
    points: &[Point2],
    source: &[Point2],
    distance: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    points
        .iter()
        .copied()
        .filter(|p| {
            let inside = point_in_polygon(p, source);
            let on = point_on_polygon_boundary(p, source, tol);
            if distance > 0.0 {
                inside || on
            } else {
                !inside || on
            }
        })
        .collect()
}

/// Pairwise self-intersections of the loop's edges, grouped per edge and
/// sorted by distance from the edge's start vertex.
///
/// Adjacent edges (sharing a vertex, including the wrap pair) are skipped,
/// and hits landing on an edge endpoint are excluded; every genuine crossing
/// therefore appears in exactly two edge lists.
pub(super) fn edge_intersections(points: &[Point2], tol: &Tolerance) -> Vec<Vec<Point2>> {
    let n = points.len();
    let mut per_edge: Vec<Vec<Point2>> = vec![Vec::new(); n];
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in 0..n {
            let gap = (n + j - i) % n;
            if gap <= 1 || gap == n - 1 {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            let Some(p) = segment_segment_intersection(a0, a1, b0, b1, tol) else {
                continue;
            };
            if tol.points_equal(&p, a0)
                || tol.points_equal(&p, a1)
                || tol.points_equal(&p, b0)
                || tol.points_equal(&p, b1)
            {
                continue;
            }
            if !per_edge[i].iter().any(|q| tol.points_equal(q, &p)) {
                per_edge[i].push(p);
            }
        }
        let start = *a0;
        per_edge[i].sort_by(|p, q| (p - start).norm().total_cmp(&(q - start).norm()));
    }
    per_edge
}

/// Splits a self-intersecting loop into simple loops matching the source
/// orientation.
///
/// The vertex list is expanded with every intersection point inserted along
/// its two edges, then walked with an explicit branch stack: crossing an
/// intersection point jumps to its twin occurrence and queues the bypassed
/// continuation as a future loop start. Loops that wind against the source
/// or have fewer than three vertices are discarded. Revisiting a point
/// mid-walk means the configuration cannot be resolved into simple loops;
/// the whole extraction then yields nothing.
pub(super) fn extract_loops(
    source: &[Point2],
    points: &[Point2],
    per_edge: &[Vec<Point2>],
    tol: &Tolerance,
) -> Vec<Vec<Point2>> {
    let mut all: Vec<Point2> = Vec::new();
    let mut is_crossing: Vec<bool> = Vec::new();
    for (i, p) in points.iter().enumerate() {
        all.push(*p);
        is_crossing.push(false);
        for q in &per_edge[i] {
            all.push(*q);
            is_crossing.push(true);
        }
    }

    let m = all.len();
    let Some(first) = is_crossing.iter().position(|x| !x) else {
        return Vec::new();
    };
    let source_cw = is_clockwise(source, tol);
    let mut visited = vec![false; m];
    let mut stack = vec![first];
    let mut loops = Vec::new();

    while let Some(start_idx) = stack.pop() {
        if visited[start_idx] {
            continue;
        }
        visited[start_idx] = true;
        let start = all[start_idx];
        let mut current = vec![start];
        let mut idx = (start_idx + 1) % m;
        loop {
            let p = all[idx];
            if tol.points_equal(&p, &start) {
                break;
            }
            if visited[idx] {
                return Vec::new();
            }
            if is_crossing[idx] {
                // Queue the continuation along this edge, then cross over
                // to the twin occurrence on the other edge.
                stack.push(idx);
                let Some(twin) = (0..m)
                    .find(|&k| k != idx && !visited[k] && tol.points_equal(&all[k], &p))
                else {
                    return Vec::new();
                };
                visited[twin] = true;
                current.push(all[twin]);
                idx = (twin + 1) % m;
            } else {
                visited[idx] = true;
                current.push(p);
                idx = (idx + 1) % m;
            }
        }
        if current.len() >= 3 && is_clockwise(&current, tol) == source_cw {
            loops.push(current);
        }
    }
    loops
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-8;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn cleanup_filters_by_offset_sign() {
        let tol = Tolerance::default();
        let square = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        let pts = vec![pt(5.0, 5.0), pt(15.0, 5.0), pt(10.0, 5.0)];
        // Inset keeps interior and boundary points.
        let inset = cleanup(&pts, &square, 1.0, &tol);
        assert_eq!(inset, vec![pt(5.0, 5.0), pt(10.0, 5.0)]);
        // Outset keeps exterior and boundary points.
        let outset = cleanup(&pts, &square, -1.0, &tol);
        assert_eq!(outset, vec![pt(15.0, 5.0), pt(10.0, 5.0)]);
    }

    #[test]
    fn edge_intersections_of_a_bowtie() {
        let tol = Tolerance::default();
        // Self-crossing quad: edges 0-1 and 2-3 cross at (5, 5).
        let bowtie = vec![pt(0.0, 0.0), pt(10.0, 10.0), pt(10.0, 0.0), pt(0.0, 10.0)];
        let per_edge = edge_intersections(&bowtie, &tol);
        assert_eq!(per_edge[0].len(), 1);
        assert!(per_edge[1].is_empty());
        assert_eq!(per_edge[2].len(), 1);
        assert!(per_edge[3].is_empty());
        assert!((per_edge[0][0] - pt(5.0, 5.0)).norm() < TOL);
    }

    #[test]
    fn adjacent_edges_and_shared_endpoints_excluded() {
        let tol = Tolerance::default();
        let square = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        let per_edge = edge_intersections(&square, &tol);
        assert!(per_edge.iter().all(Vec::is_empty));
    }

    #[test]
    fn intersections_sorted_from_edge_start() {
        let tol = Tolerance::default();
        // A comb-like loop whose long bottom edge is crossed twice.
        let poly = vec![
            pt(0.0, 2.0),
            pt(20.0, 2.0),
            pt(20.0, 8.0),
            pt(14.0, 8.0),
            pt(14.0, 1.0),
            pt(8.0, 1.0),
            pt(8.0, 8.0),
            pt(0.0, 8.0),
        ];
        let per_edge = edge_intersections(&poly, &tol);
        assert_eq!(per_edge[0].len(), 2);
        assert!((per_edge[0][0] - pt(8.0, 2.0)).norm() < TOL);
        assert!((per_edge[0][1] - pt(14.0, 2.0)).norm() < TOL);
    }

    #[test]
    fn extraction_splits_pinched_loop_in_two() {
        let tol = Tolerance::default();
        // Same pinched loop: the dip below y = 2 between x = 8 and x = 14
        // winds backwards, so extraction keeps the two upright lobes.
        let source = vec![pt(0.0, 0.0), pt(22.0, 0.0), pt(22.0, 10.0), pt(0.0, 10.0)];
        let poly = vec![
            pt(2.0, 2.0),
            pt(20.0, 2.0),
            pt(20.0, 8.0),
            pt(14.0, 8.0),
            pt(14.0, 1.0),
            pt(8.0, 1.0),
            pt(8.0, 8.0),
            pt(2.0, 8.0),
        ];
        let per_edge = edge_intersections(&poly, &tol);
        let loops = extract_loops(&source, &poly, &per_edge, &tol);
        assert_eq!(loops.len(), 2, "loops={loops:?}");
        let mut sizes: Vec<usize> = loops.iter().map(Vec::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![4, 4]);
        // Both lobes sit at or above y = 2.
        for l in &loops {
            for p in l {
                assert!(p.y >= 2.0 - TOL);
            }
        }
    }

    #[test]
    fn clean_loop_passes_unsplit() {
        let tol = Tolerance::default();
        let square = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        let per_edge = edge_intersections(&square, &tol);
        let loops = extract_loops(&square, &square, &per_edge, &tol);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }
}
