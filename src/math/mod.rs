pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance guarding divisions and near-zero tests.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance policy passed into predicates.
///
/// Each field covers one class of comparison; historical code mixed several
/// ad hoc epsilons for these, so they are configuration values here.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Equality of points that originate from computed geometry.
    pub point_eq: f64,
    /// Distance threshold for on-boundary / on-segment membership.
    pub boundary: f64,
    /// Collinearity, parallelism, and near-zero-sine guards.
    pub collinear: f64,
    /// Signed-area orientation sign threshold.
    pub area: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            point_eq: 1e-8,
            boundary: 1e-8,
            collinear: 1e-10,
            area: 1e-10,
        }
    }
}

impl Tolerance {
    /// Epsilon-tolerant point equality: both coordinate deltas below
    /// `point_eq`.
    #[must_use]
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a.x - b.x).abs() < self.point_eq && (a.y - b.y).abs() < self.point_eq
    }
}
