pub mod arc;
pub mod circle;
pub mod convert;
pub mod element;
pub mod line;
pub mod polygon;
pub mod segment;

pub use arc::{Arc, Direction};
pub use circle::Circle;
pub use element::{Aabb, PathElement};
pub use line::Line;
pub use polygon::{Polygon, PolygonWithHoles};
pub use segment::Segment;
