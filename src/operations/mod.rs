pub mod arc_chain;
pub mod offset;
pub mod smooth;

pub use arc_chain::{vertex_arc_relation, VertexArcRelation};
pub use offset::PolygonOffset2D;
pub use smooth::polygon_smooth;
