//! `planar` is a 2D computational geometry kernel: primitive types
//! (point/vector, segment, line, arc, circle, polygon) and the algorithms a
//! CAD-style host application needs on top of them: distance and relation
//! queries, intersection predicates, polygon offsetting (including a
//! self-intersection-resolving variant with loop extraction), corner
//! filleting, and reconstruction of circular arcs from chord chains.
//!
//! The kernel is pure and synchronous: every operation takes value inputs
//! and returns new values. Nothing here blocks, spawns, or performs I/O.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PlanarError, Result};
