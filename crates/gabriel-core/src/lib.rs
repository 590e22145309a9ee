//! **gabriel-core**: geometry primitives for proximity-graph construction.
//!
//! This crate provides the integer [`Point`] and [`Range`] types used across
//! the workspace, plus the metrics and the diametral-circle predicate that
//! the Gabriel graph builder in `gabriel-paths` is defined in terms of.

pub mod distance;
pub mod geom;

pub use distance::{GeomError, circle_contains, distance, manhattan};
pub use geom::{Point, Range};
