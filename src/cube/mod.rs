//! Fixed geometry of the unit cube: corner and edge numbering.
//!
//! Both numberings are part of the generated table's contract and must match
//! whatever consumes it.

mod corner;
mod edge;
mod pattern;

pub use corner::{corner_position, CornerIndex, CORNERS, CORNER_COUNT};
pub use edge::{
    edge_between, edge_corners, edge_midpoint_doubled, EdgeIndex, EDGES, EDGE_COUNT,
};
pub use pattern::CornerPattern;
