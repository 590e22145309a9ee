//! Gabriel graph construction and A* search over point clouds.
//!
//! - **Gabriel graph** builder ([`GabrielBuilder`], [`build_gabriel`]):
//!   two points are adjacent iff the circle having them as diameter holds
//!   no other point of the set. Exhaustive O(n³) test.
//! - **A\*** shortest-path search ([`AstarSearch::find_path`]) over any node
//!   type implementing [`GraphNode`], with Euclidean or Manhattan metric.
//! - [`Graph`] ties the two together and rejects searches on unbuilt graphs.
//!
//! Search bookkeeping (g, h, parent, open/closed flags) lives in
//! [`AstarSearch`], not on the nodes, so a node set can be searched any number
//! of times without resetting it.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`GraphNode`] | A* search, edge enumeration |
//! | [`GraphNodeMut`] : [`GraphNode`] | Gabriel graph construction |

mod astar;
mod error;
mod gabriel;
mod graph;
mod heuristic;
mod node;
mod search;
mod traits;

pub use error::{GraphError, SearchError};
pub use gabriel::{GabrielBuilder, Symmetry, build_gabriel, edges};
pub use graph::Graph;
pub use heuristic::Heuristic;
pub use node::{Node, NodeId};
pub use search::{AstarSearch, Path, SearchOutcome};
pub use traits::{GraphNode, GraphNodeMut};
