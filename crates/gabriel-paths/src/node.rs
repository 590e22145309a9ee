use gabriel_core::Point;

use crate::traits::{GraphNode, GraphNodeMut};

/// Identifier of a node within a node set.
pub type NodeId = u32;

/// A point of the cloud together with its proximity-graph adjacency.
///
/// `neighbors` is empty until a builder fills it in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a node with no neighbors yet.
    pub fn new(id: NodeId, pos: Point) -> Self {
        Self {
            id,
            pos,
            neighbors: Vec::new(),
        }
    }
}

impl GraphNode for Node {
    #[inline]
    fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

impl GraphNodeMut for Node {
    fn set_neighbors(&mut self, neighbors: Vec<NodeId>) {
        self.neighbors = neighbors;
    }
}
