use gabriel_core::Point;

use crate::NodeId;

/// Minimal searchable-node interface: an id, a position and neighbor ids.
///
/// Nodes refer to their neighbors by id, never by ownership. The id is the
/// only key the search uses to compare nodes.
pub trait GraphNode {
    /// Identifier, unique within the node set being built or searched.
    fn id(&self) -> NodeId;

    /// Position of the node in the plane.
    fn pos(&self) -> Point;

    /// Ids of the adjacent nodes, in the order the builder produced them.
    fn neighbors(&self) -> &[NodeId];
}

/// Graph node whose adjacency can be (re)assigned by a graph builder.
pub trait GraphNodeMut: GraphNode {
    /// Replace the neighbor list.
    fn set_neighbors(&mut self, neighbors: Vec<NodeId>);
}
