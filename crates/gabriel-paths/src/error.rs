use std::fmt;

use gabriel_core::GeomError;

use crate::NodeId;

/// Errors that can occur while building a proximity graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share the same id.
    DuplicateId(NodeId),
    /// A geometric predicate failed, e.g. two nodes share a position.
    Geometry(GeomError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "graph: duplicate node id {id}"),
            Self::Geometry(e) => write!(f, "graph: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<GeomError> for GraphError {
    fn from(e: GeomError) -> Self {
        Self::Geometry(e)
    }
}

/// Errors that can occur when a search is started on malformed input.
///
/// Failing to reach the target is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Two nodes share the same id.
    DuplicateId(NodeId),
    /// The start or target id is not part of the node set.
    UnknownNode(NodeId),
    /// A node lists a neighbor that is not part of the node set.
    UnknownNeighbor { node: NodeId, neighbor: NodeId },
    /// The graph was searched before its neighbor lists were built.
    GraphNotBuilt,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "search: duplicate node id {id}"),
            Self::UnknownNode(id) => write!(f, "search: node {id} is not in the node set"),
            Self::UnknownNeighbor { node, neighbor } => write!(
                f,
                "search: node {node} lists neighbor {neighbor}, which is not in the node set"
            ),
            Self::GraphNotBuilt => write!(f, "search: graph neighbors have not been built"),
        }
    }
}

impl std::error::Error for SearchError {}
