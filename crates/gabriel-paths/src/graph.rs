use gabriel_core::Point;

use crate::error::{GraphError, SearchError};
use crate::gabriel::{self, GabrielBuilder};
use crate::search::{AstarSearch, SearchOutcome};
use crate::{Node, NodeId};

/// A point cloud and its proximity graph.
///
/// Node ids are the positions of the points in the input sequence. The
/// graph remembers whether its neighbor lists have been built and refuses to
/// be searched before that.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    built: bool,
}

impl Graph {
    /// Create an unbuilt graph with one node per point.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let nodes = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Node::new(i as NodeId, p))
            .collect();
        Self {
            nodes,
            built: false,
        }
    }

    /// Compute the neighbor lists of every node.
    ///
    /// On error the graph stays unbuilt.
    pub fn build(&mut self, builder: &GabrielBuilder) -> Result<(), GraphError> {
        self.built = false;
        builder.build(&mut self.nodes)?;
        self.built = true;
        Ok(())
    }

    /// Whether [`build`](Self::build) has completed successfully.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Run `search` from `start` to `target`.
    ///
    /// Returns [`SearchError::GraphNotBuilt`] if the neighbor lists have not
    /// been built yet.
    pub fn find_path(
        &self,
        search: &mut AstarSearch,
        start: NodeId,
        target: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        if !self.built {
            return Err(SearchError::GraphNotBuilt);
        }
        search.find_path(&self.nodes, start, target)
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Undirected edges, each once as `(a, b)` with `a < b`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        gabriel::edges(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gabriel::Symmetry;
    use gabriel_core::GeomError;

    fn line() -> Graph {
        Graph::from_points([0, 10, 20, 30].map(|x| Point::new(x, 0)))
    }

    #[test]
    fn ids_follow_input_order() {
        let g = line();
        assert_eq!(g.len(), 4);
        assert!(!g.is_empty());
        assert_eq!(g.node(2).map(|n| n.pos), Some(Point::new(20, 0)));
        assert!(g.node(4).is_none());
    }

    #[test]
    fn search_before_build_is_rejected() {
        let g = line();
        let mut search = AstarSearch::default();
        assert_eq!(g.find_path(&mut search, 0, 3), Err(SearchError::GraphNotBuilt));
    }

    #[test]
    fn build_then_search() {
        let mut g = line();
        g.build(&GabrielBuilder::default()).unwrap();
        assert!(g.is_built());
        assert_eq!(g.edges(), vec![(0, 1), (1, 2), (2, 3)]);

        let mut search = AstarSearch::default();
        let path = g.find_path(&mut search, 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 2, 1, 0]);
        assert_eq!(path.cost(), 30.0);
    }

    #[test]
    fn failed_build_leaves_graph_unbuilt() {
        let mut g = Graph::from_points([Point::new(1, 1), Point::new(5, 5), Point::new(1, 1)]);
        let p = Point::new(1, 1);
        assert_eq!(
            g.build(&GabrielBuilder::new(Symmetry::Union)),
            Err(GraphError::Geometry(GeomError::DegenerateSegment { a: p, b: p }))
        );
        assert!(!g.is_built());
        let mut search = AstarSearch::default();
        assert_eq!(g.find_path(&mut search, 0, 1), Err(SearchError::GraphNotBuilt));
    }
}
