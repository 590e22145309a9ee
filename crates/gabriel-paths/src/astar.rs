use std::collections::hash_map::Entry;

use crate::error::SearchError;
use crate::search::{AstarSearch, Path, Scratch, SearchOutcome};
use crate::traits::GraphNode;
use crate::NodeId;

impl AstarSearch {
    /// Search `nodes` for a path from `start` to `target` using A*.
    ///
    /// Edge costs use the same metric as the heuristic. The open list is
    /// scanned linearly for the lowest `f`, ties going to the entry that was
    /// inserted first. Once closed, a node is never re-examined.
    ///
    /// Returns [`SearchOutcome::NoPath`] when the target is unreachable, and
    /// an error only for malformed input: duplicate ids, unknown
    /// start/target, or neighbor ids that are not in `nodes`.
    pub fn find_path<N: GraphNode>(
        &mut self,
        nodes: &[N],
        start: NodeId,
        target: NodeId,
    ) -> Result<SearchOutcome, SearchError> {
        self.index_nodes(nodes)?;
        let start_idx = self.lookup(start)?;
        let goal_idx = self.lookup(target)?;

        // Fresh heuristics and bookkeeping for every node.
        let goal_pos = nodes[goal_idx].pos();
        let heuristic = self.heuristic;
        self.scratch.clear();
        self.scratch.extend(
            nodes
                .iter()
                .map(|n| Scratch::new(heuristic.estimate(n.pos(), goal_pos))),
        );

        self.open.clear();
        self.open.push(start_idx);
        self.scratch[start_idx].checked = true;
        self.scratch[start_idx].g = self.start_cost;

        let mut expanded = 0;

        while !self.open.is_empty() {
            let slot = self.lowest_f_slot();
            let ci = self.open[slot];

            if nodes[ci].id() == target {
                let path = self.traceback(nodes, ci, expanded);
                log::debug!(
                    "astar: {} -> {} found, {} nodes, cost {}, {} expanded",
                    start,
                    target,
                    path.len(),
                    path.cost(),
                    expanded
                );
                return Ok(SearchOutcome::Found(path));
            }

            if self.max_expansions.is_some_and(|limit| expanded >= limit) {
                log::debug!("astar: {start} -> {target} interrupted after {expanded} expansions");
                return Ok(SearchOutcome::Interrupted { expanded });
            }

            if !self.scratch[ci].closed {
                self.open.remove(slot);
                self.scratch[ci].closed = true;
                expanded += 1;
            }

            let current_pos = nodes[ci].pos();
            let current_g = self.scratch[ci].g;
            log::trace!(
                "astar: expand {} g={} f={} open={}",
                nodes[ci].id(),
                current_g,
                self.scratch[ci].f(),
                self.open.len()
            );

            for nid in nodes[ci].neighbors() {
                let ni = self.index[nid];
                if self.scratch[ni].closed {
                    continue;
                }
                let tentative_g = current_g + heuristic.estimate(current_pos, nodes[ni].pos());

                let n = &mut self.scratch[ni];
                if n.checked && tentative_g >= n.g {
                    continue;
                }
                n.parent = Some(ci);
                n.g = tentative_g;
                // Already-open nodes keep their slot in the open list.
                if !n.checked {
                    n.checked = true;
                    self.open.push(ni);
                }
            }
        }

        log::debug!("astar: {start} -> {target} no path, {expanded} expanded");
        Ok(SearchOutcome::NoPath)
    }

    /// Rebuild the id → index table, validating the node set.
    fn index_nodes<N: GraphNode>(&mut self, nodes: &[N]) -> Result<(), SearchError> {
        self.index.clear();
        self.index.reserve(nodes.len());
        for (i, n) in nodes.iter().enumerate() {
            match self.index.entry(n.id()) {
                Entry::Occupied(_) => return Err(SearchError::DuplicateId(n.id())),
                Entry::Vacant(e) => {
                    e.insert(i);
                }
            }
        }
        for n in nodes {
            if let Some(&neighbor) = n.neighbors().iter().find(|m| !self.index.contains_key(m)) {
                return Err(SearchError::UnknownNeighbor {
                    node: n.id(),
                    neighbor,
                });
            }
        }
        Ok(())
    }

    fn lookup(&self, id: NodeId) -> Result<usize, SearchError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(SearchError::UnknownNode(id))
    }

    /// Follow parent links from `goal_idx` back to the start.
    fn traceback<N: GraphNode>(&self, nodes: &[N], goal_idx: usize, expanded: usize) -> Path {
        let mut ids = vec![nodes[goal_idx].id()];
        let mut ci = goal_idx;
        while let Some(parent) = self.scratch[ci].parent {
            ids.push(nodes[parent].id());
            ci = parent;
        }
        Path::new(ids, self.scratch[goal_idx].g, expanded)
    }
}

#[cfg(test)]
mod tests {
    use gabriel_core::Point;

    use super::*;
    use crate::heuristic::Heuristic;
    use crate::{Node, build_gabriel};

    /// A node type unrelated to [`Node`], to exercise the trait bound.
    struct Waypoint {
        key: NodeId,
        at: Point,
        links: Vec<NodeId>,
    }

    impl GraphNode for Waypoint {
        fn id(&self) -> NodeId {
            self.key
        }
        fn pos(&self) -> Point {
            self.at
        }
        fn neighbors(&self) -> &[NodeId] {
            &self.links
        }
    }

    fn wp(key: NodeId, x: i32, y: i32, links: &[NodeId]) -> Waypoint {
        Waypoint {
            key,
            at: Point::new(x, y),
            links: links.to_vec(),
        }
    }

    fn chain() -> Vec<Node> {
        let mut nodes: Vec<Node> = [0, 10, 20, 30]
            .iter()
            .enumerate()
            .map(|(i, &x)| Node::new(i as NodeId, Point::new(x, 0)))
            .collect();
        build_gabriel(&mut nodes).unwrap();
        nodes
    }

    #[test]
    fn chain_path_and_cost() {
        let nodes = chain();
        let mut search = AstarSearch::default();
        let path = search.find_path(&nodes, 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 2, 1, 0]);
        assert_eq!(path.iter_from_start().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(path.cost(), 30.0);
        assert_eq!(path.expanded(), 3);
    }

    #[test]
    fn chain_path_manhattan() {
        let nodes = chain();
        let mut search = AstarSearch::new(Heuristic::Manhattan);
        let path = search.find_path(&nodes, 3, 0).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[0, 1, 2, 3]);
        assert_eq!(path.cost(), 30.0);
    }

    #[test]
    fn start_equals_target() {
        let nodes = chain();
        let mut search = AstarSearch::default();
        let path = search.find_path(&nodes, 2, 2).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[2]);
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.expanded(), 0);
    }

    #[test]
    fn disconnected_target_is_no_path() {
        let nodes = vec![
            wp(0, 0, 0, &[1]),
            wp(1, 10, 0, &[0]),
            wp(2, 50, 50, &[]),
        ];
        let mut search = AstarSearch::default();
        assert_eq!(search.find_path(&nodes, 0, 2), Ok(SearchOutcome::NoPath));
        // Searching out of the isolated node fails the same way.
        assert_eq!(search.find_path(&nodes, 2, 0), Ok(SearchOutcome::NoPath));
    }

    #[test]
    fn equal_f_goes_to_first_inserted() {
        // A and B mirror each other across the S–T axis, so f(A) == f(B).
        let graph = |first: NodeId, second: NodeId| {
            vec![
                wp(0, 0, 0, &[first, second]),
                wp(1, 0, 5, &[0, 3]),
                wp(2, 0, -5, &[0, 3]),
                wp(3, 20, 0, &[1, 2]),
            ]
        };
        let mut search = AstarSearch::default();

        let path = search.find_path(&graph(1, 2), 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 1, 0]);

        let path = search.find_path(&graph(2, 1), 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 2, 0]);
    }

    #[test]
    fn prefers_cheaper_route() {
        // 0 -> 1 -> 3 is a long detour, 0 -> 2 -> 3 is nearly straight.
        let nodes = vec![
            wp(0, 0, 0, &[1, 2]),
            wp(1, 5, 40, &[0, 3]),
            wp(2, 10, 1, &[0, 3]),
            wp(3, 20, 0, &[1, 2]),
        ];
        let mut search = AstarSearch::default();
        let path = search.find_path(&nodes, 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 2, 0]);
    }

    #[test]
    fn open_node_is_relaxed_through_cheaper_parent() {
        // A is expanded first and opens X at a high cost; B is expanded
        // before X and lowers X's cost, so X must end up under B.
        let nodes = vec![
            wp(0, 0, 0, &[1, 2]),
            wp(1, 10, 0, &[0, 3]),
            wp(2, 0, 10, &[0, 3]),
            wp(3, 0, 20, &[1, 2, 4]),
            wp(4, 100, 0, &[3]),
        ];
        let mut search = AstarSearch::default();
        let path = search.find_path(&nodes, 0, 4).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[4, 3, 2, 0]);
        let last_leg = Heuristic::Euclidean.estimate(Point::new(0, 20), Point::new(100, 0));
        assert_eq!(path.cost(), 10.0 + 10.0 + last_leg);
        assert_eq!(path.expanded(), 4);
    }

    #[test]
    fn start_cost_offsets_reported_cost() {
        let nodes = chain();
        let mut search = AstarSearch::default().with_start_cost(10.0);
        let path = search.find_path(&nodes, 0, 3).unwrap().into_path().unwrap();
        assert_eq!(path.nodes(), &[3, 2, 1, 0]);
        assert_eq!(path.cost(), 40.0);

        let path = search.find_path(&nodes, 1, 1).unwrap().into_path().unwrap();
        assert_eq!(path.cost(), 10.0);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let nodes = chain();
        let mut search = AstarSearch::default();
        let first = search.find_path(&nodes, 0, 3).unwrap();
        // An unrelated search in between must not leak into the next one.
        search.find_path(&nodes, 3, 1).unwrap();
        let second = search.find_path(&nodes, 0, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn expansion_budget_interrupts() {
        let nodes = chain();
        let mut search = AstarSearch::default().with_max_expansions(1);
        assert_eq!(
            search.find_path(&nodes, 0, 3),
            Ok(SearchOutcome::Interrupted { expanded: 1 })
        );

        // Three expansions are exactly enough to select the target.
        let mut search = AstarSearch::default().with_max_expansions(3);
        assert!(search.find_path(&nodes, 0, 3).unwrap().is_found());
    }

    #[test]
    fn unknown_endpoints_are_errors() {
        let nodes = chain();
        let mut search = AstarSearch::default();
        assert_eq!(search.find_path(&nodes, 7, 0), Err(SearchError::UnknownNode(7)));
        assert_eq!(search.find_path(&nodes, 0, 9), Err(SearchError::UnknownNode(9)));
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let nodes = vec![wp(4, 0, 0, &[]), wp(4, 1, 1, &[])];
        let mut search = AstarSearch::default();
        assert_eq!(search.find_path(&nodes, 4, 4), Err(SearchError::DuplicateId(4)));
    }

    #[test]
    fn dangling_neighbor_is_an_error() {
        let nodes = vec![wp(0, 0, 0, &[1]), wp(1, 3, 0, &[0, 8])];
        let mut search = AstarSearch::default();
        assert_eq!(
            search.find_path(&nodes, 0, 1),
            Err(SearchError::UnknownNeighbor {
                node: 1,
                neighbor: 8
            })
        );
    }
}
