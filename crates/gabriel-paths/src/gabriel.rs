use std::collections::HashSet;

use gabriel_core::{GeomError, Point, circle_contains};

use crate::error::GraphError;
use crate::traits::{GraphNode, GraphNodeMut};
use crate::NodeId;

/// How the directed per-pair Gabriel test is turned into neighbor lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    /// Each node keeps exactly the candidates that passed the test evaluated
    /// from its own side. Under floating-point rounding near a circle
    /// boundary, A may list B while B does not list A.
    #[default]
    Directed,
    /// After the directed pass, whenever A lists B, B lists A as well.
    Union,
}

/// Exhaustive Gabriel graph builder.
///
/// Two nodes are adjacent iff no third node of the set lies within or on the
/// circle having the segment between them as its diameter. Every candidate
/// pair is tested against every other node, O(n³) overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GabrielBuilder {
    pub symmetry: Symmetry,
}

impl GabrielBuilder {
    /// Create a builder with the given symmetry policy.
    pub fn new(symmetry: Symmetry) -> Self {
        Self { symmetry }
    }

    /// Assign the Gabriel neighbors of every node in place.
    ///
    /// Neighbor lists come out in ascending input order. Nothing but the
    /// neighbor lists is touched, and no node is modified when the input is
    /// rejected (duplicate ids, or two nodes at the same position).
    pub fn build<N: GraphNodeMut>(&self, nodes: &mut [N]) -> Result<(), GraphError> {
        check_unique_ids(nodes)?;
        check_distinct_positions(nodes)?;

        let positions: Vec<Point> = nodes.iter().map(GraphNode::pos).collect();
        let mut lists = (0..positions.len())
            .map(|i| gabriel_neighbors(&positions, i))
            .collect::<Result<Vec<_>, _>>()?;

        if self.symmetry == Symmetry::Union {
            symmetrize(&mut lists);
        }

        let ids: Vec<NodeId> = nodes.iter().map(GraphNode::id).collect();
        let mut adjacencies = 0;
        for (node, list) in nodes.iter_mut().zip(lists) {
            adjacencies += list.len();
            node.set_neighbors(list.into_iter().map(|j| ids[j]).collect());
        }

        log::debug!(
            "gabriel: {} nodes, {} directed adjacencies ({:?})",
            nodes.len(),
            adjacencies,
            self.symmetry
        );
        Ok(())
    }
}

/// Build the Gabriel graph of `nodes` with the default ([`Symmetry::Directed`])
/// policy.
pub fn build_gabriel<N: GraphNodeMut>(nodes: &mut [N]) -> Result<(), GraphError> {
    GabrielBuilder::default().build(nodes)
}

/// Undirected edge set of a built graph.
///
/// Each edge appears once as `(a, b)` with `a < b`; the list is sorted.
pub fn edges<N: GraphNode>(nodes: &[N]) -> Vec<(NodeId, NodeId)> {
    let mut out: Vec<(NodeId, NodeId)> = nodes
        .iter()
        .flat_map(|n| {
            let id = n.id();
            n.neighbors().iter().map(move |&m| (id.min(m), id.max(m)))
        })
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Indices of the nodes passing the Gabriel test against node `i`.
fn gabriel_neighbors(positions: &[Point], i: usize) -> Result<Vec<usize>, GeomError> {
    let mut out = Vec::new();
    'candidates: for y in 0..positions.len() {
        if y == i {
            continue;
        }
        for j in 0..positions.len() {
            if j == i || j == y {
                continue;
            }
            if circle_contains(positions[i], positions[y], positions[j])? {
                continue 'candidates;
            }
        }
        out.push(y);
    }
    Ok(out)
}

fn symmetrize(lists: &mut [Vec<usize>]) {
    for i in 0..lists.len() {
        for k in 0..lists[i].len() {
            let j = lists[i][k];
            if !lists[j].contains(&i) {
                lists[j].push(i);
            }
        }
    }
    for list in lists.iter_mut() {
        list.sort_unstable();
    }
}

fn check_unique_ids<N: GraphNode>(nodes: &[N]) -> Result<(), GraphError> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for n in nodes {
        if !seen.insert(n.id()) {
            return Err(GraphError::DuplicateId(n.id()));
        }
    }
    Ok(())
}

fn check_distinct_positions<N: GraphNode>(nodes: &[N]) -> Result<(), GraphError> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for n in nodes {
        let p = n.pos();
        if !seen.insert(p) {
            return Err(GeomError::DegenerateSegment { a: p, b: p }.into());
        }
    }
    Ok(())
}
