use std::collections::HashMap;

use crate::heuristic::Heuristic;
use crate::NodeId;

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// A path found by [`AstarSearch::find_path`].
///
/// Nodes are stored from the target back to the start, both included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: f32,
    expanded: usize,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: f32, expanded: usize) -> Self {
        Self {
            nodes,
            cost,
            expanded,
        }
    }

    /// Node ids in target → start order.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Node ids in start → target order.
    pub fn iter_from_start(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes.iter().rev().copied()
    }

    /// Id of the node the search started from.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Id of the node the search was looking for.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.nodes[0]
    }

    /// Accumulated edge cost from start to target.
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Number of nodes closed before the target was selected.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of nodes on the path. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a path holds at least its start node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The target was reached.
    Found(Path),
    /// The open list ran dry; the target is not reachable from the start.
    NoPath,
    /// The expansion budget ran out before the target was selected.
    Interrupted { expanded: usize },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only the path.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// Per-search scratch
// ---------------------------------------------------------------------------

/// Search bookkeeping for one node, indexed like the node slice.
#[derive(Clone, Debug)]
pub(crate) struct Scratch {
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) parent: Option<usize>,
    /// Has ever been placed on the open list.
    pub(crate) checked: bool,
    pub(crate) closed: bool,
}

impl Scratch {
    pub(crate) fn new(h: f32) -> Self {
        Self {
            g: 0.0,
            h,
            parent: None,
            checked: false,
            closed: false,
        }
    }

    #[inline]
    pub(crate) fn f(&self) -> f32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// AstarSearch
// ---------------------------------------------------------------------------

/// A* engine over any slice of [`GraphNode`](crate::GraphNode)s.
///
/// `AstarSearch` owns the scratch table, the open list and the id index so
/// that repeated queries reuse their allocations. All bookkeeping is
/// rebuilt at the start of every call; nothing carries over between
/// searches.
#[derive(Debug, Clone, Default)]
pub struct AstarSearch {
    pub(crate) heuristic: Heuristic,
    pub(crate) max_expansions: Option<usize>,
    pub(crate) start_cost: f32,
    pub(crate) scratch: Vec<Scratch>,
    pub(crate) open: Vec<usize>,
    pub(crate) index: HashMap<NodeId, usize>,
}

impl AstarSearch {
    /// Create an engine using `heuristic` for estimates and edge costs.
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }

    /// Stop a search once `limit` nodes have been closed without reaching
    /// the target.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Seed the start node with cost `g` instead of 0.
    ///
    /// Every reported path cost then includes this baseline.
    pub fn with_start_cost(mut self, g: f32) -> Self {
        self.start_cost = g;
        self
    }

    #[inline]
    pub fn start_cost(&self) -> f32 {
        self.start_cost
    }

    /// The active heuristic.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Switch heuristic for subsequent searches.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// The expansion budget, if any.
    #[inline]
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Position in the open list of the entry with the lowest `f`.
    ///
    /// Linear scan keeping the first strictly smaller value, so among equal
    /// `f` the earliest-inserted entry wins.
    pub(crate) fn lowest_f_slot(&self) -> usize {
        let mut best = 0;
        let mut best_f = self.scratch[self.open[0]].f();
        for (slot, &idx) in self.open.iter().enumerate().skip(1) {
            let f = self.scratch[idx].f();
            if f < best_f {
                best = slot;
                best_f = f;
            }
        }
        best
    }
}
