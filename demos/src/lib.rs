//! Headless Gabriel graph demo.
//!
//! Scatters random points over a canvas, builds their Gabriel graph, picks
//! two random nodes and searches a path between them with A*. Each stage is
//! timed and logged.

pub mod config;

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use gabriel_core::{Point, Range};
use gabriel_paths::{
    AstarSearch, GabrielBuilder, Graph, GraphError, NodeId, SearchError, SearchOutcome,
};
use rand::{Rng, RngExt};

pub use config::{CanvasSize, DemoArgs, DemoConfig, SizeError};

/// Draw up to `count` distinct random points from `area`.
///
/// Coincident points are redrawn, so at most `area.len()` points come back.
pub fn random_points(rng: &mut impl Rng, count: usize, area: Range) -> Vec<Point> {
    let count = count.min(area.len());
    let mut seen = HashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let p = Point::new(
            rng.random_range(area.min.x..area.max.x),
            rng.random_range(area.min.y..area.max.y),
        );
        if seen.insert(p) {
            points.push(p);
        }
    }
    points
}

/// Result of one demo run.
#[derive(Debug, Clone)]
pub struct Report {
    pub graph: Graph,
    pub edges: usize,
    pub start: NodeId,
    pub target: NodeId,
    pub outcome: SearchOutcome,
    pub build_time: Duration,
    pub search_time: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} points, {} edges", self.graph.len(), self.edges)?;
        match &self.outcome {
            SearchOutcome::Found(path) => {
                write!(
                    f,
                    "path {} -> {}: {} nodes, cost {:.2}, {} expanded\n ",
                    self.start,
                    self.target,
                    path.len(),
                    path.cost(),
                    path.expanded()
                )?;
                for id in path.iter_from_start() {
                    if let Some(node) = self.graph.node(id) {
                        write!(f, " {}", node.pos)?;
                    }
                }
                Ok(())
            }
            SearchOutcome::NoPath => {
                write!(f, "no path from {} to {}", self.start, self.target)
            }
            SearchOutcome::Interrupted { expanded } => write!(
                f,
                "search {} -> {} stopped after {} expansions",
                self.start, self.target, expanded
            ),
        }
    }
}

/// Generate, build and search once.
pub fn run(config: &DemoConfig, rng: &mut impl Rng) -> Result<Report, DemoError> {
    let area = config.area();
    if area.is_empty() {
        return Err(DemoError::EmptyArea(area));
    }

    let points = random_points(rng, config.points, area);
    if points.is_empty() {
        return Err(DemoError::NoPoints);
    }
    if points.len() < config.points {
        log::warn!(
            "area {} only fits {} of {} points",
            area,
            points.len(),
            config.points
        );
    }
    let mut graph = Graph::from_points(points);

    let timer = Instant::now();
    graph.build(&GabrielBuilder::new(config.symmetry))?;
    let build_time = timer.elapsed();
    let edges = graph.edges().len();
    log::info!(
        "built gabriel graph: {} nodes, {} edges in {:?}",
        graph.len(),
        edges,
        build_time
    );

    let n = graph.len() as NodeId;
    let start = rng.random_range(0..n);
    let target = rng.random_range(0..n);

    let mut search = AstarSearch::new(config.heuristic);
    if let Some(limit) = config.max_expansions {
        search = search.with_max_expansions(limit);
    }
    let timer = Instant::now();
    let outcome = graph.find_path(&mut search, start, target)?;
    let search_time = timer.elapsed();

    match &outcome {
        SearchOutcome::Found(path) => log::info!(
            "found path {} -> {} ({} nodes) in {:?}",
            start,
            target,
            path.len(),
            search_time
        ),
        SearchOutcome::NoPath => log::info!("no path was found from {start} to {target}"),
        SearchOutcome::Interrupted { expanded } => {
            log::warn!("search gave up after {expanded} expansions")
        }
    }

    Ok(Report {
        graph,
        edges,
        start,
        target,
        outcome,
        build_time,
        search_time,
    })
}

/// Errors that abort a demo run.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    /// The margins leave no room for points.
    EmptyArea(Range),
    /// Zero points were requested.
    NoPoints,
    Graph(GraphError),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArea(r) => write!(f, "canvas area {r} is empty after margins"),
            Self::NoPoints => write!(f, "no points to build a graph from"),
            Self::Graph(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for DemoError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
