//! Demo configuration and command-line parsing.

use std::fmt;
use std::str::FromStr;

use clap::Parser;
use gabriel_core::Range;
use gabriel_paths::{Heuristic, Symmetry};

/// Scatter random points, build their Gabriel graph and search it with A*.
///
/// Logging is controlled with RUST_LOG (default: info).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gabriel-demo")]
#[command(version)]
#[command(about = "Headless Gabriel graph and A* demo")]
pub struct DemoArgs {
    /// Number of random points
    #[arg(short, long, default_value_t = 250)]
    pub points: usize,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_name = "WxH")]
    pub size: CanvasSize,

    /// RNG seed (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use the Manhattan metric instead of Euclidean
    #[arg(long)]
    pub manhattan: bool,

    /// Make the neighbor relation symmetric
    #[arg(long)]
    pub symmetric: bool,

    /// Give up after this many expanded nodes
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

/// Canvas dimensions given as `WIDTHxHEIGHT`, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl FromStr for CanvasSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SizeError(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(invalid)?;
        let width: i32 = w.parse().map_err(|_| invalid())?;
        let height: i32 = h.parse().map_err(|_| invalid())?;
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

/// A `--size` value that is not two positive integers joined by `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeError(String);

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected WIDTHxHEIGHT with positive sides, got '{}'", self.0)
    }
}

impl std::error::Error for SizeError {}

/// Parameters of one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// How many points to scatter.
    pub points: usize,
    pub width: i32,
    pub height: i32,
    /// Gap kept free on the top and left edges.
    pub min_margin: i32,
    /// Gap kept free on the bottom and right edges.
    pub max_margin: i32,
    pub heuristic: Heuristic,
    pub symmetry: Symmetry,
    /// Fixed seed for reproducible runs; random when `None`.
    pub seed: Option<u64>,
    pub max_expansions: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            points: 250,
            width: 800,
            height: 600,
            min_margin: 10,
            max_margin: 20,
            heuristic: Heuristic::Euclidean,
            symmetry: Symmetry::Directed,
            seed: None,
            max_expansions: None,
        }
    }
}

impl From<DemoArgs> for DemoConfig {
    fn from(args: DemoArgs) -> Self {
        Self {
            points: args.points,
            width: args.size.width,
            height: args.size.height,
            heuristic: if args.manhattan {
                Heuristic::Manhattan
            } else {
                Heuristic::Euclidean
            },
            symmetry: if args.symmetric {
                Symmetry::Union
            } else {
                Symmetry::Directed
            },
            seed: args.seed,
            max_expansions: args.max_expansions,
            ..Self::default()
        }
    }
}

impl DemoConfig {
    /// The part of the canvas points are drawn from.
    pub fn area(&self) -> Range {
        Range::new(0, 0, self.width, self.height).shift(
            self.min_margin,
            self.min_margin,
            -self.max_margin,
            -self.max_margin,
        )
    }
}
