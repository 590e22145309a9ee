use gabriel_core::{Point, distance, manhattan};

/// Metric used both as the A* estimate and as the edge cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// `|dx| + |dy|`, more commonly used in games.
    Manhattan,
}

impl Heuristic {
    /// Distance between `from` and `to` under this metric.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f32 {
        match self {
            Self::Euclidean => distance(from, to) as f32,
            Self::Manhattan => manhattan(from, to) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_euclidean() {
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
    }

    #[test]
    fn estimates() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert_eq!(Heuristic::Manhattan.estimate(b, b), 0.0);
    }

    #[test]
    fn estimates_across_the_whole_coordinate_range() {
        let a = Point::new(-2_000_000_000, 1_500_000_000);
        let b = Point::new(2_000_000_000, -1_500_000_000);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7e9);
        assert_eq!(Heuristic::Euclidean.estimate(a, b), 5e9);
    }
}
