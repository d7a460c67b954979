use itertools::{Itertools, MinMaxResult};
#[cfg(feature = "write_stats")]
use serde::Serialize;

use crate::{Influence, InfluenceGrid};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "write_stats", derive(Serialize))]
pub struct StatsResult {
    pub stamped_sources: usize,
    pub reused_sources: usize,
    pub skipped_neutral_sources: usize,
    pub skipped_invalid_sources: usize,
    pub stamped_cells: usize,
    pub own_cells: usize,
    pub enemy_cells: usize,
    pub min_influence: Influence,
    pub max_influence: Influence,
    pub total_influence: Influence,
}

/// Aggregates of the last refresh, reset at the start of each one.
#[derive(Default)]
pub struct Stats {
    stamped_sources: usize,
    reused_sources: usize,
    skipped_neutral_sources: usize,
    skipped_invalid_sources: usize,
    stamped_cells: usize,
    own_cells: usize,
    enemy_cells: usize,
    min_influence: Influence,
    max_influence: Influence,
    total_influence: Influence,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get_result(&self) -> StatsResult {
        StatsResult {
            stamped_sources: self.stamped_sources,
            reused_sources: self.reused_sources,
            skipped_neutral_sources: self.skipped_neutral_sources,
            skipped_invalid_sources: self.skipped_invalid_sources,
            stamped_cells: self.stamped_cells,
            own_cells: self.own_cells,
            enemy_cells: self.enemy_cells,
            min_influence: self.min_influence,
            max_influence: self.max_influence,
            total_influence: self.total_influence,
        }
    }

    pub fn add_stamped_source(&mut self, stamped_cells: usize) {
        self.stamped_sources += 1;
        self.stamped_cells += stamped_cells;
    }

    pub fn add_reused_source(&mut self) {
        self.reused_sources += 1;
    }

    pub fn add_skipped_neutral_source(&mut self) {
        self.skipped_neutral_sources += 1;
    }

    pub fn add_skipped_invalid_source(&mut self) {
        self.skipped_invalid_sources += 1;
    }

    pub fn collect_grid(&mut self, grid: &InfluenceGrid, neutral_band: f32) {
        let cells = grid.cells();
        self.own_cells = cells.iter().filter(|v| **v > neutral_band).count();
        self.enemy_cells = cells.iter().filter(|v| **v < -neutral_band).count();
        self.total_influence = cells.iter().sum();
        let (min, max) = match cells.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        self.min_influence = min;
        self.max_influence = max;
    }
}

#[cfg(test)]
mod tests {
    use crate::Vec2i;

    use super::*;

    #[test]
    fn collect_grid() {
        let mut grid = InfluenceGrid::new(3, 3, 1.0).unwrap();
        *grid.at_mut(Vec2i::new(0, 0)) = 5.0;
        *grid.at_mut(Vec2i::new(1, 0)) = 0.0005;
        *grid.at_mut(Vec2i::new(2, 2)) = -3.0;
        let mut stats = Stats::new();
        stats.collect_grid(&grid, 0.001);
        let result = stats.get_result();
        assert_eq!(result.own_cells, 1);
        assert_eq!(result.enemy_cells, 1);
        assert_eq!(result.min_influence, -3.0);
        assert_eq!(result.max_influence, 5.0);
        assert!((result.total_influence - 2.0005).abs() < 1e-5);
    }

    #[test]
    fn reset_clears_counters() {
        let mut stats = Stats::new();
        stats.add_stamped_source(12);
        stats.add_stamped_source(3);
        stats.add_skipped_neutral_source();
        stats.add_skipped_invalid_source();
        stats.add_reused_source();
        let result = stats.get_result();
        assert_eq!(result.stamped_sources, 2);
        assert_eq!(result.stamped_cells, 15);
        assert_eq!(result.skipped_neutral_sources, 1);
        assert_eq!(result.skipped_invalid_sources, 1);
        assert_eq!(result.reused_sources, 1);
        stats.reset();
        assert_eq!(stats.get_result(), Stats::new().get_result());
    }
}
