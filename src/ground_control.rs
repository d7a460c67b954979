use std::collections::{HashMap, HashSet};

use crate::{
    Config,
    EntityRegistry,
    EntityTypeProvider,
    GridError,
    Influence,
    InfluenceGrid,
    Positionable,
    Relation,
    resolve_signature,
    Signature,
    stamp_gradient,
    Stats,
    StatsResult,
    TrackedEntity,
    UpdateMode,
    Vec2f,
};

/// `Updating` only holds inside `update`, which borrows the engine mutably, so callers
/// always observe `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundControlState {
    /// Grid holds the last completed refresh.
    Idle,
    /// Grid is being cleared or restamped.
    Updating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stamp {
    center: Vec2f,
    signature: Signature,
}

/// Per-tick ground control influence map.
///
/// Positive values mean the controlling player projects more force onto a cell than its
/// opponents, negative values the opposite. The grid is refreshed by `update` and stays
/// unchanged between refreshes.
pub struct GroundControl<P: EntityTypeProvider> {
    my_id: i32,
    config: Config,
    entity_properties: P,
    grid: InfluenceGrid,
    stats: Stats,
    state: GroundControlState,
    completed_updates: usize,
    stamps: HashMap<i32, Stamp>,
}

impl<P: EntityTypeProvider> GroundControl<P> {
    pub fn new(my_id: i32, map_width: f32, map_height: f32, config: Config, entity_properties: P) -> Result<Self, GridError> {
        let grid = InfluenceGrid::from_map_size(map_width, map_height, config.cell_size)?;
        tracing::info!(
            my_id,
            width = grid.width(),
            height = grid.height(),
            cell_size = grid.cell_size(),
            "ground control grid allocated"
        );
        #[cfg(feature = "print_config")]
        tracing::info!(config = %serde_json::to_string(&config).unwrap_or_default(), "ground control config");
        Ok(Self {
            my_id,
            config,
            entity_properties,
            grid,
            stats: Stats::new(),
            state: GroundControlState::Idle,
            completed_updates: 0,
            stamps: HashMap::new(),
        })
    }

    pub fn my_id(&self) -> i32 {
        self.my_id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> GroundControlState {
        self.state
    }

    /// True once at least one refresh has completed.
    pub fn is_ready(&self) -> bool {
        self.completed_updates > 0
    }

    pub fn grid(&self) -> &InfluenceGrid {
        &self.grid
    }

    pub fn stats(&self) -> StatsResult {
        self.stats.get_result()
    }

    /// Center the entity was last stamped at. Only tracked in incremental mode.
    pub fn last_position(&self, entity_id: i32) -> Option<Vec2f> {
        self.stamps.get(&entity_id).map(|v| v.center)
    }

    pub fn influence_at(&self, position: Vec2f) -> Influence {
        self.grid.get_from_world(position)
    }

    pub fn controller_at(&self, position: Vec2f) -> Relation {
        let influence = self.influence_at(position);
        if influence > self.config.neutral_band {
            Relation::Own
        } else if influence < -self.config.neutral_band {
            Relation::Enemy
        } else {
            Relation::Neutral
        }
    }

    /// Refreshes the grid from the registry when `tick` falls on the update period.
    ///
    /// The first call always refreshes. Returns whether the grid was refreshed.
    pub fn update<R: EntityRegistry + ?Sized>(&mut self, tick: i32, registry: &R) -> bool {
        if self.is_ready() && tick.rem_euclid(self.config.update_period.max(1)) != 0 {
            return false;
        }
        self.state = GroundControlState::Updating;
        self.stats.reset();
        match self.config.update_mode {
            UpdateMode::Full => self.restamp_all(registry),
            UpdateMode::Incremental => self.restamp_changed(registry),
        }
        self.stats.collect_grid(&self.grid, self.config.neutral_band);
        self.state = GroundControlState::Idle;
        self.completed_updates += 1;
        let stats = self.stats.get_result();
        tracing::debug!(
            tick,
            stamped = stats.stamped_sources,
            reused = stats.reused_sources,
            neutral = stats.skipped_neutral_sources,
            invalid = stats.skipped_invalid_sources,
            "ground control updated"
        );
        true
    }

    fn restamp_all<R: EntityRegistry + ?Sized>(&mut self, registry: &R) {
        self.grid.clear();
        for entity in registry.entities() {
            if let Some(stamp) = self.resolve(entity) {
                let stamped_cells = stamp_gradient(&mut self.grid, stamp.center, &stamp.signature);
                self.stats.add_stamped_source(stamped_cells);
            }
        }
    }

    fn restamp_changed<R: EntityRegistry + ?Sized>(&mut self, registry: &R) {
        let mut seen = HashSet::new();
        for entity in registry.entities() {
            if !seen.insert(entity.id) {
                tracing::warn!(entity_id = entity.id, "skipping duplicate influence source");
                self.stats.add_skipped_invalid_source();
                continue;
            }
            let next = self.resolve(entity);
            let previous = self.stamps.get(&entity.id).copied();
            if previous == next {
                if next.is_some() {
                    self.stats.add_reused_source();
                }
                continue;
            }
            if let Some(previous) = previous {
                stamp_gradient(&mut self.grid, previous.center, &previous.signature.negated());
                self.stamps.remove(&entity.id);
            }
            if let Some(next) = next {
                let stamped_cells = stamp_gradient(&mut self.grid, next.center, &next.signature);
                self.stats.add_stamped_source(stamped_cells);
                self.stamps.insert(entity.id, next);
            }
        }
        let mut removed = self.stamps.keys()
            .filter(|v| !seen.contains(*v))
            .copied()
            .collect::<Vec<_>>();
        removed.sort();
        for entity_id in removed {
            if let Some(previous) = self.stamps.remove(&entity_id) {
                stamp_gradient(&mut self.grid, previous.center, &previous.signature.negated());
            }
        }
    }

    /// `None` when the entity contributes nothing this tick.
    fn resolve(&mut self, entity: &TrackedEntity) -> Option<Stamp> {
        if Relation::of(entity.player_id, self.my_id) == Relation::Neutral {
            self.stats.add_skipped_neutral_source();
            return None;
        }
        match resolve_signature(entity, &self.entity_properties, self.my_id, self.config.influence_offset) {
            Ok(signature) => Some(Stamp { center: entity.center(), signature }),
            Err(error) => {
                tracing::warn!(%error, "skipping influence source");
                self.stats.add_skipped_invalid_source();
                None
            }
        }
    }
}
