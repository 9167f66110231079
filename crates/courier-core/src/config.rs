//! Simulation configuration.
//!
//! Every field has a default from [`crate::constants`]; missing fields in a
//! serialized config fall back to those defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ConfigError;

/// Configuration for constructing a simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of needy entities placed at random distinct cells.
    pub entity_count: usize,
    /// Number of couriers; even indices start at the top depot, odd at the bottom.
    pub courier_count: usize,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Per-tick probability that a fed entity becomes hungry, in `[0, 1)`.
    pub hunger_rate: f64,
    /// Entities served per trip before a courier heads home.
    pub courier_capacity: u32,
    /// Whether the grid wraps at its edges.
    pub wrap_edges: bool,
    /// RNG seed for determinism. `None` draws a seed from OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            entity_count: DEFAULT_ENTITY_COUNT,
            courier_count: DEFAULT_COURIER_COUNT,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            hunger_rate: DEFAULT_HUNGER_RATE,
            courier_capacity: DEFAULT_COURIER_CAPACITY,
            wrap_edges: DEFAULT_WRAP_EDGES,
            random_seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_population(mut self, entities: usize, couriers: usize) -> Self {
        self.entity_count = entities;
        self.courier_count = couriers;
        self
    }

    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_hunger_rate(mut self, rate: f64) -> Self {
        self.hunger_rate = rate;
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.courier_capacity = capacity;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_edges = wrap;
        self
    }

    /// Number of cells left for needy entities once both depots are placed.
    pub fn available_cells(&self) -> usize {
        let total = self.grid_width as usize * self.grid_height as usize;
        total.saturating_sub(DEPOT_COUNT)
    }

    /// Check every field. The first violation found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0
            || self.grid_height == 0
            || self
                .grid_width
                .checked_mul(self.grid_height)
                .filter(|cells| *cells <= MAX_GRID_CELLS)
                .is_none()
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                height: self.grid_height,
                minimum: MIN_GRID_HEIGHT,
            });
        }
        // Also rejects NaN.
        if !(0.0..1.0).contains(&self.hunger_rate) {
            return Err(ConfigError::InvalidHungerRate(self.hunger_rate));
        }
        if self.courier_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.entity_count == 0 {
            return Err(ConfigError::NoEntities);
        }
        let total_agents = self.entity_count.saturating_add(self.courier_count);
        if total_agents > u32::MAX as usize {
            return Err(ConfigError::TooManyAgents(total_agents));
        }
        let available = self.available_cells();
        if self.entity_count > available {
            return Err(ConfigError::InsufficientSpace {
                requested: self.entity_count,
                available,
            });
        }
        Ok(())
    }
}
