//! Initial world construction: depots, needy placement, courier spawning.
//!
//! Ids are assigned densely: needy entities take `0..entity_count`, couriers
//! follow.

use rand::seq::SliceRandom;
use rand::Rng;

use courier_core::config::SimConfig;
use courier_core::enums::HungerState;
use courier_core::errors::{ConfigError, SimError};
use courier_core::types::{AgentId, Position};

use crate::agents::{Courier, NeedyEntity};
use crate::depot::{canonical_depots, Depot};
use crate::grid::Grid;
use crate::registry::AgentRegistry;
use crate::scenario::{NeedyPlacement, ScenarioLayout};

/// Everything the engine owns apart from its clock and RNG.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: Grid,
    pub depots: Vec<Depot>,
    pub registry: AgentRegistry,
}

/// Build a world with needy entities at a random subset of non-depot cells.
pub fn build_random_world<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> Result<World, SimError> {
    config.validate()?;

    let grid = Grid::new(config.grid_width, config.grid_height, config.wrap_edges);
    let depots = canonical_depots(config.grid_width, config.grid_height).to_vec();
    let cells = sample_free_cells(&grid, &depots, config.entity_count, rng)?;
    let placements = cells
        .into_iter()
        .map(|position| NeedyPlacement {
            position,
            state: HungerState::Fed,
        })
        .collect::<Vec<_>>();

    assemble(config, grid, depots, &placements)
}

/// Build a world from a hand-built layout. The layout's length overrides
/// `config.entity_count`.
pub fn build_layout_world(config: &SimConfig, layout: &ScenarioLayout) -> Result<World, SimError> {
    let config = SimConfig {
        entity_count: layout.len(),
        ..config.clone()
    };
    config.validate()?;

    let grid = Grid::new(config.grid_width, config.grid_height, config.wrap_edges);
    let depots = canonical_depots(config.grid_width, config.grid_height).to_vec();
    assemble(&config, grid, depots, &layout.needy)
}

/// Pick `count` distinct cells that hold no depot.
pub fn sample_free_cells<R: Rng + ?Sized>(
    grid: &Grid,
    depots: &[Depot],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Position>, ConfigError> {
    let available: Vec<Position> = grid
        .cells()
        .filter(|cell| depots.iter().all(|d| d.position() != *cell))
        .collect();

    if count > available.len() {
        return Err(ConfigError::InsufficientSpace {
            requested: count,
            available: available.len(),
        });
    }

    Ok(available.choose_multiple(rng, count).copied().collect())
}

fn assemble(
    config: &SimConfig,
    mut grid: Grid,
    depots: Vec<Depot>,
    placements: &[NeedyPlacement],
) -> Result<World, SimError> {
    let mut registry = AgentRegistry::new();

    for (i, placement) in placements.iter().enumerate() {
        let id = AgentId(i as u32);
        grid.place(id, placement.position)?;
        registry.add_needy(NeedyEntity::with_state(id, placement.state));
    }

    spawn_couriers(&mut grid, &mut registry, &depots, config, placements.len())?;

    Ok(World {
        grid,
        depots,
        registry,
    })
}

/// Couriers alternate between depots by index parity: even indices go to
/// the first depot, odd to the second.
fn spawn_couriers(
    grid: &mut Grid,
    registry: &mut AgentRegistry,
    depots: &[Depot],
    config: &SimConfig,
    first_id: usize,
) -> Result<(), SimError> {
    for i in 0..config.courier_count {
        let depot = depots[i % depots.len()];
        let id = AgentId((first_id + i) as u32);
        grid.place(id, depot.position())?;
        registry.add_courier(Courier::new(id, depot.id(), config.courier_capacity));
    }
    Ok(())
}
