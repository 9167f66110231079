//! Simulation engine: the core of the delivery model.
//!
//! `SimulationEngine` owns the grid, depots, agent registry, scheduler and
//! the single RNG every random draw comes from. Completely headless and
//! delay-free; pacing, rendering and metric collection happen around
//! `tick()`, never inside it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, trace};

use courier_core::config::SimConfig;
use courier_core::errors::{GridError, SimError};
use courier_core::state::WorldSnapshot;
use courier_core::types::{AgentId, Position, SimTime};

use crate::agents::{Courier, NeedyEntity};
use crate::depot::Depot;
use crate::grid::Grid;
use crate::registry::{AgentRegistry, AgentSlot};
use crate::scenario::ScenarioLayout;
use crate::scheduler::ActivationScheduler;
use crate::snapshot;
use crate::world_setup::{self, World};

/// The simulation engine. Owns all simulation state.
pub struct SimulationEngine {
    config: SimConfig,
    seed: u64,
    grid: Grid,
    depots: Vec<Depot>,
    registry: AgentRegistry,
    scheduler: ActivationScheduler,
    rng: ChaCha8Rng,
    time: SimTime,
}

impl SimulationEngine {
    /// Create an engine with needy entities at random cells. Without a
    /// configured seed, one is drawn from OS entropy and logged so the run
    /// can be replayed.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let seed = resolve_seed(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = world_setup::build_random_world(&config, &mut rng)?;
        Ok(Self::assemble(config, seed, world, rng))
    }

    /// Create an engine from a hand-built layout instead of random placement.
    pub fn from_layout(config: SimConfig, layout: &ScenarioLayout) -> Result<Self, SimError> {
        let seed = resolve_seed(&config);
        let world = world_setup::build_layout_world(&config, layout)?;
        let config = SimConfig {
            entity_count: layout.len(),
            ..config
        };
        Ok(Self::assemble(
            config,
            seed,
            world,
            ChaCha8Rng::seed_from_u64(seed),
        ))
    }

    fn assemble(config: SimConfig, seed: u64, world: World, rng: ChaCha8Rng) -> Self {
        let World {
            grid,
            depots,
            registry,
        } = world;
        let scheduler = ActivationScheduler::new(registry.ids().collect());

        info!(
            seed,
            entities = registry.needy().len(),
            couriers = registry.couriers().len(),
            width = grid.width(),
            height = grid.height(),
            wrap = grid.wraps(),
            "simulation initialized"
        );

        Self {
            config,
            seed,
            grid,
            depots,
            registry,
            scheduler,
            rng,
            time: SimTime::default(),
        }
    }

    /// Advance the simulation by one tick: every agent steps exactly once,
    /// in a freshly drawn random order.
    ///
    /// An error means a grid invariant was violated mid-tick (a defect, not
    /// a runtime condition); the clock does not advance.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let Self {
            config,
            grid,
            depots,
            registry,
            scheduler,
            rng,
            time,
            ..
        } = self;
        let hunger_rate = config.hunger_rate;

        let result = scheduler.run(rng, |id, rng| {
            step_agent(id, registry, grid, depots.as_slice(), hunger_rate, rng)
        });
        if let Err(err) = result {
            error!(tick = time.tick, %err, "agent step failed");
            return Err(err);
        }

        time.advance();
        debug!(
            tick = time.tick,
            hungry = registry.hungry_count(),
            "tick complete"
        );
        Ok(())
    }

    /// Build a read-only snapshot for renderers and collectors.
    pub fn snapshot(&self) -> WorldSnapshot {
        snapshot::build_snapshot(self.time, &self.grid, &self.depots, &self.registry)
    }

    /// Number of needy entities currently hungry.
    pub fn hungry_count(&self) -> usize {
        self.registry.hungry_count()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The seed the RNG was built from (configured or drawn).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn needy(&self) -> &[NeedyEntity] {
        self.registry.needy()
    }

    pub fn couriers(&self) -> &[Courier] {
        self.registry.couriers()
    }

    pub fn position_of(&self, id: AgentId) -> Option<Position> {
        self.grid.position_of(id)
    }
}

fn resolve_seed(config: &SimConfig) -> u64 {
    config
        .random_seed
        .unwrap_or_else(|| rand::thread_rng().gen())
}

/// Dispatch one agent's step by kind.
fn step_agent<R: Rng + ?Sized>(
    id: AgentId,
    registry: &mut AgentRegistry,
    grid: &mut Grid,
    depots: &[Depot],
    hunger_rate: f64,
    rng: &mut R,
) -> Result<(), SimError> {
    match registry.slot(id) {
        Some(AgentSlot::Needy(idx)) => {
            let (needy, _) = registry.split_mut();
            if needy[idx].step(rng, hunger_rate) {
                trace!(%id, "became hungry");
            }
            Ok(())
        }
        Some(AgentSlot::Courier(idx)) => {
            let (needy, couriers) = registry.split_mut();
            let courier = &mut couriers[idx];
            let home = depots
                .iter()
                .find(|d| d.id() == courier.home())
                .ok_or(SimError::UnknownDepot(courier.home()))?;
            let action = courier.step(needy, grid, home.position())?;
            trace!(%id, ?action, carried = courier.carried(), "courier step");
            Ok(())
        }
        None => Err(GridError::UnknownAgent(id).into()),
    }
}
