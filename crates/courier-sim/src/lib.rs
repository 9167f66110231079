//! Simulation engine for the courier delivery model.
//!
//! Owns the grid, depots and agents, runs one randomly ordered step per
//! agent each tick, and produces `WorldSnapshot`s for external consumers.

pub mod agents;
pub mod depot;
pub mod engine;
pub mod grid;
pub mod registry;
pub mod scenario;
pub mod scheduler;
pub mod snapshot;
pub mod world_setup;

pub use courier_core as core;
pub use engine::SimulationEngine;
pub use scenario::ScenarioLayout;

#[cfg(test)]
mod tests;
