//! Core types and definitions for the courier delivery simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! grid positions, agent identifiers, configuration, state snapshots,
//! errors, and tuning constants. It contains no simulation logic.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod state;
pub mod types;

pub use config::SimConfig;
pub use errors::{ConfigError, GridError, SimError};
pub use types::{AgentId, DepotId, Position, SimTime};
