//! Error types surfaced by configuration and grid operations.

use thiserror::Error;

use crate::constants::MAX_GRID_CELLS;
use crate::types::{AgentId, DepotId, Position};

/// Invalid simulation configuration. Fatal at construction: the
/// simulation never starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("entity count must be positive")]
    NoEntities,
    #[error(
        "grid dimensions {width}x{height} are invalid (both sides positive, at most {max} cells)",
        max = MAX_GRID_CELLS
    )]
    InvalidDimensions { width: u32, height: u32 },
    #[error("grid height {height} leaves no room for two distinct depots (minimum {minimum})")]
    GridTooSmall { height: u32, minimum: u32 },
    #[error("hunger rate {0} must lie in [0, 1)")]
    InvalidHungerRate(f64),
    #[error("courier capacity must be positive")]
    ZeroCapacity,
    #[error("{requested} entities requested but only {available} non-depot cells are free")]
    InsufficientSpace { requested: usize, available: usize },
    #[error("{0} agents exceed the agent id space")]
    TooManyAgents(usize),
}

/// Grid placement or movement failure.
///
/// `OutOfBounds` can only arise from a caller defect (couriers move one
/// cell at a time toward in-bounds targets), so it is reported rather than
/// recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
    #[error("{0} has not been placed on the grid")]
    UnknownAgent(AgentId),
    #[error("{0} is already placed on the grid")]
    AlreadyPlaced(AgentId),
}

/// Any failure the simulation engine can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("{0} does not exist")]
    UnknownDepot(DepotId),
}
