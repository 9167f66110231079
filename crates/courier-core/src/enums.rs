//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hunger state of a needy entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HungerState {
    #[default]
    Fed,
    Hungry,
}

/// Courier behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourierState {
    /// Looking for the nearest hungry entity.
    #[default]
    Searching,
    /// At capacity, heading back to the home depot.
    Returning,
}

/// Kind of agent held in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Needy,
    Courier,
}

/// Discrete display state for renderers, one per agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    Fed,
    Hungry,
    Searching,
    Returning,
}

impl From<HungerState> for DisplayState {
    fn from(state: HungerState) -> Self {
        match state {
            HungerState::Fed => DisplayState::Fed,
            HungerState::Hungry => DisplayState::Hungry,
        }
    }
}

impl From<CourierState> for DisplayState {
    fn from(state: CourierState) -> Self {
        match state {
            CourierState::Searching => DisplayState::Searching,
            CourierState::Returning => DisplayState::Returning,
        }
    }
}

impl DisplayState {
    /// Canvas colour conventionally used for this state.
    /// Couriers are drawn blue whether searching or returning.
    pub fn colour(&self) -> &'static str {
        match self {
            DisplayState::Fed => "green",
            DisplayState::Hungry => "red",
            DisplayState::Searching | DisplayState::Returning => "blue",
        }
    }
}

/// Canvas colour for depots.
pub const DEPOT_COLOUR: &str = "black";
