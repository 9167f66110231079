//! Hand-built layouts that replace random needy placement.
//!
//! A layout fixes where each needy entity stands and whether it starts
//! hungry. Depots and couriers are still set up from the config.

use courier_core::enums::HungerState;
use courier_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedyPlacement {
    pub position: Position,
    pub state: HungerState,
}

/// Needy placements in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioLayout {
    pub needy: Vec<NeedyPlacement>,
}

impl ScenarioLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fed entity at `(x, y)`.
    pub fn fed(mut self, x: i32, y: i32) -> Self {
        self.needy.push(NeedyPlacement {
            position: Position::new(x, y),
            state: HungerState::Fed,
        });
        self
    }

    /// Add an entity at `(x, y)` that starts hungry.
    pub fn hungry(mut self, x: i32, y: i32) -> Self {
        self.needy.push(NeedyPlacement {
            position: Position::new(x, y),
            state: HungerState::Hungry,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.needy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needy.is_empty()
    }
}
