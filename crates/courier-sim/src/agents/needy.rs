//! Needy entity: a stationary agent that randomly becomes hungry and stays
//! hungry until a courier serves it.

use rand::Rng;

use courier_core::enums::HungerState;
use courier_core::types::AgentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedyEntity {
    id: AgentId,
    /// Ticks since the entity was last served. Observability only: nothing
    /// reads it to make a decision.
    hunger_timer: u64,
    state: HungerState,
}

impl NeedyEntity {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            hunger_timer: 0,
            state: HungerState::Fed,
        }
    }

    /// Construct with an explicit starting state (hand-built layouts).
    pub(crate) fn with_state(id: AgentId, state: HungerState) -> Self {
        Self {
            state,
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn hunger_timer(&self) -> u64 {
        self.hunger_timer
    }

    pub fn state(&self) -> HungerState {
        self.state
    }

    pub fn is_hungry(&self) -> bool {
        self.state == HungerState::Hungry
    }

    /// Advance one tick. The timer always increments; a fed entity draws
    /// exactly one sample and turns hungry when it falls below `hunger_rate`.
    /// A hungry entity draws nothing. Returns true on the Fed -> Hungry edge.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, hunger_rate: f64) -> bool {
        self.hunger_timer += 1;
        if self.state == HungerState::Fed && rng.gen::<f64>() < hunger_rate {
            self.state = HungerState::Hungry;
            return true;
        }
        false
    }

    /// Serve the entity: Hungry -> Fed with the timer reset. Returns false
    /// (and changes nothing) if the entity was not hungry.
    pub fn serve(&mut self) -> bool {
        if self.state != HungerState::Hungry {
            return false;
        }
        self.state = HungerState::Fed;
        self.hunger_timer = 0;
        true
    }
}
