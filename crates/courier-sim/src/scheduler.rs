//! Random activation: every tick, each agent steps exactly once, in a
//! freshly shuffled order.

use rand::seq::SliceRandom;
use rand::Rng;

use courier_core::types::AgentId;

#[derive(Debug, Clone)]
pub struct ActivationScheduler {
    /// Fixed set of agents, in canonical order.
    roster: Vec<AgentId>,
    /// Scratch buffer for the current tick's order.
    order: Vec<AgentId>,
}

impl ActivationScheduler {
    pub fn new(roster: Vec<AgentId>) -> Self {
        let order = Vec::with_capacity(roster.len());
        Self { roster, order }
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Draw a uniformly random permutation of the roster. Each draw starts
    /// from the canonical order, so it does not depend on earlier ticks.
    pub fn draw_order<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[AgentId] {
        self.order.clear();
        self.order.extend_from_slice(&self.roster);
        self.order.shuffle(rng);
        &self.order
    }

    /// Draw an order and run `step` once per agent in that order, stopping
    /// at the first error.
    pub fn run<R, E, F>(&mut self, rng: &mut R, mut step: F) -> Result<(), E>
    where
        R: Rng + ?Sized,
        F: FnMut(AgentId, &mut R) -> Result<(), E>,
    {
        self.draw_order(rng);
        for &id in &self.order {
            step(id, rng)?;
        }
        Ok(())
    }
}
