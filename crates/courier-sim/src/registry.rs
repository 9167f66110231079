//! Agent registry: the authoritative collection of every needy entity and
//! courier, kept as two typed vectors plus an id index.

use std::collections::HashMap;

use courier_core::types::AgentId;

use crate::agents::{Courier, NeedyEntity};

/// Where an agent lives in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSlot {
    Needy(usize),
    Courier(usize),
}

#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    needy: Vec<NeedyEntity>,
    couriers: Vec<Courier>,
    slots: HashMap<AgentId, AgentSlot>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_needy(&mut self, entity: NeedyEntity) {
        self.slots
            .insert(entity.id(), AgentSlot::Needy(self.needy.len()));
        self.needy.push(entity);
    }

    pub fn add_courier(&mut self, courier: Courier) {
        self.slots
            .insert(courier.id(), AgentSlot::Courier(self.couriers.len()));
        self.couriers.push(courier);
    }

    pub fn slot(&self, id: AgentId) -> Option<AgentSlot> {
        self.slots.get(&id).copied()
    }

    /// Needy entities in registration order. This order decides ties in
    /// courier target selection.
    pub fn needy(&self) -> &[NeedyEntity] {
        &self.needy
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    /// Mutable access to both collections at once, so a courier can serve
    /// an entity while being stepped itself.
    pub fn split_mut(&mut self) -> (&mut [NeedyEntity], &mut [Courier]) {
        (&mut self.needy, &mut self.couriers)
    }

    /// All agent ids: needy entities first, then couriers, each in
    /// registration order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.needy
            .iter()
            .map(NeedyEntity::id)
            .chain(self.couriers.iter().map(Courier::id))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of entities currently hungry.
    pub fn hungry_count(&self) -> usize {
        self.needy.iter().filter(|e| e.is_hungry()).count()
    }
}
