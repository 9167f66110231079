//! World snapshot: the read-only view handed to renderers and metric
//! collectors after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentKind, DisplayState};
use crate::types::{AgentId, DepotId, Position, SimTime};

/// Complete visible state of the simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub grid: GridView,
    pub depots: Vec<DepotView>,
    /// Every agent, sorted by id.
    pub agents: Vec<AgentView>,
    pub hungry_count: u32,
}

/// Grid geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    pub width: u32,
    pub height: u32,
    pub wrap_edges: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotView {
    pub depot_id: DepotId,
    pub position: Position,
}

/// One agent as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub kind: AgentKind,
    pub position: Position,
    pub display: DisplayState,
}

impl WorldSnapshot {
    /// Agents of one kind, in id order.
    pub fn agents_of(&self, kind: AgentKind) -> impl Iterator<Item = &AgentView> {
        self.agents.iter().filter(move |a| a.kind == kind)
    }
}
