//! Snapshot builder: reads the world and produces a `WorldSnapshot`.
//!
//! Read-only: never modifies the grid or registry.

use courier_core::enums::{AgentKind, DisplayState};
use courier_core::state::{AgentView, DepotView, GridView, WorldSnapshot};
use courier_core::types::SimTime;

use crate::depot::Depot;
use crate::grid::Grid;
use crate::registry::AgentRegistry;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    time: SimTime,
    grid: &Grid,
    depots: &[Depot],
    registry: &AgentRegistry,
) -> WorldSnapshot {
    WorldSnapshot {
        time,
        grid: GridView {
            width: grid.width(),
            height: grid.height(),
            wrap_edges: grid.wraps(),
        },
        depots: depots
            .iter()
            .map(|d| DepotView {
                depot_id: d.id(),
                position: d.position(),
            })
            .collect(),
        agents: build_agents(grid, registry),
        hungry_count: registry.hungry_count() as u32,
    }
}

fn build_agents(grid: &Grid, registry: &AgentRegistry) -> Vec<AgentView> {
    let needy = registry.needy().iter().filter_map(|entity| {
        grid.position_of(entity.id()).map(|position| AgentView {
            id: entity.id(),
            kind: AgentKind::Needy,
            position,
            display: DisplayState::from(entity.state()),
        })
    });
    let couriers = registry.couriers().iter().filter_map(|courier| {
        grid.position_of(courier.id()).map(|position| AgentView {
            id: courier.id(),
            kind: AgentKind::Courier,
            position,
            display: DisplayState::from(courier.state()),
        })
    });

    let mut agents: Vec<AgentView> = needy.chain(couriers).collect();
    agents.sort_by_key(|a| a.id);
    agents
}
