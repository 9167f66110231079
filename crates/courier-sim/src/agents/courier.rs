//! Courier: searches for the nearest hungry entity, serves it, and returns
//! to its home depot once it has served `capacity` entities.
//!
//! Targets are recomputed from live registry state every tick, so two
//! couriers chasing the same entity resolve naturally: whoever acts first
//! serves it and the other retargets on its next step.

use courier_core::enums::CourierState;
use courier_core::errors::GridError;
use courier_core::types::{AgentId, DepotId, Position};

use crate::agents::needy::NeedyEntity;
use crate::grid::Grid;

/// What a courier did during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourierAction {
    /// No hungry entity anywhere; stayed put.
    Idle,
    /// Moved one step toward a target (entity or depot). `remaining` is the
    /// number of further steps to the target along the unwrapped path.
    Moved {
        from: Position,
        to: Position,
        remaining: u32,
    },
    /// Served the entity sharing its cell.
    Served { target: AgentId },
    /// Was already full while searching; switched to returning without moving.
    BeganReturn,
    /// Reached home: load counter cleared, searching again.
    Unloaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Courier {
    id: AgentId,
    home: DepotId,
    capacity: u32,
    carried: u32,
    state: CourierState,
}

impl Courier {
    pub fn new(id: AgentId, home: DepotId, capacity: u32) -> Self {
        Self {
            id,
            home,
            capacity,
            carried: 0,
            state: CourierState::Searching,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn home(&self) -> DepotId {
        self.home
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Entities served since the last visit home. Always within `[0, capacity]`.
    pub fn carried(&self) -> u32 {
        self.carried
    }

    pub fn state(&self) -> CourierState {
        self.state
    }

    /// Advance one tick. `home_pos` is the position of this courier's depot.
    pub fn step(
        &mut self,
        needy: &mut [NeedyEntity],
        grid: &mut Grid,
        home_pos: Position,
    ) -> Result<CourierAction, GridError> {
        let here = grid
            .position_of(self.id)
            .ok_or(GridError::UnknownAgent(self.id))?;

        match self.state {
            CourierState::Searching => self.search(needy, grid, here),
            CourierState::Returning => {
                if here == home_pos {
                    self.carried = 0;
                    self.state = CourierState::Searching;
                    return Ok(CourierAction::Unloaded);
                }
                self.advance(grid, here, home_pos)
            }
        }
    }

    fn search(
        &mut self,
        needy: &mut [NeedyEntity],
        grid: &mut Grid,
        here: Position,
    ) -> Result<CourierAction, GridError> {
        if self.carried >= self.capacity {
            self.state = CourierState::Returning;
            return Ok(CourierAction::BeganReturn);
        }

        let Some((idx, target_pos)) = nearest_hungry(needy, grid, here) else {
            return Ok(CourierAction::Idle);
        };

        if here != target_pos {
            return self.advance(grid, here, target_pos);
        }

        let target = &mut needy[idx];
        target.serve();
        self.carried += 1;
        if self.carried >= self.capacity {
            self.state = CourierState::Returning;
        }
        Ok(CourierAction::Served {
            target: target.id(),
        })
    }

    fn advance(
        &self,
        grid: &mut Grid,
        here: Position,
        target: Position,
    ) -> Result<CourierAction, GridError> {
        let next = here.step_toward(&target);
        let to = grid.move_agent(self.id, next)?;
        Ok(CourierAction::Moved {
            from: here,
            to,
            remaining: next.chebyshev_distance(&target),
        })
    }
}

/// Index and position of the hungry entity closest to `from` by Manhattan
/// distance. Ties go to the earliest entity in registry order.
pub fn nearest_hungry(
    needy: &[NeedyEntity],
    grid: &Grid,
    from: Position,
) -> Option<(usize, Position)> {
    needy
        .iter()
        .enumerate()
        .filter(|(_, entity)| entity.is_hungry())
        .filter_map(|(idx, entity)| grid.position_of(entity.id()).map(|pos| (idx, pos)))
        .min_by_key(|(_, pos)| from.manhattan_distance(pos))
}
