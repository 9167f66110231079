//! Grid: spatial container mapping cells to the agents occupying them.
//!
//! Cells are stored row-major (top-to-bottom, left-to-right). Any number of
//! agents may share a cell. The grid is the source of truth for agent
//! positions: agents do not store their own coordinates.

use std::collections::{BTreeSet, HashMap};

use courier_core::errors::GridError;
use courier_core::types::{AgentId, Position};

#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    wrap: bool,
    /// Occupants per cell, row-major.
    cells: Vec<BTreeSet<AgentId>>,
    /// Current cell of every placed agent. Always agrees with `cells`.
    locations: HashMap<AgentId, Position>,
}

impl Grid {
    /// Create an empty grid. Dimensions are validated by `SimConfig`.
    pub fn new(width: u32, height: u32, wrap: bool) -> Self {
        Self {
            width,
            height,
            wrap,
            cells: vec![BTreeSet::new(); width as usize * height as usize],
            locations: HashMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Number of agents currently placed.
    pub fn agent_count(&self) -> usize {
        self.locations.len()
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Map a requested position onto the grid: wrapped when edges are
    /// toroidal, rejected when out of bounds otherwise.
    pub fn resolve(&self, pos: Position) -> Result<Position, GridError> {
        if self.wrap {
            return Ok(Position::new(
                pos.x.rem_euclid(self.width as i32),
                pos.y.rem_euclid(self.height as i32),
            ));
        }
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Put an agent on the grid for the first time.
    pub fn place(&mut self, agent: AgentId, pos: Position) -> Result<Position, GridError> {
        if self.locations.contains_key(&agent) {
            return Err(GridError::AlreadyPlaced(agent));
        }
        let pos = self.resolve(pos)?;
        let idx = self.index(pos);
        self.cells[idx].insert(agent);
        self.locations.insert(agent, pos);
        Ok(pos)
    }

    /// Relocate an already-placed agent. The target is validated before the
    /// agent leaves its current cell, so a failed move changes nothing.
    /// Returns the cell the agent ends up in.
    pub fn move_agent(&mut self, agent: AgentId, new_pos: Position) -> Result<Position, GridError> {
        let current = self.position_of(agent).ok_or(GridError::UnknownAgent(agent))?;
        let target = self.resolve(new_pos)?;
        if target == current {
            return Ok(current);
        }

        let from = self.index(current);
        let to = self.index(target);
        self.cells[from].remove(&agent);
        self.cells[to].insert(agent);
        self.locations.insert(agent, target);
        Ok(target)
    }

    /// Agents at a cell, in id order. Empty for unoccupied or out-of-bounds cells.
    pub fn agents_at(&self, pos: Position) -> impl Iterator<Item = AgentId> + '_ {
        let bucket = if self.in_bounds(pos) {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        };
        bucket.into_iter().flatten().copied()
    }

    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.agents_at(pos).next().is_none()
    }

    pub fn position_of(&self, agent: AgentId) -> Option<Position> {
        self.locations.get(&agent).copied()
    }

    /// Every cell of the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Row-major index of an in-bounds position.
    fn index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }
}
