//! Simulation defaults and tuning parameters.

// --- Population ---

/// Default number of needy entities placed on the grid.
pub const DEFAULT_ENTITY_COUNT: usize = 100;

/// Default number of couriers, split between the two depots.
pub const DEFAULT_COURIER_COUNT: usize = 6;

// --- Grid ---

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u32 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u32 = 20;

/// Smallest grid height that keeps the two depots on distinct, in-bounds cells.
pub const MIN_GRID_HEIGHT: u32 = 3;

/// Upper bound on `width * height`. The grid keeps one occupancy set per
/// cell and placement enumerates every free cell, so both scale with this.
pub const MAX_GRID_CELLS: u32 = 1 << 24;

/// Toroidal edges are on by default.
pub const DEFAULT_WRAP_EDGES: bool = true;

// --- Depots ---

/// Number of depots created at initialization (top-center and bottom-center).
pub const DEPOT_COUNT: usize = 2;

/// Rows between the bottom depot and the bottom edge of the grid.
/// The bottom depot sits at `height - BOTTOM_DEPOT_INSET`.
pub const BOTTOM_DEPOT_INSET: u32 = 2;

// --- Hunger ---

/// Per-tick probability that a fed entity becomes hungry.
pub const DEFAULT_HUNGER_RATE: f64 = 0.007;

// --- Couriers ---

/// Entities a courier can serve before returning to its depot.
pub const DEFAULT_COURIER_CAPACITY: u32 = 5;

// --- Runner pacing ---

/// Delay between ticks in the runner loop (milliseconds).
pub const DEFAULT_TICK_DELAY_MS: u64 = 100;
