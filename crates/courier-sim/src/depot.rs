//! Depots: fixed landmarks where couriers start and unload.

use courier_core::constants::BOTTOM_DEPOT_INSET;
use courier_core::types::{DepotId, Position};

/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depot {
    id: DepotId,
    position: Position,
}

impl Depot {
    pub fn new(id: DepotId, position: Position) -> Self {
        Self { id, position }
    }

    pub fn id(&self) -> DepotId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// The two canonical depots: top-center `(w/2, 0)` and bottom-center
/// `(w/2, h - 2)`. Distinct whenever `h >= 3`.
pub fn canonical_depots(width: u32, height: u32) -> [Depot; 2] {
    let center_x = (width / 2) as i32;
    let bottom_y = height.saturating_sub(BOTTOM_DEPOT_INSET) as i32;
    [
        Depot::new(DepotId(0), Position::new(center_x, 0)),
        Depot::new(DepotId(1), Position::new(center_x, bottom_y)),
    ]
}
