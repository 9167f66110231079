//! Agent state machines.
//!
//! Each agent kind has its own type and step function. The engine keeps
//! them in separate typed collections and dispatches with an explicit
//! match on [`crate::registry::AgentSlot`].

pub mod courier;
pub mod needy;

pub use courier::{Courier, CourierAction};
pub use needy::NeedyEntity;
