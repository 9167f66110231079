//! Headless runner for the courier delivery simulation.
//!
//! Wraps the engine the way an external collaborator would: parses
//! parameters, paces ticks in real time, samples the hungry-count metric,
//! and prints text frames of the grid.

pub mod ascii;
pub mod cli;
pub mod collector;
pub mod game_loop;

pub use courier_core as core;
