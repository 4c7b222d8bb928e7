//! Bounce Lab - an elastic collision sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seeded spawn, physics step, energy accounting)
//! - `config`: Immutable simulation parameters
//! - `draw`: macroquad presentation (scene + HUD)

pub mod config;
pub mod draw;
pub mod sim;

pub use config::SimConfig;
pub use sim::{SimState, StepStats};
