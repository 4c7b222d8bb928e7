//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - Explicit config, no globals
//! - Seeded RNG only, and only at spawn/reset
//! - Stable iteration order (ascending indices)
//! - No rendering or platform dependencies

pub mod collision;
pub mod energy;
pub mod state;
pub mod step;

pub use collision::{resolve_pair, resolve_walls};
pub use energy::total_kinetic_energy;
pub use state::{Ball, PLACEMENT_ATTEMPTS, SimState};
pub use step::{StepStats, step};
