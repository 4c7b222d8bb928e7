//! Per-frame update.
//!
//! The order is part of the behavior: integrate positions, wall pass, then a
//! single pass over ascending index pairs. Each pair is resolved immediately
//! against positions already corrected earlier in the same frame, so the
//! pass is sequential and order-dependent. Changing the pair order changes
//! trajectories.

use super::collision::{resolve_pair, resolve_walls};
use super::state::SimState;
use crate::config::SimConfig;

/// Per-frame diagnostic counters. Never fed back into the physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub wall_contacts: u32,
    pub pair_contacts: u32,
}

/// Advance the simulation by `dt` seconds. `dt` varies frame to frame; there
/// is no fixed timestep and no substepping.
pub fn step(state: &mut SimState, config: &SimConfig, dt: f32) -> StepStats {
    let mut stats = StepStats::default();

    for ball in &mut state.balls {
        ball.pos += ball.vel * dt;
    }

    for ball in &mut state.balls {
        stats.wall_contacts += resolve_walls(ball, config);
    }

    let n = state.balls.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (left, right) = state.balls.split_at_mut(j);
            if resolve_pair(&mut left[i], &mut right[0], config.restitution) {
                stats.pair_contacts += 1;
            }
        }
    }

    stats
}
