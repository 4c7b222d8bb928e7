//! Ball state and seeded spawning.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SimConfig;

/// Placement attempts per ball before an overlapping spawn is accepted as-is.
///
/// Spawning rejection-samples each position against every ball placed so far;
/// a crowded config could otherwise loop forever. After this many misses the
/// last sample is kept, overlap included.
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// A single circular body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius in pixels. Fixed after spawn.
    pub radius: f32,
    /// radius / 2, fixed after spawn. Always > 0 because min_radius is.
    pub mass: f32,
    /// Cosmetic only, never read by the physics.
    pub color: [u8; 3],
}

impl Ball {
    /// Kinetic energy of this ball, ½·m·|v|².
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// The whole simulation: a fixed-count set of balls plus the seed that
/// produced it. Randomness only enters at spawn/reset; stepping is fully
/// deterministic given (state, config, dt).
#[derive(Debug, Clone)]
pub struct SimState {
    pub seed: u64,
    pub balls: Vec<Ball>,
}

impl SimState {
    /// Spawn `config.ball_count` balls with non-overlapping placement.
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            balls: Vec::with_capacity(config.ball_count),
        };
        state.reset(config, seed);
        state
    }

    /// Reinitialize every ball from a fresh seed. Radii, masses, and colors
    /// are redrawn. Callers apply this between frames, never mid-step.
    pub fn reset(&mut self, config: &SimConfig, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        self.seed = seed;
        self.balls.clear();

        for _ in 0..config.ball_count {
            let radius = rng.random_range(config.min_radius..=config.max_radius) as f32;
            let mass = radius / 2.0;

            // Sample inside the window inset by this ball's radius, rejecting
            // positions that overlap an already placed ball.
            let mut pos = Vec2::ZERO;
            let mut placed = false;
            let mut attempts = 0;
            while !placed && attempts < PLACEMENT_ATTEMPTS {
                pos = Vec2::new(
                    rng.random_range(radius..=config.width - radius),
                    rng.random_range(radius..=config.height - radius),
                );
                placed = self.balls.iter().all(|other| {
                    let min_dist = radius + other.radius;
                    pos.distance_squared(other.pos) >= min_dist * min_dist
                });
                attempts += 1;
            }
            if !placed {
                log::debug!("placement budget exhausted, keeping overlapping spawn at {pos}");
            }

            let vel = Vec2::new(
                rng.random_range(-config.velocity_scale..=config.velocity_scale),
                rng.random_range(-config.velocity_scale..=config.velocity_scale),
            );
            let color = [
                rng.random_range(100..=255u8),
                rng.random_range(100..=255u8),
                rng.random_range(100..=255u8),
            ];

            self.balls.push(Ball {
                pos,
                vel,
                radius,
                mass,
                color,
            });
        }
    }
}
