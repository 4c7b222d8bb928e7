//! Kinetic-energy accounting.
//!
//! Read-only diagnostics; the result never feeds back into the physics.

use super::state::Ball;

/// Total kinetic energy of the set, Σ ½·m·|v|².
pub fn total_kinetic_energy(balls: &[Ball]) -> f32 {
    balls.iter().map(Ball::kinetic_energy).sum()
}
