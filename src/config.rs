//! Simulation parameters
//!
//! Every tunable lives in one immutable value handed to spawn and step, so
//! tests can run the simulation with arbitrary dimensions and coefficients.

/// Immutable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Number of balls (constant for the life of the process)
    pub ball_count: usize,
    /// 0.0 = fully inelastic on the contact axis, 1.0 = energy-conserving
    pub restitution: f32,
    /// Minimum ball radius in pixels
    pub min_radius: u32,
    /// Maximum ball radius in pixels
    pub max_radius: u32,
    /// Initial velocity components are drawn from [-velocity_scale, velocity_scale]
    pub velocity_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ball_count: 10,
            restitution: 1.0,
            min_radius: 15,
            max_radius: 35,
            velocity_scale: 200.0,
        }
    }
}
