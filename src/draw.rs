//! macroquad presentation: scene plus HUD.
//!
//! Pure read side of the frame: takes the simulation state and per-frame
//! diagnostics and issues draw calls. The overlay flag lives here with the
//! presentation layer, not in the simulation.

use macroquad::prelude::*;

use crate::config::SimConfig;
use crate::sim::{SimState, StepStats};

/// Presentation-side state.
#[derive(Debug, Clone, Copy)]
pub struct UiState {
    /// Per-ball mass labels plus the seed/contact readout.
    pub show_diagnostics: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_diagnostics: true,
        }
    }
}

/// `draw_text` anchors at the baseline; offset so `y` means the top of the line.
fn text_top(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y + size * 0.75, size, color);
}

/// Draw one frame: balls, boundary outline, status text.
pub fn draw_frame(
    state: &SimState,
    config: &SimConfig,
    ui: &UiState,
    kinetic_energy: f32,
    stats: StepStats,
) {
    clear_background(BLACK);

    for ball in &state.balls {
        let [r, g, b] = ball.color;
        draw_circle(
            ball.pos.x,
            ball.pos.y,
            ball.radius,
            Color::from_rgba(r, g, b, 255),
        );
        if ui.show_diagnostics {
            text_top(
                &format!("M:{:.1}", ball.mass),
                ball.pos.x - 15.0,
                ball.pos.y - 8.0,
                10.0,
                WHITE,
            );
        }
    }

    draw_rectangle_lines(0.0, 0.0, config.width, config.height, 2.0, DARKGRAY);

    text_top(
        &format!("Balls: {}", state.balls.len()),
        10.0,
        10.0,
        20.0,
        WHITE,
    );
    text_top(
        &format!("Restitution: {:.2}", config.restitution),
        10.0,
        35.0,
        20.0,
        WHITE,
    );
    text_top(
        &format!("Total kinetic energy: {kinetic_energy:.0}"),
        10.0,
        60.0,
        20.0,
        LIME,
    );

    text_top(
        &format!("{} FPS", get_fps()),
        config.width - 90.0,
        10.0,
        20.0,
        LIME,
    );
    text_top("[R] reset", config.width - 170.0, 40.0, 10.0, GRAY);
    text_top("[D] diagnostics", config.width - 170.0, 55.0, 10.0, GRAY);

    if ui.show_diagnostics {
        text_top(
            &format!(
                "seed {}  wall contacts {}  pair contacts {}",
                state.seed, stats.wall_contacts, stats.pair_contacts
            ),
            10.0,
            config.height - 16.0,
            10.0,
            GRAY,
        );
    }
}
