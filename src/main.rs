//! Bounce Lab entry point: window setup, input polling, frame loop.

use macroquad::prelude::*;

use bounce_lab::config::SimConfig;
use bounce_lab::draw::{UiState, draw_frame};
use bounce_lab::sim::{SimState, step, total_kinetic_energy};

fn window_conf() -> Conf {
    let config = SimConfig::default();
    Conf {
        window_title: "Bounce Lab".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn fresh_seed() -> u64 {
    macroquad::miniquad::date::now() as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let seed = fresh_seed();
    let mut state = SimState::new(&config, seed);
    let mut ui = UiState::default();
    log::info!("spawned {} balls with seed {seed}", config.ball_count);

    loop {
        // Input is consumed at the frame boundary, never mid-update, so a
        // reset is applied atomically before this frame's step and draw.
        if is_key_pressed(KeyCode::R) {
            let seed = fresh_seed();
            state.reset(&config, seed);
            log::info!("reset with seed {seed}");
        }
        if is_key_pressed(KeyCode::D) {
            ui.show_diagnostics = !ui.show_diagnostics;
            log::info!("diagnostics overlay: {}", ui.show_diagnostics);
        }

        let stats = step(&mut state, &config, get_frame_time());
        let energy = total_kinetic_energy(&state.balls);

        draw_frame(&state, &config, &ui, energy, stats);

        next_frame().await;
    }
}
