use std::sync::OnceLock;

use macroquad::prelude::*;
use sparse_life::{
    Camera, GameState, Settings, SettingsError, presets,
    input::{self, DragState},
    rendering, ui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Read once: `window_conf` runs before tracing is installed, so the
/// outcome is logged later from `main`.
static SETTINGS: OnceLock<Result<Settings, SettingsError>> = OnceLock::new();

fn loaded_settings() -> &'static Result<Settings, SettingsError> {
    SETTINGS.get_or_init(Settings::load_default)
}

fn window_conf() -> Conf {
    let settings = loaded_settings().as_ref().cloned().unwrap_or_default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let settings = Settings::or_default(loaded_settings());
    let mut state = GameState::with_speed(settings.animation_speed);
    let mut camera = Camera::with_cell_size(settings.cell_size);
    let mut drag = DragState::default();
    let patterns = presets::all_patterns();

    info!(
        cell_size = camera.cell_size,
        speed = state.animation_speed,
        "viewer started"
    );

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons so the bar follows window resizes
        let buttons = ui::create_buttons(screen_height());

        state = input::handle_mouse(state, &mut camera, &mut drag, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        state = input::process_keyboard_input(state, &mut camera, &patterns, mouse_pos);

        state = state.tick(get_frame_time());

        rendering::draw_frame(&state, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
