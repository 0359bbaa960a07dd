use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::ui::Button;

const GRID_LINE_COLOR: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0);
const HUD_FONT_SIZE: f32 = 24.0;

/// Draw grid lines over the visible area
pub fn draw_grid_lines(camera: &Camera) {
    let (width, height) = (screen_width(), screen_height());
    let (min_x, min_y, max_x, max_y) = camera.visible_bounds(width, height);

    for x in min_x..=max_x {
        let (screen_x, _) = camera.grid_to_screen(x, 0);
        draw_line(screen_x, 0.0, screen_x, height, 1.0, GRID_LINE_COLOR);
    }
    for y in min_y..=max_y {
        let (_, screen_y) = camera.grid_to_screen(0, y);
        draw_line(0.0, screen_y, width, screen_y, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw live cells that fall inside the viewport
pub fn draw_cells(state: &GameState, camera: &Camera) {
    let (width, height) = (screen_width(), screen_height());
    let size = camera.cell_size;

    for (x, y) in state.engine.live_cells() {
        let (screen_x, screen_y) = camera.grid_to_screen(x, y);
        if screen_x + size < 0.0 || screen_x > width || screen_y + size < 0.0 || screen_y > height {
            continue;
        }
        draw_rectangle(screen_x, screen_y, size, size, WHITE);
    }
}

/// Draw generation counter, speed and history depth
pub fn draw_hud(state: &GameState) {
    let engine = &state.engine;
    let direction = if state.is_playing_forward() {
        "playing =>"
    } else if state.is_playing_backward() {
        "playing <="
    } else {
        "paused"
    };

    let lines = [
        (format!("Generation: {}", engine.generation()), 10.0, 24.0),
        (format!("Speed: {:.1} gen/s", state.animation_speed), 10.0, 54.0),
        (format!("Population: {}", engine.population()), 10.0, 84.0),
        (format!("History: {} ({})", engine.history_len(), direction), 10.0, 114.0),
    ];

    lines.iter().for_each(|(text, x, y)| {
        draw_text(text, *x, *y, HUD_FONT_SIZE, WHITE);
    });

    if let Some(label) = &state.last_placed {
        draw_text(&format!("Placed: {label}"), 10.0, 144.0, HUD_FONT_SIZE, GRAY);
    }
}

/// Draw one full frame
pub fn draw_frame(state: &GameState, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    clear_background(BLACK);
    draw_grid_lines(camera);
    draw_cells(state, camera);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    draw_hud(state);
}
