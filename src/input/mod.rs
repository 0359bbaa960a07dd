use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Pattern, presets};
use crate::ui::{self, BUTTON_BAR_RESERVED, Button};

/// Pointer travel below this on both axes turns a drag into a click
pub const CLICK_THRESHOLD: f32 = 5.0;

/// Side length of the box filled by the random soup key
const SOUP_SIZE: i64 = 24;
const SOUP_DENSITY: f64 = 0.35;

/// True when a press and release are close enough to count as a click
pub fn is_click(start: (f32, f32), end: (f32, f32)) -> bool {
    (end.0 - start.0).abs() < CLICK_THRESHOLD && (end.1 - start.1).abs() < CLICK_THRESHOLD
}

/// Left-button drag tracking for panning
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    origin: Option<(f32, f32)>,
    last: Option<(f32, f32)>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn press(&mut self, pos: (f32, f32)) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Movement since the previous call, zero when not dragging
    pub fn drag_to(&mut self, pos: (f32, f32)) -> (f32, f32) {
        match self.last.replace(pos) {
            Some(last) if self.origin.is_some() => (pos.0 - last.0, pos.1 - last.1),
            _ => (0.0, 0.0),
        }
    }

    /// End the drag. Returns true if it was really a click.
    pub fn release(&mut self, pos: (f32, f32)) -> bool {
        let was_click = self.origin.is_some_and(|origin| is_click(origin, pos));
        *self = Self::default();
        was_click
    }
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in();
    } else if wheel < 0.0 {
        camera.zoom_out();
    }
}

/// Left button: buttons, drag to pan, click to toggle.
/// Right button: toggle the cell under the pointer.
pub fn handle_mouse(
    mut state: GameState,
    camera: &mut Camera,
    drag: &mut DragState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> GameState {
    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some(button) = buttons.iter().find(|b| b.is_hovered(mouse_pos)) {
            return ui::apply_action(state, button.action());
        }
        if mouse_pos.1 < screen_height() - BUTTON_BAR_RESERVED {
            drag.press(mouse_pos);
        }
    }

    if drag.is_dragging() {
        let (dx, dy) = drag.drag_to(mouse_pos);
        camera.pan(dx, dy);

        if is_mouse_button_released(MouseButton::Left) && drag.release(mouse_pos) {
            let (x, y) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
            state.toggle_cell(x, y);
        }
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        let (x, y) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
        state.toggle_cell(x, y);
    }

    state
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: GameState,
    camera: &mut Camera,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_play_forward),
        (KeyCode::Right, GameState::step_forward),
        (KeyCode::Left, GameState::step_backward),
        (KeyCode::Up, GameState::increase_speed),
        (KeyCode::Down, GameState::decrease_speed),
        (KeyCode::C, GameState::clear),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    const PATTERN_KEYS: [KeyCode; 7] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
    ];
    for (key, pattern) in PATTERN_KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            let (x, y) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1);
            new_state.place_pattern(pattern, x, y);
        }
    }

    if is_key_pressed(KeyCode::R) {
        let soup = presets::random_soup(&mut ::rand::rng(), SOUP_SIZE, SOUP_SIZE, SOUP_DENSITY);
        let (x, y) = camera.center_cell(screen_width(), screen_height());
        new_state.place_pattern(&soup, x, y);
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_click_threshold() {
        assert!(is_click((100.0, 100.0), (104.0, 96.0)));
        assert!(!is_click((100.0, 100.0), (105.0, 100.0)));
        assert!(!is_click((100.0, 100.0), (100.0, 90.0)));
    }

    #[test]
    fn test_drag_reports_deltas() {
        let mut drag = DragState::default();
        assert_eq!(drag.drag_to((5.0, 5.0)), (0.0, 0.0));

        drag.press((10.0, 10.0));
        assert_eq!(drag.drag_to((15.0, 12.0)), (5.0, 2.0));
        assert_eq!(drag.drag_to((30.0, 12.0)), (15.0, 0.0));
        assert!(!drag.release((30.0, 12.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_short_drag_is_click() {
        let mut drag = DragState::default();
        drag.press((50.0, 50.0));
        drag.drag_to((52.0, 51.0));
        assert!(drag.release((52.0, 51.0)));
    }

    #[test]
    fn test_click_measured_from_origin() {
        let mut drag = DragState::default();
        drag.press((0.0, 0.0));
        for step in 1..=10 {
            drag.drag_to((step as f32 * 3.0, 0.0));
        }
        assert!(!drag.release((30.0, 0.0)));
    }

    #[test]
    fn test_release_without_press() {
        let mut drag = DragState::default();
        assert!(!drag.release((0.0, 0.0)));
    }
}
