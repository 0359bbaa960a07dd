mod button;

pub use button::{Button, ButtonAction};

use crate::application::GameState;

pub const BUTTON_WIDTH: f32 = 50.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_MARGIN: f32 = 10.0;
/// Distance from the bottom edge of the window to the top of the button bar
pub const BUTTON_BAR_OFFSET: f32 = 40.0;
/// Presses this close to the bottom edge never start a drag
pub const BUTTON_BAR_RESERVED: f32 = 50.0;

/// Create the button bar along the bottom-left edge.
/// Called every frame so the bar follows window resizes.
pub fn create_buttons(screen_height: f32) -> Vec<Button> {
    let y = screen_height - BUTTON_BAR_OFFSET;
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let x = BUTTON_MARGIN + (BUTTON_WIDTH + BUTTON_MARGIN) * i as f32;
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, action)
        })
        .collect()
}

/// Apply a button action to the game state
pub fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::StepBackward => state.step_backward(),
        ButtonAction::StepForward => state.step_forward(),
        ButtonAction::PlayBackward => state.toggle_play_backward(),
        ButtonAction::PlayForward => state.toggle_play_forward(),
        ButtonAction::SlowDown => state.decrease_speed(),
        ButtonAction::SpeedUp => state.increase_speed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_layout() {
        let buttons = create_buttons(600.0);
        assert_eq!(buttons.len(), 6);
        assert_eq!(buttons[0].position(), (10.0, 560.0));
        assert_eq!(buttons[1].position(), (70.0, 560.0));
        assert_eq!(buttons[5].position(), (310.0, 560.0));
        assert_eq!(buttons[3].action(), ButtonAction::PlayForward);
    }

    #[test]
    fn test_layout_follows_resize() {
        let buttons = create_buttons(900.0);
        assert!(buttons.iter().all(|b| b.position().1 == 860.0));
    }

    #[test]
    fn test_apply_action_steps() {
        let mut state = GameState::new();
        state.toggle_cell(0, 0);

        let state = apply_action(state, ButtonAction::StepForward);
        assert_eq!(state.engine.generation(), 1);

        let state = apply_action(state, ButtonAction::StepBackward);
        assert_eq!(state.engine.generation(), 0);
        assert_eq!(state.engine.get_cell(0, 0), 1);
    }

    #[test]
    fn test_apply_action_speed() {
        let state = apply_action(GameState::new(), ButtonAction::SpeedUp);
        assert_eq!(state.animation_speed, 1.5);
        let state = apply_action(state, ButtonAction::SlowDown);
        let state = apply_action(state, ButtonAction::SlowDown);
        assert_eq!(state.animation_speed, 0.5);
    }
}
