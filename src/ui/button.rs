use macroquad::prelude::*;

/// What a button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StepBackward,
    StepForward,
    PlayBackward,
    PlayForward,
    SlowDown,
    SpeedUp,
}

impl ButtonAction {
    /// Bar order, left to right
    pub const ALL: [ButtonAction; 6] = [
        ButtonAction::StepBackward,
        ButtonAction::StepForward,
        ButtonAction::PlayBackward,
        ButtonAction::PlayForward,
        ButtonAction::SlowDown,
        ButtonAction::SpeedUp,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::StepBackward => "<",
            ButtonAction::StepForward => "->",
            ButtonAction::PlayBackward => "<=",
            ButtonAction::PlayForward => "=>",
            ButtonAction::SlowDown => "-",
            ButtonAction::SpeedUp => "+",
        }
    }
}

/// Button UI component with hover and click detection
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(100, 100, 100, 255),
            hover_color: Color::from_rgba(150, 150, 150, 255),
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(
            self.x,
            self.y,
            self.width,
            self.height,
            2.0,
            Color::from_rgba(200, 200, 200, 255),
        );

        let label = self.label();
        let text_size = measure_text(label, None, 24, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            24.0,
            WHITE,
        );
    }
}
