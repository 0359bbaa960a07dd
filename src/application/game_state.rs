use crate::domain::{LifeEngine, Pattern};

pub const DEFAULT_SPEED: f32 = 1.0;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 100.0;
pub const SPEED_STEP: f32 = 0.5;

/// Which way timed playback is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Paused,
    Forward,
    Backward,
}

/// GameState orchestrates the simulation.
/// Owns the engine and drives it forward or backward on a timer.
pub struct GameState {
    pub engine: LifeEngine,
    pub playback: Playback,
    /// Generations per second while playing
    pub animation_speed: f32,
    pub update_timer: f32,
    /// Label of the most recently placed pattern
    pub last_placed: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_SPEED)
    }

    pub fn with_speed(speed: f32) -> Self {
        Self {
            engine: LifeEngine::new(),
            playback: Playback::Paused,
            animation_speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            update_timer: 0.0,
            last_placed: None,
        }
    }

    pub fn is_playing_forward(&self) -> bool {
        self.playback == Playback::Forward
    }

    pub fn is_playing_backward(&self) -> bool {
        self.playback == Playback::Backward
    }

    pub fn step_forward(mut self) -> Self {
        self.engine.next_generation();
        self
    }

    pub fn step_backward(mut self) -> Self {
        self.engine.previous_generation();
        self
    }

    /// Start or stop forward playback; starting it stops backward playback
    pub fn toggle_play_forward(self) -> Self {
        self.toggle_playback(Playback::Forward)
    }

    /// Start or stop backward playback; starting it stops forward playback
    pub fn toggle_play_backward(self) -> Self {
        self.toggle_playback(Playback::Backward)
    }

    fn toggle_playback(mut self, direction: Playback) -> Self {
        self.playback = if self.playback == direction {
            Playback::Paused
        } else {
            direction
        };
        self.update_timer = 0.0;
        self
    }

    pub fn increase_speed(self) -> Self {
        self.adjust_speed(SPEED_STEP)
    }

    pub fn decrease_speed(self) -> Self {
        self.adjust_speed(-SPEED_STEP)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.animation_speed = (self.animation_speed + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Clear the engine and stop playback
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.playback = Playback::Paused;
        self.update_timer = 0.0;
        self.last_placed = None;
        self
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        self.engine.toggle_cell(x, y);
    }

    pub fn place_pattern(&mut self, pattern: &Pattern, x: i64, y: i64) {
        pattern.place_centered(&mut self.engine, x, y);
        self.last_placed = Some(pattern.label());
    }

    /// Advance the playback clock by one frame.
    /// Steps the engine at most once per frame when the interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.playback == Playback::Paused {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.animation_speed;

        if self.update_timer >= update_interval {
            match self.playback {
                Playback::Forward => self.engine.next_generation(),
                Playback::Backward => self.engine.previous_generation(),
                Playback::Paused => {}
            }
            self.update_timer = 0.0;
        }

        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
