mod camera;
mod game_state;

pub use camera::{Camera, DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE};
pub use game_state::{GameState, Playback, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_STEP};
