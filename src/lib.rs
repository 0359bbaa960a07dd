// Domain layer - simulation engine
pub mod domain;

// Application layer - playback and viewport
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Coord, LifeEngine, Pattern, SparseGrid, presets};
pub use application::{Camera, GameState, Playback};
pub use config::{Settings, SettingsError};
