mod cell;
mod grid;
mod history;
mod engine;
mod patterns;

pub use cell::Cell;
pub use grid::{Coord, SparseGrid, NEIGHBOR_OFFSETS, neighbors};
pub use history::History;
pub use engine::LifeEngine;
pub use patterns::{Pattern, presets};
