//! The simulation engine: sparse grid, generation counter and undo history.

use tracing::{debug, trace};

use super::{Coord, History, SparseGrid};

/// LifeEngine owns one independent simulation.
/// All mutation goes through its methods; there is no shared global state,
/// so any number of engines can coexist.
#[derive(Clone, Debug, Default)]
pub struct LifeEngine {
    grid: SparseGrid,
    generation: u64,
    history: History,
}

impl LifeEngine {
    /// Create an empty engine at generation 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the cell at (x, y). Leaves history and generation untouched.
    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        self.grid.toggle(x, y);
    }

    /// 1 if the cell is alive, 0 otherwise
    pub fn get_cell(&self, x: i64, y: i64) -> u8 {
        self.grid.get(x, y).as_bit()
    }

    /// Live cells among the 8 neighbors of (x, y)
    pub fn count_neighbors(&self, x: i64, y: i64) -> u8 {
        self.grid.count_live_neighbors(x, y)
    }

    /// Advance one generation.
    ///
    /// The pre-step grid is pushed onto history first, then the new grid is
    /// computed from that grid alone and swapped in. The counter advances
    /// even if nothing is left alive.
    pub fn next_generation(&mut self) {
        let next = self.grid.evolve();
        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            history = self.history.len(),
            "advanced"
        );
    }

    /// Step back one generation. Silently does nothing at generation 0 or
    /// with an empty history.
    pub fn previous_generation(&mut self) {
        if self.generation == 0 {
            debug!("rewind ignored at generation 0");
            return;
        }
        let Some(snapshot) = self.history.pop() else {
            debug!(generation = self.generation, "rewind ignored, history empty");
            return;
        };

        self.grid = snapshot;
        self.generation -= 1;

        trace!(
            generation = self.generation,
            history = self.history.len(),
            "rewound"
        );
    }

    /// Reset to a fresh engine: empty grid, generation 0, no history
    pub fn clear(&mut self) {
        self.grid = SparseGrid::new();
        self.generation = 0;
        self.history.clear();
        debug!("engine cleared");
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Alive coordinates, for rendering
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.live_cells()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Number of forward steps that can still be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_rewind(&self) -> bool {
        self.generation > 0 && !self.history.is_empty()
    }

    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_state() {
        let engine = LifeEngine::new();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.population(), 0);
        assert!(!engine.can_rewind());
    }

    #[test]
    fn test_toggle_does_not_touch_history() {
        let mut engine = LifeEngine::new();
        engine.toggle_cell(2, 2);
        assert_eq!(engine.get_cell(2, 2), 1);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_history_tracks_unrewound_steps() {
        let mut engine = LifeEngine::new();
        engine.toggle_cell(0, 0);

        for _ in 0..3 {
            engine.next_generation();
        }
        assert_eq!(engine.history_len(), 3);

        engine.previous_generation();
        assert_eq!(engine.history_len(), 2);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_rewind_restores_dead_entries_exactly() {
        let mut engine = LifeEngine::new();
        engine.toggle_cell(4, 4);
        engine.toggle_cell(4, 4);
        engine.toggle_cell(0, 0);
        let before = engine.grid().clone();
        assert_eq!(before.stored_entries(), 2);

        engine.next_generation();
        assert_eq!(engine.grid().stored_entries(), 0);

        engine.previous_generation();
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = LifeEngine::new();
        engine.toggle_cell(0, 0);
        engine.toggle_cell(1, 0);
        engine.toggle_cell(2, 0);
        engine.next_generation();

        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut a = LifeEngine::new();
        let b = LifeEngine::new();
        a.toggle_cell(1, 1);
        a.next_generation();
        assert_eq!(b.generation(), 0);
        assert_eq!(b.get_cell(1, 1), 0);
    }
}
