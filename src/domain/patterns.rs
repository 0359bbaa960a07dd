use rand::Rng;

use super::{Coord, LifeEngine};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<Coord>, // Offsets of alive cells from the top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<Coord>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// "Name - description", as shown after placement
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }

    /// Place pattern with its top-left corner at (x, y).
    /// Only dead target cells are toggled, so existing life is kept.
    /// Cells that would land past the i64 edge are skipped.
    pub fn place_on(&self, engine: &mut LifeEngine, x: i64, y: i64) {
        for &(dx, dy) in &self.cells {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            if engine.get_cell(cx, cy) == 0 {
                engine.toggle_cell(cx, cy);
            }
        }
    }

    /// Place pattern centered on (x, y)
    pub fn place_centered(&self, engine: &mut LifeEngine, x: i64, y: i64) {
        self.place_on(
            engine,
            x.saturating_sub(self.width / 2),
            y.saturating_sub(self.height / 2),
        );
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight spaceship, travels horizontally
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Random fill of a `width` x `height` box, each cell alive with
    /// probability `density`
    pub fn random_soup<R: Rng>(rng: &mut R, width: i64, height: i64, density: f64) -> Pattern {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|_| rng.random_bool(density))
            .collect();
        let mut soup = Pattern::new("Soup", "Random fill", cells);
        soup.width = width.max(1);
        soup.height = height.max(1);
        soup
    }

    /// Presets in the order bound to number keys 1-7
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_label_includes_description() {
        assert_eq!(presets::glider().label(), "Glider - Spaceship (period 4)");
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let mut engine = LifeEngine::new();
        presets::block().place_on(&mut engine, -10, 5);

        assert_eq!(engine.population(), 4);
        assert_eq!(engine.get_cell(-10, 5), 1);
        assert_eq!(engine.get_cell(-9, 6), 1);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.history_len(), 0);
    }

    #[test]
    fn test_place_on_keeps_existing_life() {
        let mut engine = LifeEngine::new();
        engine.toggle_cell(0, 0);
        presets::block().place_on(&mut engine, 0, 0);
        assert_eq!(engine.get_cell(0, 0), 1);
        assert_eq!(engine.population(), 4);
    }

    #[test]
    fn test_place_centered() {
        let mut engine = LifeEngine::new();
        presets::blinker().place_centered(&mut engine, 0, 0);
        assert_eq!(engine.get_cell(-1, 0), 1);
        assert_eq!(engine.get_cell(0, 0), 1);
        assert_eq!(engine.get_cell(1, 0), 1);
    }

    #[test]
    fn test_place_on_skips_cells_past_edge() {
        let mut engine = LifeEngine::new();
        presets::blinker().place_on(&mut engine, i64::MAX - 1, 0);
        assert_eq!(engine.population(), 2);
        assert_eq!(engine.get_cell(i64::MIN, 0), 0);
    }

    #[test]
    fn test_random_soup_is_reproducible() {
        let a = presets::random_soup(&mut StdRng::seed_from_u64(7), 16, 16, 0.4);
        let b = presets::random_soup(&mut StdRng::seed_from_u64(7), 16, 16, 0.4);
        assert_eq!(a.cells, b.cells);
        assert!(a.cells.iter().all(|&(x, y)| (0..16).contains(&x) && (0..16).contains(&y)));
    }

    #[test]
    fn test_random_soup_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(presets::random_soup(&mut rng, 8, 8, 0.0).cells.is_empty());
        assert_eq!(presets::random_soup(&mut rng, 8, 8, 1.0).cells.len(), 64);
    }

    #[test]
    fn test_all_patterns_have_unique_names() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
