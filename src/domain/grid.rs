use std::collections::{HashMap, HashSet};

use super::Cell;

/// Signed grid coordinate `(x, y)`. The plane is unbounded in every direction.
pub type Coord = (i64, i64);

/// Offsets of the 8 cells at Chebyshev distance 1
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Coordinate of the neighbor at `(dx, dy)`, or `None` past the i64 edge.
/// Unrepresentable cells are always dead; the plane does not wrap.
#[inline]
fn offset((x, y): Coord, (dx, dy): (i64, i64)) -> Option<Coord> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Iterate the representable neighbors of a coordinate (8 away from the i64 edges)
pub fn neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |delta| offset(coord, delta))
}

/// SparseGrid stores cell states keyed by coordinate.
/// Any coordinate missing from the map is dead. Entries holding
/// `Cell::Dead` are allowed (a cell toggled twice keeps its entry) and
/// read exactly like absent ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<Coord, Cell>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cell at position, dead when absent
    pub fn get(&self, x: i64, y: i64) -> Cell {
        self.cells.get(&(x, y)).copied().unwrap_or(Cell::Dead)
    }

    /// Flip the cell at position
    pub fn toggle(&mut self, x: i64, y: i64) {
        let cell = self.cells.entry((x, y)).or_insert(Cell::Dead);
        *cell = cell.toggle();
    }

    /// Count live neighbors, never including the cell itself
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        neighbors((x, y))
            .filter(|&(nx, ny)| self.get(nx, ny).is_alive())
            .count() as u8
    }

    /// Iterate coordinates of alive cells, in no particular order
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(&coord, _)| coord)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Number of stored entries, dead ones included
    pub fn stored_entries(&self) -> usize {
        self.cells.len()
    }

    /// Every alive cell plus its 8 neighbors. Nothing outside this set can
    /// be alive after the next step.
    pub fn candidates(&self) -> HashSet<Coord> {
        let mut candidates = HashSet::with_capacity(self.cells.len() * 9);
        for coord in self.live_cells() {
            candidates.insert(coord);
            candidates.extend(neighbors(coord));
        }
        candidates
    }

    /// Pure evolution: reads only `self`, returns a new grid holding alive
    /// cells only.
    pub fn evolve(&self) -> Self {
        let cells = self
            .candidates()
            .into_iter()
            .filter(|&(x, y)| {
                self.get(x, y)
                    .evolve(self.count_live_neighbors(x, y))
                    .is_alive()
            })
            .map(|coord| (coord, Cell::Alive))
            .collect();

        Self { cells }
    }
}

impl FromIterator<Coord> for SparseGrid {
    /// Build a grid with the given coordinates alive
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|coord| (coord, Cell::Alive)).collect(),
        }
    }
}
