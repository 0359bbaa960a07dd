use super::SparseGrid;

/// History is the undo stack of grid snapshots.
/// One snapshot per forward step, taken before the step. Never pruned.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vec<SparseGrid>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the grid as it was before a forward step
    pub fn push(&mut self, snapshot: SparseGrid) {
        self.snapshots.push(snapshot);
    }

    /// Take the most recent snapshot back
    pub fn pop(&mut self) -> Option<SparseGrid> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn pop_returns_last_pushed() {
        let mut history = History::new();
        let first: SparseGrid = [(0, 0)].into_iter().collect();
        let second: SparseGrid = [(1, 1), (2, 2)].into_iter().collect();

        history.push(first.clone());
        history.push(second.clone());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop(), Some(second));
        assert_eq!(history.pop(), Some(first));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let mut history = History::new();
        let mut grid: SparseGrid = [(0, 0)].into_iter().collect();
        history.push(grid.clone());

        grid.toggle(0, 0);
        let restored = history.pop().unwrap();
        assert!(restored.get(0, 0).is_alive());
    }
}
