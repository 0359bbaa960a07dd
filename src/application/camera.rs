pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const MIN_CELL_SIZE: f32 = 5.0;
pub const MAX_CELL_SIZE: f32 = 100.0;
/// Cell size change per mouse wheel notch
pub const ZOOM_STEP: f32 = 2.0;

/// Camera manages viewport pan and zoom over the unbounded grid.
/// Zoom is expressed directly as the on-screen size of one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_size: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(cell_size: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            cell_size: cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
        }
    }

    pub fn zoom_in(&mut self) {
        self.cell_size = (self.cell_size + ZOOM_STEP).min(MAX_CELL_SIZE);
    }

    pub fn zoom_out(&mut self) {
        self.cell_size = (self.cell_size - ZOOM_STEP).max(MIN_CELL_SIZE);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to grid coordinates.
    /// Floors, so points left of or above the origin map to negative cells.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i64, i64) {
        let grid_x = ((screen_x - self.offset_x) / self.cell_size).floor() as i64;
        let grid_y = ((screen_y - self.offset_y) / self.cell_size).floor() as i64;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to the screen position of the cell's top-left corner
    pub fn grid_to_screen(&self, grid_x: i64, grid_y: i64) -> (f32, f32) {
        let screen_x = grid_x as f32 * self.cell_size + self.offset_x;
        let screen_y = grid_y as f32 * self.cell_size + self.offset_y;
        (screen_x, screen_y)
    }

    /// Grid bounds covering the viewport, padded by one cell on each side
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32) -> (i64, i64, i64, i64) {
        let (min_x, min_y) = self.screen_to_grid(0.0, 0.0);
        let (max_x, max_y) = self.screen_to_grid(viewport_width, viewport_height);
        (min_x - 1, min_y - 1, max_x + 1, max_y + 1)
    }

    /// Grid cell at the center of the viewport
    pub fn center_cell(&self, viewport_width: f32, viewport_height: f32) -> (i64, i64) {
        self.screen_to_grid(viewport_width / 2.0, viewport_height / 2.0)
    }

    /// Reset pan, keep the zoom level
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_positive() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_grid(100.0, 80.0), (5, 4));
        assert_eq!(camera.screen_to_grid(19.9, 0.0), (0, 0));
    }

    #[test]
    fn test_screen_to_grid_floors_negative() {
        let mut camera = Camera::new();
        camera.pan(50.0, 50.0);
        assert_eq!(camera.screen_to_grid(49.0, 30.0), (-1, -1));
        assert_eq!(camera.screen_to_grid(10.0, 50.0), (-2, 0));
    }

    #[test]
    fn test_grid_to_screen_inverts() {
        let mut camera = Camera::new();
        camera.pan(-35.0, 12.0);
        for (gx, gy) in [(0, 0), (-3, 7), (12, -9)] {
            let (sx, sy) = camera.grid_to_screen(gx, gy);
            assert_eq!(camera.screen_to_grid(sx + 1.0, sy + 1.0), (gx, gy));
        }
    }

    #[test]
    fn test_zoom_clamps() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in();
        }
        assert_eq!(camera.cell_size, MAX_CELL_SIZE);

        for _ in 0..100 {
            camera.zoom_out();
        }
        assert_eq!(camera.cell_size, MIN_CELL_SIZE);
    }

    #[test]
    fn test_with_cell_size_clamps() {
        assert_eq!(Camera::with_cell_size(1.0).cell_size, MIN_CELL_SIZE);
        assert_eq!(Camera::with_cell_size(500.0).cell_size, MAX_CELL_SIZE);
    }

    #[test]
    fn test_visible_bounds_padding() {
        let camera = Camera::new();
        assert_eq!(camera.visible_bounds(200.0, 100.0), (-1, -1, 11, 6));
    }
}
