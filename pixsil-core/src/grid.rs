//! The pixel grid store.
//!
//! The grid is the only persistent entity in the engine; contours, corners,
//! and bridges are all derived from it on demand. Occupancy is stored densely
//! indexed by `y * width + x`, which keeps neighbor lookups O(1) for the
//! bounded grid sizes the editor supports.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{CoreError, CoreResult};
use crate::params::{MAX_GRID_EXTENT, MIN_GRID_EXTENT};

/// A bounded grid of optionally colored cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if either axis is outside
    /// `4..=128`.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        let range = MIN_GRID_EXTENT..=MAX_GRID_EXTENT;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    /// Whether the cell at `(x, y)` is painted. Out-of-bounds cells are
    /// unoccupied, never an error.
    #[must_use]
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.color_at(x, y).is_some()
    }

    /// Color of the cell at `(x, y)`, if painted.
    #[must_use]
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Paint every cell inside a `size`-wide square footprint centered at
    /// each point. Cells outside the grid are silently dropped; repainting
    /// overwrites the existing color.
    pub fn paint(&mut self, points: &[(i32, i32)], size: u32, color: Color) {
        self.apply(points, size, Some(color));
    }

    /// Clear every cell inside the same footprint as [`paint`](Self::paint).
    pub fn erase(&mut self, points: &[(i32, i32)], size: u32) {
        self.apply(points, size, None);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn apply(&mut self, points: &[(i32, i32)], size: u32, value: Option<Color>) {
        let size = i32::try_from(size.max(1)).unwrap_or(i32::MAX);
        let (w, h) = (self.width as i32, self.height as i32);
        for &(px, py) in points {
            let start_x = px.saturating_sub((size - 1) / 2);
            let start_y = py.saturating_sub((size - 1) / 2);
            // Intersect the footprint with the grid before iterating, so an
            // oversized brush touches at most width * height cells.
            let x0 = start_x.max(0);
            let y0 = start_y.max(0);
            let x1 = start_x.saturating_add(size).min(w);
            let y1 = start_y.saturating_add(size).min(h);
            for y in y0..y1 {
                for x in x0..x1 {
                    if let Some(i) = self.index(x, y) {
                        self.cells[i] = value;
                    }
                }
            }
        }
    }

    /// Remove all painted cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether no cell is painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of painted cells.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over painted cells as `(x, y, color)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let i = u32::try_from(i).ok()?;
            cell.map(|color| (i % self.width, i / self.width, color))
        })
    }

    /// Serialize the grid to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(CoreError::Serialization)
    }

    /// Deserialize a grid from JSON, re-validating dimensions and cell count.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the payload is
    /// internally inconsistent.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let grid: Self = serde_json::from_str(json)?;
        let range = MIN_GRID_EXTENT..=MAX_GRID_EXTENT;
        if !range.contains(&grid.width)
            || !range.contains(&grid.height)
            || grid.cells.len() != (grid.width * grid.height) as usize
        {
            return Err(CoreError::InvalidDimensions {
                width: grid.width,
                height: grid.height,
            });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_bounds() {
        assert!(Grid::new(4, 4).is_ok());
        assert!(Grid::new(128, 128).is_ok());
        assert!(Grid::new(3, 10).is_err());
        assert!(Grid::new(10, 129).is_err());
    }

    #[test]
    fn test_paint_and_erase_single_cell() {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(2, 3)], 1, Color::BLACK);
        assert!(grid.occupied(2, 3));
        assert_eq!(grid.color_at(2, 3), Some(Color::BLACK));

        grid.erase(&[(2, 3)], 1);
        assert!(!grid.occupied(2, 3));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_repaint_overwrites_color() {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(1, 1)], 1, Color::BLACK);
        grid.paint(&[(1, 1)], 1, Color::WHITE);
        assert_eq!(grid.color_at(1, 1), Some(Color::WHITE));
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn test_brush_footprint() {
        let mut grid = Grid::new(8, 8).expect("grid");
        // Size 3 covers a centered 3x3 square.
        grid.paint(&[(4, 4)], 3, Color::BLACK);
        assert_eq!(grid.painted_count(), 9);
        for y in 3..=5 {
            for x in 3..=5 {
                assert!(grid.occupied(x, y));
            }
        }
        assert!(!grid.occupied(2, 4));

        // Size 2 anchors at the point and extends right/down.
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(4, 4)], 2, Color::BLACK);
        assert_eq!(grid.painted_count(), 4);
        assert!(grid.occupied(4, 4));
        assert!(grid.occupied(5, 5));
        assert!(!grid.occupied(3, 3));
    }

    #[test]
    fn test_oversized_brush_clamps_to_grid() {
        let mut grid = Grid::new(8, 8).expect("grid");
        // A footprint far larger than the grid must terminate promptly and
        // paint every cell exactly once.
        grid.paint(&[(4, 4)], u32::MAX, Color::BLACK);
        assert_eq!(grid.painted_count(), 64);

        grid.erase(&[(0, 0)], 1000);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_out_of_bounds_points_are_noops() {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(-5, 2), (100, 100)], 1, Color::BLACK);
        assert!(grid.is_empty());

        // A footprint straddling the border paints only the inside part.
        grid.paint(&[(0, 0)], 3, Color::BLACK);
        assert_eq!(grid.painted_count(), 4);
        assert!(!grid.occupied(-1, -1));
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let mut grid = Grid::new(4, 4).expect("grid");
        grid.paint(&[(2, 0), (1, 1)], 1, Color::BLACK);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![(2, 0, Color::BLACK), (1, 1, Color::BLACK)]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut grid = Grid::new(6, 5).expect("grid");
        grid.paint(&[(1, 2)], 2, Color::new(10, 20, 30));
        let json = grid.to_json().expect("serialize");
        let back = Grid::from_json(&json).expect("deserialize");
        assert_eq!(back, grid);
    }

    #[test]
    fn test_from_json_rejects_inconsistent_payload() {
        // Cell count does not match the claimed dimensions.
        let json = r#"{"width":8,"height":8,"cells":[null,null]}"#;
        assert!(Grid::from_json(json).is_err());
    }
}
