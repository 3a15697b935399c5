//! Interactive editing: tools, strokes, and history wiring.
//!
//! The editor owns the grid, its history, and the smoothing parameters, and
//! translates pointer events into paint/erase mutations. Derived geometry is
//! not cached here; callers recompute it via [`Editor::geometry`] whenever
//! they need it (debouncing rapid edits is the caller's concern).

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CoreResult;
use crate::grid::Grid;
use crate::history::History;
use crate::params::SmoothParams;
use crate::pipeline::{self, Geometry};

/// Active brush tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Mark cells occupied with the current color.
    #[default]
    Paint,
    /// Clear cells.
    Erase,
}

/// Stroke interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Drawing,
}

/// Grid editor with stroke handling and undo/redo.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    history: History,
    params: SmoothParams,
    tool: Tool,
    color: Color,
    phase: Phase,
    /// Cell where the current stroke began; anchors shift-drag axis lock.
    origin: Option<(i32, i32)>,
    /// Remembered across strokes so shift+click can draw a connecting line.
    last_painted: Option<(i32, i32)>,
}

impl Editor {
    /// Create an editor over an empty grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions or parameters are out of
    /// range.
    pub fn new(width: u32, height: u32, params: SmoothParams) -> CoreResult<Self> {
        params.validate()?;
        Ok(Self {
            grid: Grid::new(width, height)?,
            history: History::new(),
            params,
            tool: Tool::Paint,
            color: Color::BLACK,
            phase: Phase::Idle,
            origin: None,
            last_painted: None,
        })
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current smoothing parameters.
    #[must_use]
    pub fn params(&self) -> &SmoothParams {
        &self.params
    }

    /// Replace the smoothing parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the new parameters are out of range; the old ones
    /// are kept in that case.
    pub fn set_params(&mut self, params: SmoothParams) -> CoreResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The active paint color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the active paint color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Begin a stroke at cell coordinates.
    ///
    /// Checkpoints history on entry. With `shift` held and a remembered
    /// last-painted cell, paints the whole integer line from that cell to the
    /// clicked one instead of a single point.
    pub fn pointer_down(&mut self, x: i32, y: i32, shift: bool) {
        self.history.checkpoint(&self.grid);
        self.phase = Phase::Drawing;
        self.origin = Some((x, y));

        match (shift, self.last_painted) {
            (true, Some(last)) => {
                let cells = line_cells(last, (x, y));
                self.apply(&cells);
            }
            _ => self.apply(&[(x, y)]),
        }
        self.last_painted = Some((x, y));
    }

    /// Continue the current stroke. Ignored while idle.
    ///
    /// With `shift` held, movement locks to the axis of greatest displacement
    /// from the stroke's origin cell. Cells between the previous and current
    /// position are filled so fast drags leave no gaps.
    pub fn pointer_move(&mut self, x: i32, y: i32, shift: bool) {
        if self.phase != Phase::Drawing {
            return;
        }
        let target = match (shift, self.origin) {
            (true, Some((ox, oy))) => {
                if (x - ox).abs() >= (y - oy).abs() {
                    (x, oy)
                } else {
                    (ox, y)
                }
            }
            _ => (x, y),
        };
        if let Some(last) = self.last_painted {
            let cells = line_cells(last, target);
            self.apply(&cells);
        } else {
            self.apply(&[target]);
        }
        self.last_painted = Some(target);
    }

    /// End the current stroke (pointer up or leave).
    pub fn pointer_up(&mut self) {
        self.phase = Phase::Idle;
        self.origin = None;
    }

    /// Clear the whole grid (undoable).
    pub fn clear(&mut self) {
        self.history.checkpoint(&self.grid);
        self.grid.clear();
        self.last_painted = None;
    }

    /// Undo the most recent stroke. Returns `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    /// Redo the most recently undone stroke. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    /// Recompute derived geometry for the current grid and parameters.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        pipeline::derive(&self.grid, &self.params)
    }

    fn apply(&mut self, points: &[(i32, i32)]) {
        match self.tool {
            Tool::Paint => self.grid.paint(points, self.params.brush_size, self.color),
            Tool::Erase => self.grid.erase(points, self.params.brush_size),
        }
    }
}

/// Cells on the integer line from `from` to `to`, inclusive (Bresenham).
#[must_use]
pub fn line_cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::new();
    loop {
        cells.push((x, y));
        if (x, y) == (x1, y1) {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
