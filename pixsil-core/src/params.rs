//! Smoothing parameters and on-screen cell metrics.

use serde::{Deserialize, Serialize};

use crate::corner::CornerMode;
use crate::error::{CoreError, CoreResult};

/// Smallest supported grid extent per axis.
pub const MIN_GRID_EXTENT: u32 = 4;

/// Largest supported grid extent per axis.
pub const MAX_GRID_EXTENT: u32 = 128;

/// The longer grid dimension maps to this many on-screen pixels.
pub const MAX_DISPLAY_EXTENT: f32 = 512.0;

/// Parameters consumed by the geometry pipeline on every recompute.
///
/// All of these are external configuration; the engine reads them but never
/// persists them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothParams {
    /// Fillet radius as a fraction of the smaller cell dimension.
    pub roundness: f32,
    /// Probability threshold for per-vertex and per-lattice-point decisions.
    pub rounded_ratio: f32,
    /// Which vertex classes are eligible for rounding.
    pub corner_mode: CornerMode,
    /// Seed for the deterministic coordinate hash.
    pub seed: u32,
    /// Cell width to height multiplier.
    pub aspect: f32,
    /// Brush footprint in cells per side, `1..=128`.
    pub brush_size: u32,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            roundness: 0.35,
            rounded_ratio: 1.0,
            corner_mode: CornerMode::Random,
            seed: 0,
            aspect: 1.0,
            brush_size: 1,
        }
    }
}

impl SmoothParams {
    /// Check all values against their documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] naming the first offending
    /// field.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.roundness) {
            return Err(CoreError::InvalidParameter {
                name: "roundness",
                value: f64::from(self.roundness),
            });
        }
        if !(0.0..=1.0).contains(&self.rounded_ratio) {
            return Err(CoreError::InvalidParameter {
                name: "rounded_ratio",
                value: f64::from(self.rounded_ratio),
            });
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(CoreError::InvalidParameter {
                name: "aspect",
                value: f64::from(self.aspect),
            });
        }
        if !(1..=MAX_GRID_EXTENT).contains(&self.brush_size) {
            return Err(CoreError::InvalidParameter {
                name: "brush_size",
                value: f64::from(self.brush_size),
            });
        }
        Ok(())
    }
}

/// On-screen pixel dimensions of a single cell.
///
/// Derived from the grid extents and the aspect multiplier, scaled so the
/// longer on-screen grid dimension equals [`MAX_DISPLAY_EXTENT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Cell width in pixels.
    pub cell_w: f32,
    /// Cell height in pixels.
    pub cell_h: f32,
    grid_w: u32,
    grid_h: u32,
}

impl CellMetrics {
    /// Compute cell metrics for a grid and aspect multiplier.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(grid_w: u32, grid_h: u32, aspect: f32) -> Self {
        let gw = grid_w.max(1) as f32;
        let gh = grid_h.max(1) as f32;
        let scale = MAX_DISPLAY_EXTENT / (gw * aspect).max(gh);
        Self {
            cell_w: scale * aspect,
            cell_h: scale,
            grid_w,
            grid_h,
        }
    }

    /// On-screen width of the whole grid in pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_width(&self) -> f32 {
        self.grid_w as f32 * self.cell_w
    }

    /// On-screen height of the whole grid in pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_height(&self) -> f32 {
        self.grid_h as f32 * self.cell_h
    }

    /// The smaller cell dimension in pixels.
    #[must_use]
    pub fn min_cell(&self) -> f32 {
        self.cell_w.min(self.cell_h)
    }

    /// Fillet radius in pixels for a roundness fraction.
    ///
    /// Capped at half the smaller cell dimension so adjacent fillets on a
    /// one-cell feature cannot overlap.
    #[must_use]
    pub fn fillet_radius(&self, roundness: f32) -> f32 {
        let min = self.min_cell();
        (roundness * min).min(min / 2.0)
    }
}
