//! The derived-geometry pipeline.
//!
//! Contours, rounding decisions, and bridges are a pure function of the grid
//! contents and the smoothing parameters. There is no incremental update and
//! no caching: every recompute starts from scratch, which keeps the pipeline
//! trivially testable and free of cross-step state coupling. All of it runs
//! synchronously on the caller's thread.

use std::collections::HashSet;

use crate::bridge::{self, Bridge};
use crate::contour::{self, Contour};
use crate::corner;
use crate::grid::Grid;
use crate::params::SmoothParams;

/// All geometry derived from one `(grid, parameters)` snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geometry {
    /// Closed boundary loops, outer silhouettes and holes alike.
    pub contours: Vec<Contour>,
    /// Rounded vertices keyed by `(contour index, edge index)`.
    pub rounded: HashSet<(usize, usize)>,
    /// Diagonal-gap fillets, in detection order.
    pub bridges: Vec<Bridge>,
    /// Lattice points owned by bridges, excluded from corner rounding.
    pub bridge_points: HashSet<(i32, i32)>,
}

/// Recompute all derived geometry from scratch.
#[must_use]
pub fn derive(grid: &Grid, params: &SmoothParams) -> Geometry {
    let contours = contour::trace(grid);
    let (bridges, bridge_points) = bridge::synthesize(grid, params);
    let rounded = corner::select_rounded(&contours, &bridge_points, params);

    tracing::debug!(
        contours = contours.len(),
        rounded = rounded.len(),
        bridges = bridges.len(),
        "derived geometry"
    );

    Geometry {
        contours,
        rounded,
        bridges,
        bridge_points,
    }
}
