//! Diagonal-gap bridge synthesis.
//!
//! Two cells that touch only at a corner (a checkerboard pattern) trace as
//! separate contours and would render visually pinched. A bridge patches the
//! pinch: at the shared lattice point, the two empty quadrants each receive a
//! fillet wedge so the diagonal neighbors read as connected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::corner::CornerMode;
use crate::grid::Grid;
use crate::hash::coord_hash;
use crate::params::SmoothParams;

/// Which gap quadrant at a lattice point receives a fillet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapQuadrant {
    /// Fillet in the upper-right empty quadrant.
    TopRight,
    /// Fillet in the lower-left empty quadrant.
    BottomLeft,
    /// Fillet in the lower-right empty quadrant.
    BottomRight,
    /// Fillet in the upper-left empty quadrant.
    TopLeft,
}

/// A fillet filling one quadrant of a diagonal-only touch.
///
/// Bridges always come in pairs sharing the same lattice point, one per
/// empty quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    /// Lattice x of the shared corner.
    pub x: i32,
    /// Lattice y of the shared corner.
    pub y: i32,
    /// Which gap corner to fillet.
    pub quadrant: GapQuadrant,
}

/// Detect diagonal-only touches and synthesize paired fillets.
///
/// Returns the fillet records plus the set of lattice points they occupy;
/// vertices at those points are excluded from corner rounding. Each decision
/// is keyed on `(X, Y, seed+1)` for the positive diagonal (top-left with
/// bottom-right occupied) and `(X, Y, seed+2)` for the negative one, so
/// bridge placement reshuffles independently of corner rounding under the
/// same seed.
///
/// Skipped entirely in `outer` corner mode (bridges only make sense when
/// concave geometry is being smoothed) and on empty grids.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn synthesize(grid: &Grid, params: &SmoothParams) -> (Vec<Bridge>, HashSet<(i32, i32)>) {
    let mut bridges = Vec::new();
    let mut points = HashSet::new();

    if params.corner_mode == CornerMode::Outer || grid.is_empty() {
        return (bridges, points);
    }

    let ratio = f64::from(params.rounded_ratio);
    for y in 1..grid.height() as i32 {
        for x in 1..grid.width() as i32 {
            let top_left = grid.occupied(x - 1, y - 1);
            let top_right = grid.occupied(x, y - 1);
            let bottom_left = grid.occupied(x - 1, y);
            let bottom_right = grid.occupied(x, y);

            if top_left
                && bottom_right
                && !top_right
                && !bottom_left
                && coord_hash(x, y, params.seed.wrapping_add(1)) < ratio
            {
                bridges.push(Bridge {
                    x,
                    y,
                    quadrant: GapQuadrant::TopRight,
                });
                bridges.push(Bridge {
                    x,
                    y,
                    quadrant: GapQuadrant::BottomLeft,
                });
                points.insert((x, y));
            } else if top_right
                && bottom_left
                && !top_left
                && !bottom_right
                && coord_hash(x, y, params.seed.wrapping_add(2)) < ratio
            {
                bridges.push(Bridge {
                    x,
                    y,
                    quadrant: GapQuadrant::BottomRight,
                });
                bridges.push(Bridge {
                    x,
                    y,
                    quadrant: GapQuadrant::TopLeft,
                });
                points.insert((x, y));
            }
        }
    }

    (bridges, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn grid_with(cells: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(cells, 1, Color::BLACK);
        grid
    }

    fn always(mode: CornerMode) -> SmoothParams {
        SmoothParams {
            rounded_ratio: 1.0,
            corner_mode: mode,
            ..SmoothParams::default()
        }
    }

    #[test]
    fn test_positive_diagonal_emits_paired_fillets() {
        let grid = grid_with(&[(0, 0), (1, 1)]);
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Random));
        assert_eq!(
            bridges,
            vec![
                Bridge {
                    x: 1,
                    y: 1,
                    quadrant: GapQuadrant::TopRight
                },
                Bridge {
                    x: 1,
                    y: 1,
                    quadrant: GapQuadrant::BottomLeft
                },
            ]
        );
        assert!(points.contains(&(1, 1)));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_negative_diagonal_emits_paired_fillets() {
        let grid = grid_with(&[(1, 0), (0, 1)]);
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Random));
        assert_eq!(
            bridges,
            vec![
                Bridge {
                    x: 1,
                    y: 1,
                    quadrant: GapQuadrant::BottomRight
                },
                Bridge {
                    x: 1,
                    y: 1,
                    quadrant: GapQuadrant::TopLeft
                },
            ]
        );
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_solid_block_has_no_bridges() {
        let grid = grid_with(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Random));
        assert!(bridges.is_empty());
        assert!(points.is_empty());
    }

    #[test]
    fn test_three_cells_do_not_bridge() {
        // Diagonal pair plus one of the off-diagonal cells: no longer a
        // diagonal-only touch.
        let grid = grid_with(&[(0, 0), (1, 1), (1, 0)]);
        let (bridges, _) = synthesize(&grid, &always(CornerMode::Random));
        assert!(bridges.is_empty());
    }

    #[test]
    fn test_outer_mode_skips_bridges() {
        let grid = grid_with(&[(0, 0), (1, 1)]);
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Outer));
        assert!(bridges.is_empty());
        assert!(points.is_empty());
    }

    #[test]
    fn test_inner_mode_keeps_bridges() {
        let grid = grid_with(&[(0, 0), (1, 1)]);
        let (bridges, _) = synthesize(&grid, &always(CornerMode::Inner));
        assert_eq!(bridges.len(), 2);
    }

    #[test]
    fn test_empty_grid_has_no_bridges() {
        let grid = Grid::new(8, 8).expect("grid");
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Random));
        assert!(bridges.is_empty());
        assert!(points.is_empty());
    }

    #[test]
    fn test_ratio_zero_suppresses_bridges() {
        let grid = grid_with(&[(0, 0), (1, 1)]);
        let params = SmoothParams {
            rounded_ratio: 0.0,
            ..SmoothParams::default()
        };
        let (bridges, _) = synthesize(&grid, &params);
        assert!(bridges.is_empty());
    }

    #[test]
    fn test_placement_is_deterministic() {
        let grid = grid_with(&[(0, 0), (1, 1), (3, 3), (4, 4), (6, 2), (5, 3)]);
        let params = SmoothParams {
            rounded_ratio: 0.6,
            seed: 11,
            ..SmoothParams::default()
        };
        let (a, pa) = synthesize(&grid, &params);
        let (b, pb) = synthesize(&grid, &params);
        assert_eq!(a, b);
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_checkerboard_emits_bridge_per_touch() {
        // A 3-cell staircase touches diagonally twice.
        let grid = grid_with(&[(0, 0), (1, 1), (2, 2)]);
        let (bridges, points) = synthesize(&grid, &always(CornerMode::Random));
        assert_eq!(bridges.len(), 4);
        assert!(points.contains(&(1, 1)));
        assert!(points.contains(&(2, 2)));
    }
}
