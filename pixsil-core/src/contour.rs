//! Contour tracing over the occupancy grid.
//!
//! Every occupied cell contributes one directed boundary edge per side that
//! faces empty space (or the grid border). Chaining those edges end-to-start
//! yields closed loops: outer silhouettes wind clockwise in screen
//! coordinates, hole boundaries wind the opposite way, and even-odd filling
//! makes holes subtract without any winding bookkeeping.
//!
//! Edges and contours are derived state. They are recomputed in full on
//! every pass and never persisted across edits.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Which side of an occupied cell a boundary edge borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Neighbor above is empty.
    Top,
    /// Neighbor to the right is empty.
    Right,
    /// Neighbor below is empty.
    Bottom,
    /// Neighbor to the left is empty.
    Left,
}

/// A directed unit segment on the lattice between occupied and empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Start lattice point.
    pub start: (i32, i32),
    /// End lattice point.
    pub end: (i32, i32),
    /// The cell side this edge borders.
    pub side: Side,
}

impl Edge {
    /// Unit direction vector from start to end.
    #[must_use]
    pub fn direction(&self) -> (i32, i32) {
        (self.end.0 - self.start.0, self.end.1 - self.start.1)
    }
}

/// An ordered sequence of boundary edges chained head-to-tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    edges: Vec<Edge>,
}

impl Contour {
    /// The edges of this contour in traversal order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the contour has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the last edge returns to the first edge's start point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => last.end == first.start,
            _ => false,
        }
    }

    /// The vertex shared by edge `i` and its successor (edge `i`'s endpoint).
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn vertex(&self, i: usize) -> (i32, i32) {
        self.edges[i].end
    }
}

/// Emit one boundary edge per occupied-cell side facing empty space.
///
/// Orientations are fixed so chained loops wind clockwise around filled
/// regions: top runs left to right, right runs top to bottom, bottom runs
/// right to left, left runs bottom to top. Cells are visited in row-major
/// order, which keeps the emission order (and therefore contour ordering)
/// stable for a given grid.
#[allow(clippy::cast_possible_wrap)]
fn boundary_edges(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !grid.occupied(x, y) {
                continue;
            }
            if !grid.occupied(x, y - 1) {
                edges.push(Edge {
                    start: (x, y),
                    end: (x + 1, y),
                    side: Side::Top,
                });
            }
            if !grid.occupied(x + 1, y) {
                edges.push(Edge {
                    start: (x + 1, y),
                    end: (x + 1, y + 1),
                    side: Side::Right,
                });
            }
            if !grid.occupied(x, y + 1) {
                edges.push(Edge {
                    start: (x + 1, y + 1),
                    end: (x, y + 1),
                    side: Side::Bottom,
                });
            }
            if !grid.occupied(x - 1, y) {
                edges.push(Edge {
                    start: (x, y + 1),
                    end: (x, y),
                    side: Side::Left,
                });
            }
        }
    }
    edges
}

/// Trace all boundary contours of the grid.
///
/// Chains unused edges greedily by exact start-point equality until each loop
/// closes. Chains of length two or less are discarded as degenerate. A chain
/// that cannot close (no continuing edge found) is dropped with a debug log;
/// with a consistent edge generator this indicates a data-quality problem,
/// not an error condition.
#[must_use]
pub fn trace(grid: &Grid) -> Vec<Contour> {
    let edges = boundary_edges(grid);

    // Buckets preserve emission order, so continuation choice is stable
    // within one computation.
    let mut by_start: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        by_start.entry(edge.start).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut contours = Vec::new();

    for first in 0..edges.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let origin = edges[first].start;
        let mut chain = vec![edges[first]];
        let mut cursor = edges[first].end;

        while cursor != origin {
            let next = by_start
                .get(&cursor)
                .and_then(|bucket| bucket.iter().copied().find(|&i| !used[i]));
            let Some(next) = next else { break };
            used[next] = true;
            cursor = edges[next].end;
            chain.push(edges[next]);
        }

        if chain.len() <= 2 {
            continue;
        }
        if cursor != origin {
            tracing::debug!(len = chain.len(), "dropping unclosed contour fragment");
            continue;
        }
        contours.push(Contour { edges: chain });
    }

    contours
}
