//! Corner classification and rounding selection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::contour::{Contour, Edge};
use crate::hash::coord_hash;
use crate::params::SmoothParams;

/// Which vertex classes are eligible for rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerMode {
    /// Both convex and concave corners may round.
    #[default]
    Random,
    /// Only convex (outward-pointing) corners may round.
    Outer,
    /// Only concave (inward-pointing) corners may round.
    Inner,
}

impl CornerMode {
    /// Whether a vertex of the given class may be rounded in this mode.
    #[must_use]
    pub fn allows(self, class: CornerClass) -> bool {
        match self {
            Self::Random => true,
            Self::Outer => class == CornerClass::Convex,
            Self::Inner => class == CornerClass::Concave,
        }
    }
}

/// Turning direction at a boundary vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerClass {
    /// Outward-pointing corner of a filled region.
    Convex,
    /// Inward-pointing corner.
    Concave,
}

/// Classify the vertex shared by `incoming` and `outgoing`.
///
/// Uses the 2D cross product of the two direction vectors. A positive cross
/// product is a right turn in screen coordinates (y down), which on a
/// clockwise outer contour is a convex corner. Collinear edges (cross product
/// zero) classify as concave; this is long-standing behavior, pinned by a
/// test rather than fixed.
#[must_use]
pub fn classify(incoming: &Edge, outgoing: &Edge) -> CornerClass {
    let (dx1, dy1) = incoming.direction();
    let (dx2, dy2) = outgoing.direction();
    if dx1 * dy2 - dy1 * dx2 > 0 {
        CornerClass::Convex
    } else {
        CornerClass::Concave
    }
}

/// Select which vertices get rounded, keyed by `(contour index, edge index)`
/// where the vertex is that edge's endpoint.
///
/// A vertex rounds iff its class is allowed by the corner mode, the
/// deterministic hash of its lattice coordinates and the seed falls below
/// `rounded_ratio`, and it does not coincide with a bridge lattice point
/// (bridge fillets own that corner's geometry).
#[must_use]
pub fn select_rounded(
    contours: &[Contour],
    bridge_points: &HashSet<(i32, i32)>,
    params: &SmoothParams,
) -> HashSet<(usize, usize)> {
    let ratio = f64::from(params.rounded_ratio);
    let mut rounded = HashSet::new();

    for (ci, contour) in contours.iter().enumerate() {
        let edges = contour.edges();
        for ei in 0..edges.len() {
            let vertex = edges[ei].end;
            if bridge_points.contains(&vertex) {
                continue;
            }
            let outgoing = &edges[(ei + 1) % edges.len()];
            if !params.corner_mode.allows(classify(&edges[ei], outgoing)) {
                continue;
            }
            if coord_hash(vertex.0, vertex.1, params.seed) < ratio {
                rounded.insert((ci, ei));
            }
        }
    }

    rounded
}
