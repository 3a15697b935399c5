//! Silhouette path building.
//!
//! Converts a [`Geometry`] snapshot into backend-neutral path commands: one
//! subpath per contour with straight segments and quadratic corner fillets,
//! followed by one wedge subpath per bridge fillet. The command list is
//! meant for even-odd filling so hole contours subtract from the silhouette.

use pixsil_core::{Bridge, CellMetrics, Contour, Edge, GapQuadrant, Geometry};

/// A point in output pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X in pixels.
    pub x: f32,
    /// Y in pixels.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One command of the silhouette path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment.
    LineTo(Point),
    /// Quadratic curve through a control point.
    QuadTo {
        /// Control point (the corner vertex being rounded).
        ctrl: Point,
        /// Curve endpoint.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// Build the full silhouette path for a geometry snapshot.
#[must_use]
pub fn build_path(geometry: &Geometry, metrics: &CellMetrics, roundness: f32) -> Vec<PathCommand> {
    let radius = metrics.fillet_radius(roundness);
    let mut commands = Vec::new();

    for (ci, contour) in geometry.contours.iter().enumerate() {
        contour_subpath(&mut commands, ci, contour, geometry, metrics, radius);
    }
    for bridge in &geometry.bridges {
        bridge_subpath(&mut commands, bridge, metrics, radius);
    }

    commands
}

#[allow(clippy::cast_precision_loss)]
fn lattice_px(metrics: &CellMetrics, point: (i32, i32)) -> Point {
    Point::new(
        point.0 as f32 * metrics.cell_w,
        point.1 as f32 * metrics.cell_h,
    )
}

/// Offset `vertex` along an edge direction by `radius` pixels.
///
/// Edges are axis-aligned unit lattice steps, so the direction vector is
/// already a unit vector in pixel space.
#[allow(clippy::cast_precision_loss)]
fn offset(vertex: Point, edge: &Edge, radius: f32) -> Point {
    let (dx, dy) = edge.direction();
    Point::new(
        radius.mul_add(dx as f32, vertex.x),
        radius.mul_add(dy as f32, vertex.y),
    )
}

fn contour_subpath(
    commands: &mut Vec<PathCommand>,
    ci: usize,
    contour: &Contour,
    geometry: &Geometry,
    metrics: &CellMetrics,
    radius: f32,
) {
    let edges = contour.edges();
    let n = edges.len();
    if n == 0 {
        return;
    }

    // The contour's start point is also the endpoint of the last edge. When
    // that vertex is rounded, its fillet already covers the corner, so the
    // subpath starts at the outgoing offset instead of the vertex itself.
    let start = lattice_px(metrics, edges[0].start);
    let first = if geometry.rounded.contains(&(ci, n - 1)) {
        offset(start, &edges[0], radius)
    } else {
        start
    };
    commands.push(PathCommand::MoveTo(first));

    for (ei, edge) in edges.iter().enumerate() {
        let vertex = lattice_px(metrics, edge.end);
        if geometry.rounded.contains(&(ci, ei)) {
            let outgoing = &edges[(ei + 1) % n];
            // Back off along the incoming edge, curve through the vertex to
            // the symmetric point on the outgoing edge.
            let back = offset(vertex, &reversed(edge), radius);
            let forward = offset(vertex, outgoing, radius);
            commands.push(PathCommand::LineTo(back));
            commands.push(PathCommand::QuadTo {
                ctrl: vertex,
                to: forward,
            });
        } else {
            commands.push(PathCommand::LineTo(vertex));
        }
    }
    commands.push(PathCommand::Close);
}

fn reversed(edge: &Edge) -> Edge {
    Edge {
        start: edge.end,
        end: edge.start,
        side: edge.side,
    }
}

/// The wedge filling one gap quadrant: curve from one arm of the gap to the
/// other with the lattice vertex as control point, closed back through the
/// vertex.
fn bridge_subpath(
    commands: &mut Vec<PathCommand>,
    bridge: &Bridge,
    metrics: &CellMetrics,
    radius: f32,
) {
    let vertex = lattice_px(metrics, (bridge.x, bridge.y));
    let (arm_a, arm_b) = match bridge.quadrant {
        GapQuadrant::TopRight => (
            Point::new(vertex.x + radius, vertex.y),
            Point::new(vertex.x, vertex.y - radius),
        ),
        GapQuadrant::BottomLeft => (
            Point::new(vertex.x - radius, vertex.y),
            Point::new(vertex.x, vertex.y + radius),
        ),
        GapQuadrant::BottomRight => (
            Point::new(vertex.x + radius, vertex.y),
            Point::new(vertex.x, vertex.y + radius),
        ),
        GapQuadrant::TopLeft => (
            Point::new(vertex.x - radius, vertex.y),
            Point::new(vertex.x, vertex.y - radius),
        ),
    };

    commands.push(PathCommand::MoveTo(arm_a));
    commands.push(PathCommand::QuadTo {
        ctrl: vertex,
        to: arm_b,
    });
    commands.push(PathCommand::LineTo(vertex));
    commands.push(PathCommand::Close);
}

#[cfg(test)]
mod tests {
    use pixsil_core::{derive, Color, Grid, SmoothParams};

    use super::*;

    fn single_cell() -> (Grid, CellMetrics) {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(0, 0)], 1, Color::BLACK);
        let metrics = CellMetrics::new(8, 8, 1.0);
        (grid, metrics)
    }

    #[test]
    fn test_empty_geometry_builds_no_commands() {
        let metrics = CellMetrics::new(8, 8, 1.0);
        assert!(build_path(&Geometry::default(), &metrics, 0.3).is_empty());
    }

    #[test]
    fn test_unrounded_cell_is_a_square_subpath() {
        let (grid, metrics) = single_cell();
        let params = SmoothParams {
            rounded_ratio: 0.0,
            ..SmoothParams::default()
        };
        let geometry = derive(&grid, &params);
        let commands = build_path(&geometry, &metrics, 0.3);

        let cell = metrics.cell_w; // square cells at aspect 1
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(cell, 0.0)),
                PathCommand::LineTo(Point::new(cell, cell)),
                PathCommand::LineTo(Point::new(0.0, cell)),
                PathCommand::LineTo(Point::new(0.0, 0.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_rounded_vertex_backs_off_and_curves_through_corner() {
        let (grid, metrics) = single_cell();
        let params = SmoothParams {
            rounded_ratio: 1.0,
            ..SmoothParams::default()
        };
        let geometry = derive(&grid, &params);
        assert_eq!(geometry.rounded.len(), 4);
        let commands = build_path(&geometry, &metrics, 0.3);

        let radius = metrics.fillet_radius(0.3);
        let cell = metrics.cell_w;
        // Start vertex (0,0) is rounded, so the subpath begins offset along
        // the first (top) edge.
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(radius, 0.0)));
        // First corner at (cell, 0): line to the back-off point, then a quad
        // through the vertex.
        assert_eq!(
            commands[1],
            PathCommand::LineTo(Point::new(cell - radius, 0.0))
        );
        assert_eq!(
            commands[2],
            PathCommand::QuadTo {
                ctrl: Point::new(cell, 0.0),
                to: Point::new(cell, radius),
            }
        );
        // Last corner closes back to the starting offset.
        assert_eq!(
            commands[commands.len() - 2],
            PathCommand::QuadTo {
                ctrl: Point::new(0.0, 0.0),
                to: Point::new(radius, 0.0),
            }
        );
        assert_eq!(commands[commands.len() - 1], PathCommand::Close);
    }

    #[test]
    fn test_bridge_wedge_subpath_shape() {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(0, 0), (1, 1)], 1, Color::BLACK);
        let metrics = CellMetrics::new(8, 8, 1.0);
        let params = SmoothParams {
            rounded_ratio: 1.0,
            ..SmoothParams::default()
        };
        let geometry = derive(&grid, &params);
        assert_eq!(geometry.bridges.len(), 2);

        let radius = metrics.fillet_radius(0.3);
        let commands = build_path(&geometry, &metrics, 0.3);
        let vertex = Point::new(metrics.cell_w, metrics.cell_h);

        // The top-right wedge is the first bridge subpath, appended after
        // both contour subpaths.
        let wedge_start = commands
            .iter()
            .position(|c| *c == PathCommand::MoveTo(Point::new(vertex.x + radius, vertex.y)))
            .expect("wedge subpath present");
        assert_eq!(
            &commands[wedge_start..wedge_start + 4],
            &[
                PathCommand::MoveTo(Point::new(vertex.x + radius, vertex.y)),
                PathCommand::QuadTo {
                    ctrl: vertex,
                    to: Point::new(vertex.x, vertex.y - radius),
                },
                PathCommand::LineTo(vertex),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_aspect_scales_axes_independently() {
        let mut grid = Grid::new(8, 8).expect("grid");
        grid.paint(&[(1, 1)], 1, Color::BLACK);
        let metrics = CellMetrics::new(8, 8, 2.0);
        let params = SmoothParams {
            rounded_ratio: 0.0,
            aspect: 2.0,
            ..SmoothParams::default()
        };
        let geometry = derive(&grid, &params);
        let commands = build_path(&geometry, &metrics, 0.3);
        assert_eq!(
            commands[0],
            PathCommand::MoveTo(Point::new(metrics.cell_w, metrics.cell_h))
        );
    }
}
