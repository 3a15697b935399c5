//! SVG document export.
//!
//! Emits a scalable vector document equivalent to the raster preview: a
//! background rectangle, the traced/rounded/bridged silhouette as one
//! compound even-odd path, and — in the per-cell variant — one color-filled
//! rectangle per painted cell clipped to that path, plus an optional stroke
//! outline reusing the same path data.

use std::fmt::Write;

use pixsil_core::{CellMetrics, Geometry, Grid};
use serde::{Deserialize, Serialize};

use crate::path::{build_path, PathCommand};
use crate::{FillStyle, StrokeStyle};

/// Options for SVG export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Background fill; transparent when absent.
    pub background: Option<pixsil_core::Color>,
    /// How the silhouette is filled.
    pub fill: FillStyle,
    /// Optional outline over the silhouette.
    pub stroke: Option<StrokeStyle>,
    /// Suggested export filename, emitted as the document `<title>`.
    /// The engine itself never touches the filesystem.
    pub filename: Option<String>,
}

/// Build the `d` attribute string for a command list.
///
/// Coordinates are formatted at 0.01 px precision.
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(d, "M {:.2} {:.2}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(d, "L {:.2} {:.2}", p.x, p.y);
            }
            PathCommand::QuadTo { ctrl, to } => {
                let _ = write!(d, "Q {:.2} {:.2} {:.2} {:.2}", ctrl.x, ctrl.y, to.x, to.y);
            }
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

/// Serialize the grid and its derived geometry into an SVG document.
///
/// Document dimensions equal the on-screen pixel dimensions computed from
/// the grid size, aspect ratio, and display cap.
#[must_use]
pub fn to_svg(
    grid: &Grid,
    geometry: &Geometry,
    metrics: &CellMetrics,
    roundness: f32,
    options: &SvgOptions,
) -> String {
    let width = metrics.display_width();
    let height = metrics.display_height();
    let d = path_data(&build_path(geometry, metrics, roundness));

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    );

    if let Some(name) = &options.filename {
        let _ = write!(svg, "<title>{}</title>", escape_xml(name));
    }

    if let Some(bg) = options.background {
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>",
        );
    }

    if !d.is_empty() {
        match options.fill {
            FillStyle::Flat(color) => {
                let _ = write!(
                    svg,
                    "<path d=\"{d}\" fill=\"{color}\" fill-rule=\"evenodd\"/>",
                );
            }
            FillStyle::Cells => {
                let _ = write!(
                    svg,
                    "<defs><clipPath id=\"silhouette\"><path d=\"{d}\" clip-rule=\"evenodd\"/></clipPath></defs>",
                );
                let _ = write!(svg, "<g clip-path=\"url(#silhouette)\">");
                for (x, y, color) in grid.cells() {
                    write_cell_rect(&mut svg, metrics, x, y, color);
                }
                svg.push_str("</g>");
            }
        }

        if let Some(stroke) = options.stroke {
            let _ = write!(
                svg,
                "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                stroke.color, stroke.width,
            );
        }
    }

    svg.push_str("</svg>");
    tracing::debug!(bytes = svg.len(), commands = !d.is_empty(), "emitted SVG document");
    svg
}

#[allow(clippy::cast_precision_loss)]
fn write_cell_rect(svg: &mut String, metrics: &CellMetrics, x: u32, y: u32, color: pixsil_core::Color) {
    let _ = write!(
        svg,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{color}\"/>",
        x as f32 * metrics.cell_w,
        y as f32 * metrics.cell_h,
        metrics.cell_w,
        metrics.cell_h,
    );
}

/// Escape special XML characters.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
