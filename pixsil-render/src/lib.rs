//! # Pixsil Render
//!
//! Turns a [`pixsil_core::Geometry`] snapshot into output: a backend-neutral
//! silhouette path, an SVG document, and a tiny-skia raster preview.
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌─────────────────────┐
//! │  Geometry  │──▶│  Path        │──▶│  svg: document      │
//! │  snapshot  │   │  commands    │   │  raster: pixmap/PNG │
//! └────────────┘   └──────────────┘   └─────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod path;
pub mod raster;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use path::{build_path, PathCommand, Point};
pub use raster::{render, render_to_png, RasterOptions};
pub use svg::{path_data, to_svg, SvgOptions};

use pixsil_core::Color;
use serde::{Deserialize, Serialize};

/// How the silhouette interior is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    /// One flat color for the whole silhouette.
    Flat(Color),
    /// Per-cell colors clipped to the silhouette.
    Cells,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::Cells
    }
}

/// Stroke outline drawn over the silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

/// Render crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
