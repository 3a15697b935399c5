//! Raster preview compositing on tiny-skia.
//!
//! The preview fills the silhouette path with the even-odd rule and, in the
//! per-cell variant, clips a cell color raster to it: the grid becomes a
//! one-pixel-per-cell pixmap which is scaled up through a silhouette mask
//! with bilinear (smoothing on) or nearest (off) filtering.

use pixsil_core::{CellMetrics, Color, Geometry, Grid};
use serde::{Deserialize, Serialize};
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::error::{RenderError, RenderResult};
use crate::path::{build_path, PathCommand};
use crate::FillStyle;

/// Options for the raster preview.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Background fill; transparent when absent.
    pub background: Option<Color>,
    /// How the silhouette is filled.
    pub fill: FillStyle,
    /// Bilinear cell filtering when on, nearest-neighbor when off.
    pub smoothing: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: None,
            fill: FillStyle::Cells,
            smoothing: true,
        }
    }
}

/// Render the smoothed silhouette preview.
///
/// # Errors
///
/// Returns an error if the output surface cannot be allocated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render(
    grid: &Grid,
    geometry: &Geometry,
    metrics: &CellMetrics,
    roundness: f32,
    options: &RasterOptions,
) -> RenderResult<Pixmap> {
    let width = (metrics.display_width().ceil() as u32).max(1);
    let height = (metrics.display_height().ceil() as u32).max(1);
    tracing::debug!(width, height, "rendering raster preview");
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Alloc { width, height })?;

    if let Some(bg) = options.background {
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    let Some(path) = to_skia_path(&build_path(geometry, metrics, roundness)) else {
        // Empty grid: background only.
        return Ok(pixmap);
    };

    match options.fill {
        FillStyle::Flat(color) => {
            let mut paint = Paint::default();
            paint.set_color_rgba8(color.r, color.g, color.b, 255);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
        }
        FillStyle::Cells => {
            let mut mask = Mask::new(width, height).ok_or(RenderError::Alloc { width, height })?;
            mask.fill_path(&path, FillRule::EvenOdd, true, Transform::identity());

            let cells = cell_pixmap(grid)?;
            let paint = PixmapPaint {
                quality: if options.smoothing {
                    FilterQuality::Bilinear
                } else {
                    FilterQuality::Nearest
                },
                ..PixmapPaint::default()
            };
            pixmap.draw_pixmap(
                0,
                0,
                cells.as_ref(),
                &paint,
                Transform::from_scale(metrics.cell_w, metrics.cell_h),
                Some(&mask),
            );
        }
    }

    Ok(pixmap)
}

/// Render the preview and encode it to PNG bytes.
///
/// # Errors
///
/// Returns an error if rendering or encoding fails.
pub fn render_to_png(
    grid: &Grid,
    geometry: &Geometry,
    metrics: &CellMetrics,
    roundness: f32,
    options: &RasterOptions,
) -> RenderResult<Vec<u8>> {
    render(grid, geometry, metrics, roundness, options)?
        .encode_png()
        .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
}

/// Convert backend-neutral commands into a tiny-skia path.
///
/// Returns `None` for an empty command list.
fn to_skia_path(commands: &[PathCommand]) -> Option<tiny_skia::Path> {
    if commands.is_empty() {
        return None;
    }
    let mut builder = PathBuilder::new();
    for command in commands {
        match command {
            PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
            PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => builder.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathCommand::Close => builder.close(),
        }
    }
    builder.finish()
}

/// One-pixel-per-cell color raster with a neighbor-dilation pre-pass.
///
/// Empty cells bordering painted ones take a neighbor's color so bilinear
/// filtering never blends transparency into the visible silhouette edge when
/// smoothing is on without a background fill behind the cells.
#[allow(clippy::cast_possible_wrap)]
fn cell_pixmap(grid: &Grid) -> RenderResult<Pixmap> {
    let width = grid.width();
    let height = grid.height();
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Alloc { width, height })?;

    let mut dilated: Vec<Option<Color>> = vec![None; (width * height) as usize];
    for (x, y, color) in grid.cells() {
        dilated[(y * width + x) as usize] = Some(color);
    }

    // Neighbor lookups go through the grid, so dilation cannot cascade.
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let i = (y * width as i32 + x) as usize;
            if dilated[i].is_some() {
                continue;
            }
            dilated[i] = [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .into_iter()
                .find_map(|(nx, ny)| grid.color_at(nx, ny));
        }
    }

    let pixels = pixmap.pixels_mut();
    for (i, color) in dilated.iter().enumerate() {
        if let Some(color) = color {
            pixels[i] = tiny_skia::ColorU8::from_rgba(color.r, color.g, color.b, 255).premultiply();
        }
    }

    Ok(pixmap)
}
