//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while compositing or exporting.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Pixmap or mask allocation failed.
    #[error("Failed to allocate {width}x{height} raster surface")]
    Alloc {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Export encoding failed.
    #[error("Export failed: {0}")]
    Export(String),
}
