//! # Pixsil Core
//!
//! Pure geometry engine for pixel-art vector smoothing: a sparse grid of
//! colored cells becomes a single smooth vector silhouette.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌───────────┐   ┌────────────┐
//! │   Grid   │──▶│  Contour  │──▶│  Bridge   │──▶│  Rounding  │
//! │  Store   │   │  Tracer   │   │ Synthesis │   │  Selector  │
//! └──────────┘   └───────────┘   └───────────┘   └────────────┘
//!      ▲                                               │
//!  edits + undo                                 Geometry snapshot
//!                                              (pixsil-render)
//! ```
//!
//! Everything right of the grid is derived state: recomputed in full on every
//! pass, deterministic for a given grid, parameter set, and seed, and never
//! persisted. The grid plus its history snapshots are the only mutable state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod color;
pub mod contour;
pub mod corner;
pub mod editor;
pub mod error;
pub mod grid;
pub mod hash;
pub mod history;
pub mod params;
pub mod pipeline;

pub use bridge::{Bridge, GapQuadrant};
pub use color::Color;
pub use contour::{Contour, Edge, Side};
pub use corner::{CornerClass, CornerMode};
pub use editor::{Editor, Tool};
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use hash::coord_hash;
pub use history::{History, HISTORY_CAP};
pub use params::{
    CellMetrics, SmoothParams, MAX_DISPLAY_EXTENT, MAX_GRID_EXTENT, MIN_GRID_EXTENT,
};
pub use pipeline::{derive, Geometry};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
