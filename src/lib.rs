//! plotgrid lays subplots out on a square grid in normalized device coordinates.
//!
//! A grid of `n_rows × n_rows` cells tiles the `[-1, 1]²` viewport. Each subplot draws in its own
//! local `[-1, 1]²` space; [`to_box`] maps a local point into its cell, leaving a small gutter
//! between neighbours. [`pan_zoom_grid`] applies the interactive view before boxing, and
//! [`grid_clip`] tests whether a local point falls outside the visible part of a cell.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`GridConfig`] (JSON) or [`GridTransform::new`] fixes `n_rows`, zoom and pan.
//! 2. **Interact**: [`PanZoom`] accumulates drags, wheel and key steps (aspect-corrected,
//!    zooming toward the pointer) and feeds the transform.
//! 3. **Map**: [`GridTransform::map_point`] for one point, [`GridTransform::map_points`] or a
//!    [`BatchMapper`] for many (both run the same pan/zoom + box chain), or upload
//!    [`GridUniforms`] and use [`GRID_WGSL`] on the GPU.
//! 4. **Hit-test**: [`GridTransform::cell_at`] resolves an NDC point back to a cell.
//!
//! The math is pure and infallible; only construction from untrusted values and config loading
//! return [`GridResult`].
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod gpu;
mod grid;

pub use config::model::GridConfig;
pub use foundation::core::{CELL_FILL, DEFAULT_CLIP_LIMIT, Point, Rect, Vec2, mul_componentwise};
pub use foundation::error::{GridError, GridResult};
pub use gpu::uniforms::GridUniforms;
pub use gpu::wgsl::{GRID_WGSL, grid_wgsl_at};
pub use grid::cells::CellHit;
pub use grid::pan_zoom::{
    DEFAULT_ZMAX, DEFAULT_ZMIN, PAN_STEP, PanDirection, PanZoom, WHEEL_STEP, ZOOM_STEP,
};
pub use grid::transform::{
    BatchMapper, BatchOpts, GridCell, GridTransform, grid_clip, grid_clip_with, pan_zoom_grid,
    row_col, to_box,
};
