//! Subplot grid transforms.
//!
//! A square grid of `n_rows × n_rows` cells tiles the normalized device coordinate (NDC) square
//! `[-1, 1]²`. Cell `0` sits at the top-left, indices run row-major. Each cell maps its local
//! `[-1, 1]²` space onto a box covering [`CELL_FILL`] of its slot, centered in the slot.
//!
//! The free functions take every parameter explicitly and never fail; [`GridTransform`] bundles
//! the per-draw uniforms (`n_rows`, zoom, pan) the way a shader would receive them.

use rayon::prelude::*;

use crate::foundation::core::{
    CELL_FILL, DEFAULT_CLIP_LIMIT, Vec2, mul_componentwise, validate_finite_vec2, validate_n_rows,
};
use crate::foundation::error::{GridError, GridResult};
use crate::grid::pan_zoom::PanZoom;

/// Row and column of a cell, as floats so they compose with NDC arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridCell {
    /// Zero-based row, counted from the top.
    pub row: f64,
    /// Zero-based column, counted from the left.
    pub col: f64,
}

impl GridCell {
    /// The pair as a vector `(row, col)`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.row, self.col)
    }
}

/// Decompose a linear cell index into `(row, col)`.
///
/// `col` uses a floored modulo, so it lands in `[0, n_rows)` for any finite `index` as long as
/// `n_rows > 0`. The result is meaningless for `n_rows <= 0`.
#[inline]
pub fn row_col(index: f64, n_rows: f64) -> GridCell {
    let row = (index / n_rows).floor();
    GridCell {
        row,
        col: index - n_rows * row,
    }
}

/// Map `position` (cell-local, nominally `[-1, 1]²`) into NDC inside cell `index`.
#[inline]
pub fn to_box(position: Vec2, index: f64, n_rows: f64) -> Vec2 {
    let rc = row_col(index, n_rows);
    let slot = 2.0 / n_rows;
    let x = -1.0 + (rc.col + 0.5) * slot;
    let y = 1.0 - (rc.row + 0.5) * slot;
    let half = CELL_FILL / n_rows;
    Vec2::new(x + half * position.x, y + half * position.y)
}

/// True when either coordinate of `position` lies outside `[-lim, lim]`.
#[inline]
pub fn grid_clip_with(position: Vec2, lim: f64) -> bool {
    position.x < -lim || position.x > lim || position.y < -lim || position.y > lim
}

/// [`grid_clip_with`] at the default limit of `0.95`.
#[inline]
pub fn grid_clip(position: Vec2) -> bool {
    grid_clip_with(position, DEFAULT_CLIP_LIMIT)
}

/// Apply pan then zoom: `zoom * (position + n_rows * pan)`, componentwise.
///
/// The pan is scaled by `n_rows`, so a unit pan moves by a full grid width rather than one
/// cell.
#[inline]
pub fn pan_zoom_grid(position: Vec2, n_rows: f64, zoom: Vec2, pan: Vec2) -> Vec2 {
    mul_componentwise(zoom, position + pan * n_rows)
}

/// Options for [`BatchMapper::new`].
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Worker thread count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Apply [`GridTransform::pan_zoom_grid`] before boxing each point.
    pub pan_zoom: bool,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            threads: None,
            pan_zoom: true,
        }
    }
}

/// The uniforms of one grid draw: row count, zoom and pan.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridTransform {
    n_rows: f64,
    zoom: Vec2,
    pan: Vec2,
}

impl GridTransform {
    /// Build a transform for an `n_rows × n_rows` grid with identity pan/zoom.
    pub fn new(n_rows: f64) -> GridResult<Self> {
        Ok(Self {
            n_rows: validate_n_rows(n_rows)?,
            zoom: Vec2::new(1.0, 1.0),
            pan: Vec2::ZERO,
        })
    }

    /// Build a transform from whole row counts.
    pub fn square(rows: u32) -> GridResult<Self> {
        Self::new(f64::from(rows))
    }

    /// Replace the zoom uniform.
    pub fn with_zoom(self, zoom: Vec2) -> GridResult<Self> {
        Ok(Self {
            zoom: validate_finite_vec2("zoom", zoom)?,
            ..self
        })
    }

    /// Replace the pan uniform.
    pub fn with_pan(self, pan: Vec2) -> GridResult<Self> {
        Ok(Self {
            pan: validate_finite_vec2("pan", pan)?,
            ..self
        })
    }

    /// Copy zoom and pan from interactive state.
    pub fn with_pan_zoom(self, state: &PanZoom) -> Self {
        Self {
            zoom: state.zoom(),
            pan: state.pan(),
            ..self
        }
    }

    pub fn n_rows(&self) -> f64 {
        self.n_rows
    }

    pub fn zoom(&self) -> Vec2 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Number of whole indices `i >= 0` with `i < n_rows²`.
    pub fn cell_count(&self) -> usize {
        (self.n_rows * self.n_rows).ceil() as usize
    }

    /// See [`row_col`].
    pub fn row_col(&self, index: f64) -> GridCell {
        row_col(index, self.n_rows)
    }

    /// See [`to_box`].
    pub fn to_box(&self, position: Vec2, index: f64) -> Vec2 {
        to_box(position, index, self.n_rows)
    }

    /// See [`pan_zoom_grid`].
    pub fn pan_zoom_grid(&self, position: Vec2) -> Vec2 {
        pan_zoom_grid(position, self.n_rows, self.zoom, self.pan)
    }

    /// Full vertex chain: pan/zoom in cell-local space, then box into the cell.
    pub fn map_point(&self, position: Vec2, index: f64) -> Vec2 {
        self.to_box(self.pan_zoom_grid(position), index)
    }

    /// [`GridTransform::map_point`] over a batch of `(position, index)` pairs, in parallel on
    /// rayon's global pool. Output order matches input order.
    #[tracing::instrument(skip(self, points), fields(n = points.len()))]
    pub fn map_points(&self, points: &[(Vec2, f64)]) -> Vec<Vec2> {
        points
            .par_iter()
            .map(|&(p, index)| self.map_point(p, index))
            .collect()
    }

    /// [`GridTransform::to_box`] over a batch, ignoring zoom and pan.
    #[tracing::instrument(skip(self, points), fields(n = points.len()))]
    pub fn box_points(&self, points: &[(Vec2, f64)]) -> Vec<Vec2> {
        points
            .par_iter()
            .map(|&(p, index)| self.to_box(p, index))
            .collect()
    }
}

/// Batch mapping on a dedicated worker pool, built once and reused across batches.
pub struct BatchMapper {
    pool: rayon::ThreadPool,
    pan_zoom: bool,
}

impl BatchMapper {
    pub fn new(opts: &BatchOpts) -> GridResult<Self> {
        Ok(Self {
            pool: build_thread_pool(opts.threads)?,
            pan_zoom: opts.pan_zoom,
        })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Map `points` through `transform`. Output order matches input order.
    #[tracing::instrument(skip(self, transform, points), fields(n = points.len()))]
    pub fn map(&self, transform: &GridTransform, points: &[(Vec2, f64)]) -> Vec<Vec2> {
        self.pool.install(|| {
            if self.pan_zoom {
                transform.map_points(points)
            } else {
                transform.box_points(points)
            }
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> GridResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GridError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GridError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/transform.rs"]
mod tests;
