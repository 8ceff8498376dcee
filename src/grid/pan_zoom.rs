//! Interactive pan/zoom state feeding the grid's `zoom` and `pan` uniforms.
//!
//! The state keeps one scalar zoom level. The per-axis `zoom` uniform is derived from it and
//! corrected for the canvas and scene aspect ratios. Pointer positions are given in NDC with `y`
//! pointing up, so no window or event types are involved.

use crate::foundation::core::{CELL_FILL, Vec2, validate_finite_vec2, validate_n_rows};
use crate::foundation::error::{GridError, GridResult};

/// Default lower bound of the zoom level.
pub const DEFAULT_ZMIN: f64 = 1e-5;
/// Default upper bound of the zoom level.
pub const DEFAULT_ZMAX: f64 = 1e5;

/// Pan distance of one arrow-key step, at zoom level 1.
pub const PAN_STEP: f64 = 0.1;
/// Relative zoom change of one `+`/`-` step.
pub const ZOOM_STEP: f64 = 0.05;
/// Wheel notch scale: one notch multiplies the zoom level by `exp(2.5 * WHEEL_STEP)`.
pub const WHEEL_STEP: f64 = 0.05;

/// Direction of a discrete pan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Accumulated pan offset and zoom level.
///
/// Pan is expressed in grid widths (see [`crate::pan_zoom_grid`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanZoom {
    pan: Vec2,
    zoom: f64,
    zmin: f64,
    zmax: f64,
    /// Scene aspect ratio; `None` disables aspect correction entirely.
    aspect: Option<f64>,
    canvas_aspect: Vec2,
    zoom_to_pointer: bool,
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            zmin: DEFAULT_ZMIN,
            zmax: DEFAULT_ZMAX,
            aspect: Some(1.0),
            canvas_aspect: Vec2::new(1.0, 1.0),
            zoom_to_pointer: true,
        }
    }
}

impl PanZoom {
    /// State with the given zoom level (clamped to the default limits) and pan.
    pub fn new(zoom: f64, pan: Vec2) -> GridResult<Self> {
        let mut s = Self::default();
        s.set_pan(pan)?;
        s.set_zoom_level(zoom)?;
        Ok(s)
    }

    /// Per-axis `zoom` uniform: `level * canvas_aspect * aspect`.
    pub fn zoom(&self) -> Vec2 {
        match self.aspect {
            Some(a) => self.canvas_aspect * (self.zoom * a),
            None => Vec2::new(self.zoom, self.zoom),
        }
    }

    /// Scalar zoom level.
    pub fn zoom_level(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zmin(&self) -> f64 {
        self.zmin
    }

    pub fn zmax(&self) -> f64 {
        self.zmax
    }

    pub fn aspect(&self) -> Option<f64> {
        self.aspect
    }

    pub fn canvas_aspect(&self) -> Vec2 {
        self.canvas_aspect
    }

    pub fn zoom_to_pointer(&self) -> bool {
        self.zoom_to_pointer
    }

    pub fn set_zoom_to_pointer(&mut self, on: bool) {
        self.zoom_to_pointer = on;
    }

    pub fn set_pan(&mut self, pan: Vec2) -> GridResult<()> {
        self.pan = validate_finite_vec2("pan", pan)?;
        Ok(())
    }

    /// Set the zoom level, clamped to `[zmin, zmax]`.
    pub fn set_zoom_level(&mut self, level: f64) -> GridResult<()> {
        if !level.is_finite() || level <= 0.0 {
            return Err(GridError::validation(format!(
                "zoom level must be finite and > 0, got {level}"
            )));
        }
        self.zoom = level.clamp(self.zmin, self.zmax);
        tracing::trace!(zoom = self.zoom, "zoom updated");
        Ok(())
    }

    /// Set the lower zoom limit. The value is capped at `zmax`; the current level is re-clamped.
    pub fn set_zmin(&mut self, zmin: f64) -> GridResult<()> {
        validate_positive("zmin", zmin)?;
        self.zmin = zmin.min(self.zmax);
        self.zoom = self.zoom.clamp(self.zmin, self.zmax);
        Ok(())
    }

    /// Set the upper zoom limit. The value is raised to at least `zmin`; the current level is
    /// re-clamped.
    pub fn set_zmax(&mut self, zmax: f64) -> GridResult<()> {
        validate_positive("zmax", zmax)?;
        self.zmax = zmax.max(self.zmin);
        self.zoom = self.zoom.clamp(self.zmin, self.zmax);
        Ok(())
    }

    /// Set the scene aspect ratio (width / height), or `None` to disable aspect correction.
    pub fn set_aspect(&mut self, aspect: Option<f64>) -> GridResult<()> {
        if let Some(a) = aspect {
            validate_positive("aspect", a)?;
        }
        self.aspect = aspect;
        Ok(())
    }

    /// Record the canvas size in pixels.
    ///
    /// The longer side is squeezed so the scene keeps its aspect on non-square canvases.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> GridResult<()> {
        validate_positive("canvas width", width)?;
        validate_positive("canvas height", height)?;
        let ratio = width / height;
        self.canvas_aspect = if ratio > 1.0 {
            Vec2::new(1.0 / ratio, 1.0)
        } else {
            Vec2::new(1.0, ratio)
        };
        Ok(())
    }

    /// Shift the pan offset by `delta`, in pan units.
    pub fn pan_by(&mut self, delta: Vec2) -> GridResult<()> {
        let delta = validate_finite_vec2("pan delta", delta)?;
        self.pan += delta;
        Ok(())
    }

    /// Pan by a pointer drag of `delta` NDC units, divided by the per-axis zoom so the scene
    /// follows the pointer.
    pub fn pan_drag(&mut self, delta: Vec2) -> GridResult<()> {
        let delta = validate_finite_vec2("drag delta", delta)?;
        let z = self.zoom();
        self.pan += Vec2::new(delta.x / z.x, delta.y / z.y);
        Ok(())
    }

    /// One keyboard pan step of `PAN_STEP / level`. `Left` moves the scene right, as arrow keys
    /// move the view.
    pub fn pan_step(&mut self, dir: PanDirection) {
        let k = PAN_STEP / self.zoom;
        self.pan += match dir {
            PanDirection::Left => Vec2::new(k, 0.0),
            PanDirection::Right => Vec2::new(-k, 0.0),
            PanDirection::Down => Vec2::new(0.0, k),
            PanDirection::Up => Vec2::new(0.0, -k),
        };
    }

    /// One keyboard zoom step: `× (1 + ZOOM_STEP)` when `zoom_in`, `× (1 - ZOOM_STEP)` otherwise.
    pub fn zoom_step(&mut self, zoom_in: bool) {
        let f = if zoom_in { 1.0 + ZOOM_STEP } else { 1.0 - ZOOM_STEP };
        self.zoom = (self.zoom * f).clamp(self.zmin, self.zmax);
    }

    /// Multiply the zoom level by `factor`, clamped to `[zmin, zmax]`.
    pub fn zoom_by(&mut self, factor: f64) -> GridResult<()> {
        validate_positive("zoom factor", factor)?;
        self.set_zoom_level(self.zoom * factor)
    }

    /// Zoom by `factor` keeping the point under `pointer` (NDC) fixed within its grid cell.
    ///
    /// The pan is compensated by the pointer's cell-local offset, so the data point shown under
    /// the pointer is the same before and after. With zoom-to-pointer disabled this is
    /// [`PanZoom::zoom_by`].
    pub fn zoom_at(&mut self, pointer: Vec2, factor: f64, n_rows: f64) -> GridResult<()> {
        let pointer = validate_finite_vec2("pointer", pointer)?;
        let n_rows = validate_n_rows(n_rows)?;
        let before = self.zoom();
        self.zoom_by(factor)?;
        if !self.zoom_to_pointer {
            return Ok(());
        }
        let after = self.zoom();
        let offset = cell_offset(pointer, n_rows);
        self.pan -= Vec2::new(
            offset.x * (1.0 / before.x - 1.0 / after.x),
            offset.y * (1.0 / before.y - 1.0 / after.y),
        );
        Ok(())
    }

    /// Wheel zoom toward `pointer`: each notch (sign of `delta`) scales by `exp(2.5 * 0.05)`.
    pub fn zoom_wheel(&mut self, pointer: Vec2, delta: f64, n_rows: f64) -> GridResult<()> {
        if delta == 0.0 || !delta.is_finite() {
            return Ok(());
        }
        let factor = (2.5 * WHEEL_STEP * delta.signum()).exp();
        self.zoom_at(pointer, factor, n_rows)
    }

    /// Back to level 1 and no pan; limits and aspect are kept.
    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = 1.0_f64.clamp(self.zmin, self.zmax);
    }
}

// Cell-local position of an NDC point, divided by `n_rows` (pan units).
fn cell_offset(pointer: Vec2, n_rows: f64) -> Vec2 {
    let fx = ((pointer.x + 1.0) * 0.5 * n_rows).rem_euclid(1.0);
    let fy = ((1.0 - pointer.y) * 0.5 * n_rows).rem_euclid(1.0);
    Vec2::new(2.0 * fx - 1.0, 1.0 - 2.0 * fy) / (CELL_FILL * n_rows)
}

fn validate_positive(name: &str, v: f64) -> GridResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(GridError::validation(format!(
            "{name} must be finite and > 0, got {v}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/grid/pan_zoom.rs"]
mod tests;
