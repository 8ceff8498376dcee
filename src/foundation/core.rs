use crate::foundation::error::{GridError, GridResult};

pub use kurbo::{Point, Rect, Vec2};

/// Fraction of its allotted slot a cell occupies along each axis.
///
/// The remaining 5% is split into the gutter between neighbouring cells.
pub const CELL_FILL: f64 = 0.95;

/// Clip limit used by [`crate::grid_clip`].
pub const DEFAULT_CLIP_LIMIT: f64 = 0.95;

/// Multiply two vectors componentwise.
#[inline]
pub fn mul_componentwise(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

pub(crate) fn validate_n_rows(n_rows: f64) -> GridResult<f64> {
    if !n_rows.is_finite() {
        return Err(GridError::validation("n_rows must be finite"));
    }
    if n_rows <= 0.0 {
        return Err(GridError::validation("n_rows must be > 0"));
    }
    Ok(n_rows)
}

pub(crate) fn validate_finite_vec2(name: &str, v: Vec2) -> GridResult<Vec2> {
    if !v.is_finite() {
        return Err(GridError::validation(format!("{name} must be finite")));
    }
    Ok(v)
}
