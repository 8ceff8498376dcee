//! Cell geometry: padded rectangles and the NDC → cell inverse.

use crate::foundation::core::{CELL_FILL, Rect, Vec2};
use crate::grid::transform::GridTransform;

// Slack for round-off when recovering local coordinates on a cell edge.
const EDGE_EPS: f64 = 1e-9;

/// A device point resolved to the cell that contains it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CellHit {
    /// Linear cell index.
    pub index: usize,
    /// Cell-local coordinates, within `[-1, 1]²`.
    pub local: Vec2,
}

impl GridTransform {
    /// Half-extent of a padded cell in NDC.
    pub fn cell_half_extent(&self) -> f64 {
        CELL_FILL / self.n_rows()
    }

    /// NDC center of cell `index`.
    pub fn cell_center(&self, index: usize) -> Vec2 {
        self.to_box(Vec2::ZERO, index as f64)
    }

    /// Padded box of cell `index` in NDC.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let c = self.cell_center(index);
        let h = self.cell_half_extent();
        Rect::new(c.x - h, c.y - h, c.x + h, c.y + h)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..self.cell_count()).map(|i| (i, self.cell_rect(i)))
    }

    /// Find the cell whose padded box contains `device`.
    ///
    /// Returns `None` outside the viewport, inside a gutter, or when the grid has a
    /// non-integral row count (cells then do not tile the viewport on a regular lattice).
    pub fn cell_at(&self, device: Vec2) -> Option<CellHit> {
        let n = self.n_rows();
        if n.fract() != 0.0 || !device.is_finite() {
            return None;
        }
        if device.x.abs() > 1.0 || device.y.abs() > 1.0 {
            return None;
        }
        let slot = 2.0 / n;
        let col = ((device.x + 1.0) / slot).floor().min(n - 1.0);
        let row = ((1.0 - device.y) / slot).floor().min(n - 1.0);
        let index = row * n + col;

        let center = self.to_box(Vec2::ZERO, index);
        let local = (device - center) / self.cell_half_extent();
        if local.x.abs() > 1.0 + EDGE_EPS || local.y.abs() > 1.0 + EDGE_EPS {
            return None;
        }
        Some(CellHit {
            index: index as usize,
            local,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/cells.rs"]
mod tests;
