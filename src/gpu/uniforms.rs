//! GPU-compatible uniform block for the grid shader functions.

use bytemuck::{Pod, Zeroable};

use crate::grid::transform::GridTransform;

/// Uniform data consumed by [`crate::GRID_WGSL`].
///
/// Field offsets follow WGSL uniform layout: `n_rows` at 0, `zoom` at 8, `pan` at 16, and the
/// struct padded to 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GridUniforms {
    /// Rows (and columns) in the grid.
    pub n_rows: f32,
    _pad0: f32,
    /// Per-axis zoom factor.
    pub zoom: [f32; 2],
    /// Per-axis pan offset, in grid widths.
    pub pan: [f32; 2],
    _pad1: [f32; 2],
}

impl GridUniforms {
    pub fn new(n_rows: f32, zoom: [f32; 2], pan: [f32; 2]) -> Self {
        Self {
            n_rows,
            _pad0: 0.0,
            zoom,
            pan,
            _pad1: [0.0; 2],
        }
    }

    /// Bytes ready for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&GridTransform> for GridUniforms {
    fn from(t: &GridTransform) -> Self {
        let zoom = t.zoom();
        let pan = t.pan();
        Self::new(
            t.n_rows() as f32,
            [zoom.x as f32, zoom.y as f32],
            [pan.x as f32, pan.y as f32],
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gpu/uniforms.rs"]
mod tests;
