//! WGSL rendition of the grid transforms.

/// WGSL source declaring `GridUniforms` at `@group(0) @binding(0)` and the functions
/// `row_col`, `to_box`, `grid_clip`, `grid_clip_default` and `pan_zoom_grid`.
pub const GRID_WGSL: &str = include_str!("shaders/grid.wgsl");

const DEFAULT_BINDING: &str = "@group(0) @binding(0)";

/// [`GRID_WGSL`] with the uniform bound at `group`/`binding` instead of `0`/`0`.
pub fn grid_wgsl_at(group: u32, binding: u32) -> String {
    GRID_WGSL.replacen(
        DEFAULT_BINDING,
        &format!("@group({group}) @binding({binding})"),
        1,
    )
}
