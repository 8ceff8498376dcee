pub(crate) mod uniforms;
pub(crate) mod wgsl;
