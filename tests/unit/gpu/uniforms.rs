use super::*;
use crate::foundation::core::Vec2;

#[test]
fn block_is_32_bytes_with_wgsl_offsets() {
    assert_eq!(std::mem::size_of::<GridUniforms>(), 32);
    assert_eq!(std::mem::offset_of!(GridUniforms, n_rows), 0);
    assert_eq!(std::mem::offset_of!(GridUniforms, zoom), 8);
    assert_eq!(std::mem::offset_of!(GridUniforms, pan), 16);
}

#[test]
fn packs_transform_uniforms() {
    let t = GridTransform::square(3)
        .unwrap()
        .with_zoom(Vec2::new(2.0, 0.5))
        .unwrap()
        .with_pan(Vec2::new(0.25, -1.0))
        .unwrap();
    let u = GridUniforms::from(&t);
    assert_eq!(u, GridUniforms::new(3.0, [2.0, 0.5], [0.25, -1.0]));

    let bytes = u.as_bytes();
    assert_eq!(bytes.len(), 32);
    assert_eq!(&bytes[0..4], &3.0f32.to_ne_bytes());
    assert_eq!(&bytes[4..8], &[0u8; 4]);
    assert_eq!(&bytes[16..20], &0.25f32.to_ne_bytes());
}
