use super::*;
use crate::grid::transform::GridTransform;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).hypot() < 1e-9
}

// Data-space point displayed under `pointer` for the current view.
fn data_under(state: &PanZoom, pointer: Vec2, n_rows: f64) -> Vec2 {
    let t = GridTransform::new(n_rows).unwrap().with_pan_zoom(state);
    let hit = t.cell_at(pointer).expect("pointer inside a cell");
    let z = t.zoom();
    Vec2::new(hit.local.x / z.x, hit.local.y / z.y) - t.pan() * n_rows
}

#[test]
fn default_is_identity() {
    let s = PanZoom::default();
    assert_eq!(s.zoom(), Vec2::new(1.0, 1.0));
    assert_eq!(s.zoom_level(), 1.0);
    assert_eq!(s.pan(), Vec2::ZERO);
    assert_eq!((s.zmin(), s.zmax()), (DEFAULT_ZMIN, DEFAULT_ZMAX));
    assert!(s.zoom_to_pointer());
}

#[test]
fn pan_accumulates() {
    let mut s = PanZoom::default();
    s.pan_by(Vec2::new(0.25, -0.5)).unwrap();
    s.pan_by(Vec2::new(0.25, 0.0)).unwrap();
    assert_eq!(s.pan(), Vec2::new(0.5, -0.5));
    assert!(s.pan_by(Vec2::new(f64::NAN, 0.0)).is_err());
}

#[test]
fn zoom_level_is_clamped_to_limits() {
    let mut s = PanZoom::default();
    s.zoom_by(2.0).unwrap();
    assert_eq!(s.zoom_level(), 2.0);

    s.zoom_by(1e9).unwrap();
    assert_eq!(s.zoom_level(), DEFAULT_ZMAX);

    s.set_zoom_level(1e-9).unwrap();
    assert_eq!(s.zoom_level(), DEFAULT_ZMIN);
}

#[test]
fn zoom_rejects_non_positive_factor() {
    let mut s = PanZoom::default();
    assert!(s.zoom_by(0.0).is_err());
    assert!(s.zoom_by(-2.0).is_err());
    assert!(s.zoom_by(f64::INFINITY).is_err());
    assert_eq!(s, PanZoom::default());
}

#[test]
fn limit_setters_keep_zmin_below_zmax() {
    let mut s = PanZoom::default();
    s.set_zmax(10.0).unwrap();
    s.set_zmin(50.0).unwrap();
    assert_eq!(s.zmin(), 10.0);
    assert_eq!(s.zoom_level(), 10.0);

    s.set_zmin(0.5).unwrap();
    s.set_zmax(0.1).unwrap();
    assert_eq!(s.zmax(), 0.5);
    assert_eq!(s.zoom_level(), 0.5);
    assert!(s.set_zmin(0.0).is_err());
}

#[test]
fn zoom_uniform_applies_canvas_and_scene_aspect() {
    let mut s = PanZoom::new(2.0, Vec2::ZERO).unwrap();
    s.set_canvas_size(800.0, 400.0).unwrap();
    assert_eq!(s.canvas_aspect(), Vec2::new(0.5, 1.0));
    assert_eq!(s.zoom(), Vec2::new(1.0, 2.0));

    s.set_aspect(Some(1.5)).unwrap();
    assert_eq!(s.zoom(), Vec2::new(1.5, 3.0));

    s.set_canvas_size(300.0, 600.0).unwrap();
    assert_eq!(s.canvas_aspect(), Vec2::new(1.0, 0.5));

    s.set_aspect(None).unwrap();
    assert_eq!(s.zoom(), Vec2::new(2.0, 2.0));
    assert!(s.set_aspect(Some(-1.0)).is_err());
}

#[test]
fn drag_is_divided_by_effective_zoom() {
    let mut s = PanZoom::new(4.0, Vec2::ZERO).unwrap();
    s.set_canvas_size(200.0, 100.0).unwrap();
    s.pan_drag(Vec2::new(0.4, -0.2)).unwrap();
    // zoom uniform is (2, 4)
    assert!(close(s.pan(), Vec2::new(0.2, -0.05)));
}

#[test]
fn arrow_steps_scale_with_zoom_level() {
    let mut s = PanZoom::new(2.0, Vec2::ZERO).unwrap();
    s.pan_step(PanDirection::Left);
    assert!(close(s.pan(), Vec2::new(0.05, 0.0)));
    s.pan_step(PanDirection::Up);
    assert!(close(s.pan(), Vec2::new(0.05, -0.05)));
    s.pan_step(PanDirection::Right);
    s.pan_step(PanDirection::Down);
    assert!(close(s.pan(), Vec2::ZERO));
}

#[test]
fn keyboard_zoom_steps() {
    let mut s = PanZoom::default();
    s.zoom_step(true);
    assert!((s.zoom_level() - 1.05).abs() < 1e-12);
    s.zoom_step(false);
    assert!((s.zoom_level() - 1.05 * 0.95).abs() < 1e-12);
}

#[test]
fn zoom_at_keeps_point_under_pointer_fixed() {
    let n_rows = 3.0;
    let pointer = Vec2::new(0.3, -0.45);

    let mut s = PanZoom::new(1.5, Vec2::new(0.02, -0.01)).unwrap();
    s.set_canvas_size(640.0, 480.0).unwrap();
    let before = data_under(&s, pointer, n_rows);

    s.zoom_at(pointer, 1.8, n_rows).unwrap();
    assert!((s.zoom_level() - 2.7).abs() < 1e-12);
    assert!(close(data_under(&s, pointer, n_rows), before));

    s.zoom_wheel(pointer, -3.0, n_rows).unwrap();
    assert!(close(data_under(&s, pointer, n_rows), before));
}

#[test]
fn zoom_at_center_of_cell_leaves_pan_alone() {
    let mut s = PanZoom::default();
    // Center of cell 0 in a 2x2 grid.
    s.zoom_at(Vec2::new(-0.5, 0.5), 3.0, 2.0).unwrap();
    assert!(close(s.pan(), Vec2::ZERO));
}

#[test]
fn zoom_at_without_pointer_tracking_only_zooms() {
    let mut s = PanZoom::default();
    s.set_zoom_to_pointer(false);
    s.zoom_at(Vec2::new(0.7, 0.7), 2.0, 2.0).unwrap();
    assert_eq!(s.pan(), Vec2::ZERO);
    assert_eq!(s.zoom_level(), 2.0);
}

#[test]
fn reset_keeps_limits_and_aspect() {
    let mut s = PanZoom::new(3.0, Vec2::new(1.0, 1.0)).unwrap();
    s.set_aspect(Some(2.0)).unwrap();
    s.reset();
    assert_eq!(s.pan(), Vec2::ZERO);
    assert_eq!(s.zoom_level(), 1.0);
    assert_eq!(s.aspect(), Some(2.0));
}
