use super::*;

#[test]
fn rects_match_two_by_two_layout() {
    let t = GridTransform::square(2).unwrap();
    let r = t.cell_rect(0);
    assert!((r.x0 - -0.975).abs() < 1e-12);
    assert!((r.x1 - -0.025).abs() < 1e-12);
    assert!((r.y0 - 0.025).abs() < 1e-12);
    assert!((r.y1 - 0.975).abs() < 1e-12);
    assert_eq!(t.cell_center(3), Vec2::new(0.5, -0.5));
}

#[test]
fn rects_are_disjoint_and_inside_viewport() {
    let t = GridTransform::square(3).unwrap();
    let rects: Vec<_> = t.cells().collect();
    assert_eq!(rects.len(), 9);
    for (i, a) in &rects {
        assert!(a.x0 > -1.0 && a.x1 < 1.0 && a.y0 > -1.0 && a.y1 < 1.0);
        for (j, b) in &rects {
            if i != j {
                assert!(a.intersect(*b).area() == 0.0, "cells {i} and {j} overlap");
            }
        }
    }
}

#[test]
fn cell_at_inverts_to_box() {
    let t = GridTransform::square(4).unwrap();
    let locals = [
        Vec2::ZERO,
        Vec2::new(0.9, -0.9),
        Vec2::new(-1.0, 1.0),
        Vec2::new(0.3, 0.7),
    ];
    for index in 0..t.cell_count() {
        for local in locals {
            let device = t.to_box(local, index as f64);
            let hit = t.cell_at(device).expect("inside a cell");
            assert_eq!(hit.index, index);
            assert!((hit.local - local).hypot() < 1e-9);
        }
    }
}

#[test]
fn cell_at_misses_gutters_and_outside() {
    let t = GridTransform::square(2).unwrap();
    // Vertical gutter between column 0 and column 1.
    assert_eq!(t.cell_at(Vec2::new(0.0, 0.5)), None);
    assert_eq!(t.cell_at(Vec2::new(1.0, 1.0)), None);
    assert_eq!(t.cell_at(Vec2::new(1.5, 0.0)), None);
    assert_eq!(t.cell_at(Vec2::new(f64::NAN, 0.0)), None);
}

#[test]
fn cell_at_requires_integral_rows() {
    let t = GridTransform::new(2.5).unwrap();
    assert_eq!(t.cell_at(Vec2::ZERO), None);
}
