// tests/integration/projection.rs
//! Orthographic projection scenarios

use matrix4::prelude::*;

/// Pushes the row vector `[x, y, z, 1]` through `transform`.
fn project(transform: &Matrix4x4, x: f32, y: f32, z: f32) -> [f32; 4] {
    let mut point = Matrix4x4::new();
    point.set_row(0, x, y, z, 1.0).unwrap();

    let mut out = Matrix4x4::new();
    out.multiply(&point, transform);
    out.row(0).unwrap()
}

fn assert_close(actual: [f32; 4], expected: [f32; 4]) {
    let tolerance = Tolerance::default();
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(tolerance.matches(*a, *e), "{actual:?} != {expected:?}");
    }
}

#[test]
fn test_unit_box_scenario() {
    let mut m = Matrix4x4::new();
    m.set_to_orthographic(-1.0, 1.0, 1.0, -1.0, 1.0, 100.0);

    assert_eq!(m.at(0, 0).unwrap(), 1.0);
    assert_eq!(m.at(3, 3).unwrap(), 1.0);
}

#[test]
fn test_screen_corners_map_to_clip_space() {
    let ortho = Matrix4x4::orthographic(0.0, 0.0, 800.0, 600.0, -1.0, 1.0);

    assert_close(project(&ortho, 0.0, 0.0, 0.0), [-1.0, 1.0, 0.0, 1.0]);
    assert_close(project(&ortho, 800.0, 600.0, 0.0), [1.0, -1.0, 0.0, 1.0]);
    assert_close(project(&ortho, 400.0, 300.0, 0.0), [0.0, 0.0, 0.0, 1.0]);
    assert_close(project(&ortho, 0.0, 0.0, 1.0), [-1.0, 1.0, -1.0, 1.0]);
}

#[test]
fn test_model_then_projection() {
    let ortho = Matrix4x4::orthographic(0.0, 0.0, 800.0, 600.0, -1.0, 1.0);

    // moves everything 400 right and 300 down
    let translate = Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [400.0, 300.0, 0.0, 1.0],
    ]);

    let mut model_projection = Matrix4x4::new();
    model_projection.multiply(&translate, &ortho);

    assert_close(project(&model_projection, 0.0, 0.0, 0.0), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_reprojecting_overwrites_previous_values() {
    let mut m = Matrix4x4::new_from([9.0; 16]);
    m.set_to_orthographic(-1.0, 1.0, 1.0, -1.0, 1.0, 100.0);

    assert_eq!(m.row(0).unwrap(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(m.row(1).unwrap(), [0.0, 1.0, 0.0, 0.0]);
    assert_eq!(m.column(3).unwrap(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_degenerate_depth_yields_non_finite_values() {
    let m = Matrix4x4::orthographic(-1.0, 1.0, 1.0, -1.0, 5.0, 5.0);

    assert!(m.at(2, 2).unwrap().is_infinite());
    assert!(m.at(3, 2).unwrap().is_infinite());
    assert_eq!(m.at(0, 0).unwrap(), 1.0);
}
