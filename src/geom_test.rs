#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_offset_from() {
    let p = Point::new(130.0, 95.0).offset_from(Point::new(100.0, 80.0));
    assert_eq!(p, Point::new(30.0, 15.0));
}

#[test]
fn point_offset_from_can_go_negative() {
    let p = Point::new(10.0, 10.0).offset_from(Point::new(25.0, 40.0));
    assert_eq!(p, Point::new(-15.0, -30.0));
}

#[test]
fn point_distance_to_pythagorean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_distance_to_is_symmetric() {
    let a = Point::new(-7.5, 2.0);
    let b = Point::new(12.0, -3.25);
    assert!(approx_eq(a.distance_to(b), b.distance_to(a)));
}

#[test]
fn point_distance_to_self_is_zero() {
    let a = Point::new(42.0, 17.0);
    assert_eq!(a.distance_to(a), 0.0);
}

#[test]
fn point_trunc_rounds_toward_zero() {
    assert_eq!(Point::new(12.9, -12.9).trunc(), Point::new(12.0, -12.0));
}

#[test]
fn point_serde_field_names() {
    let json = serde_json::to_value(Point::new(1.5, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": 2.0 }));
}

// --- Size / Viewport ---

#[test]
fn size_new() {
    let s = Size::new(250.0, 180.0);
    assert_eq!(s.width, 250.0);
    assert_eq!(s.height, 180.0);
}

#[test]
fn viewport_default_is_zero() {
    let v = Viewport::default();
    assert_eq!(v.width, 0.0);
    assert_eq!(v.height, 0.0);
}
