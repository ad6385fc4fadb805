#![allow(clippy::float_cmp)]

use super::*;

fn cfg() -> LayoutConfig {
    LayoutConfig::default()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

// =============================================================
// clamp_during_drag
// =============================================================

#[test]
fn clamp_inside_bounds_is_identity() {
    let cases = [pt(0.0, 0.0), pt(-50.0, 0.0), pt(950.0, 1300.0), pt(412.5, 733.0), pt(-12.0, 1299.0)];
    for raw in cases {
        assert_eq!(clamp_during_drag(raw, vp(), &cfg()), raw, "raw {raw:?}");
    }
}

#[test]
fn clamp_lower_bounds() {
    assert_eq!(clamp_during_drag(pt(-1000.0, -1000.0), vp(), &cfg()), pt(-50.0, 0.0));
}

#[test]
fn clamp_upper_bounds() {
    assert_eq!(clamp_during_drag(pt(5000.0, 5000.0), vp(), &cfg()), pt(950.0, 1300.0));
}

#[test]
fn clamp_axes_independent() {
    assert_eq!(clamp_during_drag(pt(-400.0, 500.0), vp(), &cfg()), pt(-50.0, 500.0));
    assert_eq!(clamp_during_drag(pt(300.0, -1.0), vp(), &cfg()), pt(300.0, 0.0));
}

#[test]
fn clamp_allows_far_below_fold() {
    let p = clamp_during_drag(pt(100.0, 1250.0), vp(), &cfg());
    assert_eq!(p.y, 1250.0);
}

#[test]
fn clamp_tiny_viewport_lower_bound_wins() {
    let p = clamp_during_drag(pt(10.0, 10.0), Viewport::new(0.0, 0.0), &cfg());
    assert_eq!(p.x, -50.0);
    let p = clamp_during_drag(pt(500.0, 10.0), Viewport::new(-100.0, 0.0), &cfg());
    assert_eq!(p.x, -50.0);
}

#[test]
fn clamp_respects_config() {
    let config = LayoutConfig { left_overhang: 0.0, right_margin: 250.0, bottom_overscroll: 0.0, ..cfg() };
    assert_eq!(clamp_during_drag(pt(-20.0, 900.0), vp(), &config), pt(0.0, 800.0));
    assert_eq!(clamp_during_drag(pt(900.0, 10.0), vp(), &config), pt(750.0, 10.0));
}

// =============================================================
// snap_on_release
// =============================================================

#[test]
fn snap_with_no_others_is_identity() {
    let snap = snap_on_release(pt(105.0, 200.0), Vec::new(), &cfg());
    assert_eq!(snap.position, pt(105.0, 200.0));
    assert!(snap.row.is_none());
    assert!(snap.column.is_none());
    assert!(!snap.snapped());
}

#[test]
fn snap_row_within_threshold() {
    // y diff 5 snaps; x diff 35 does not.
    let snap = snap_on_release(pt(135.0, 200.0), vec![pt(100.0, 205.0)], &cfg());
    assert_eq!(snap.position, pt(135.0, 205.0));
    assert_eq!(snap.row, Some(205.0));
    assert!(snap.column.is_none());
}

#[test]
fn snap_column_within_threshold() {
    // x diff 25 snaps; y diff 45 does not.
    let snap = snap_on_release(pt(125.0, 245.0), vec![pt(100.0, 200.0)], &cfg());
    assert_eq!(snap.position, pt(100.0, 245.0));
    assert!(snap.row.is_none());
    assert_eq!(snap.column, Some(100.0));
}

#[test]
fn snap_both_axes() {
    let snap = snap_on_release(pt(105.0, 235.0), vec![pt(100.0, 200.0)], &cfg());
    assert_eq!(snap.position, pt(100.0, 200.0));
    assert!(snap.snapped());
}

#[test]
fn snap_neither_axis_outside_thresholds() {
    let snap = snap_on_release(pt(135.0, 245.0), vec![pt(100.0, 200.0)], &cfg());
    assert_eq!(snap.position, pt(135.0, 245.0));
    assert!(!snap.snapped());
}

#[test]
fn snap_exact_threshold_does_not_snap() {
    let snap = snap_on_release(pt(130.0, 240.0), vec![pt(100.0, 200.0)], &cfg());
    assert_eq!(snap.position, pt(130.0, 240.0));
    assert!(!snap.snapped());
}

#[test]
fn snap_just_inside_threshold_snaps() {
    let snap = snap_on_release(pt(129.5, 239.5), vec![pt(100.0, 200.0)], &cfg());
    assert_eq!(snap.position, pt(100.0, 200.0));
}

#[test]
fn snap_is_symmetric_in_direction() {
    let above = snap_on_release(pt(400.0, 170.0), vec![pt(0.0, 200.0)], &cfg());
    let below = snap_on_release(pt(400.0, 230.0), vec![pt(0.0, 200.0)], &cfg());
    assert_eq!(above.position.y, 200.0);
    assert_eq!(below.position.y, 200.0);
}

#[test]
fn snap_row_last_match_wins() {
    // Both within 40 on y; the nearer one comes first, the farther one last.
    let others = vec![pt(600.0, 201.0), pt(900.0, 230.0)];
    let snap = snap_on_release(pt(100.0, 200.0), others, &cfg());
    assert_eq!(snap.position.y, 230.0);
}

#[test]
fn snap_row_last_match_wins_reversed_order() {
    let others = vec![pt(900.0, 230.0), pt(600.0, 201.0)];
    let snap = snap_on_release(pt(100.0, 200.0), others, &cfg());
    assert_eq!(snap.position.y, 201.0);
}

#[test]
fn snap_column_last_match_wins() {
    let others = vec![pt(101.0, 900.0), pt(125.0, 600.0), pt(400.0, 10.0)];
    let snap = snap_on_release(pt(100.0, 300.0), others, &cfg());
    assert_eq!(snap.position.x, 125.0);
}

#[test]
fn snap_axes_can_come_from_different_notes() {
    let others = vec![pt(700.0, 210.0), pt(90.0, 600.0)];
    let snap = snap_on_release(pt(100.0, 200.0), others, &cfg());
    assert_eq!(snap.position, pt(90.0, 210.0));
}

#[test]
fn snap_non_matching_later_note_does_not_clear_match() {
    let others = vec![pt(900.0, 210.0), pt(900.0, 700.0)];
    let snap = snap_on_release(pt(100.0, 200.0), others, &cfg());
    assert_eq!(snap.row, Some(210.0));
}

#[test]
fn snap_accepts_borrowed_iterators() {
    let others = [pt(100.0, 205.0)];
    let snap = snap_on_release(pt(140.0, 200.0), others.iter().copied(), &cfg());
    assert_eq!(snap.position, pt(140.0, 205.0));
}

#[test]
fn snap_zero_threshold_never_snaps() {
    let config = LayoutConfig { row_snap_distance: 0.0, column_snap_distance: 0.0, ..cfg() };
    let snap = snap_on_release(pt(100.0, 200.0), vec![pt(100.0, 200.0)], &config);
    assert!(!snap.snapped());
}

// =============================================================
// resize
// =============================================================

#[test]
fn resize_grows_with_pointer() {
    let size = resize(Size::new(250.0, 200.0), pt(500.0, 500.0), pt(560.0, 530.0), &cfg());
    assert_eq!(size, Size::new(310.0, 230.0));
}

#[test]
fn resize_clamps_to_minimum() {
    let size = resize(Size::new(250.0, 200.0), pt(500.0, 500.0), pt(100.0, 100.0), &cfg());
    assert_eq!(size, Size::new(200.0, 150.0));
}

#[test]
fn resize_zero_delta_keeps_size() {
    let size = resize(Size::new(275.0, 180.0), pt(10.0, 10.0), pt(10.0, 10.0), &cfg());
    assert_eq!(size, Size::new(275.0, 180.0));
}

#[test]
fn resize_axes_clamp_independently() {
    let size = resize(Size::new(250.0, 200.0), pt(0.0, 0.0), pt(100.0, -100.0), &cfg());
    assert_eq!(size, Size::new(350.0, 150.0));
}

// =============================================================
// new_note_origin
// =============================================================

#[test]
fn new_note_origin_top_right() {
    assert_eq!(new_note_origin(Viewport::new(1280.0, 720.0), &cfg()), pt(980.0, 200.0));
}
