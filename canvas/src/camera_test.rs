#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_sets_fields() {
    let p = Point::new(3.0, -4.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, -4.5);
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_interior_point() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(r.contains(Point::new(60.0, 45.0)));
}

#[test]
fn rect_contains_is_inclusive_on_edges() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(110.0, 70.0)));
}

#[test]
fn rect_excludes_outside_points() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(!r.contains(Point::new(9.9, 30.0)));
    assert!(!r.contains(Point::new(50.0, 70.1)));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn default_viewport_maps_one_to_one() {
    let vp = Viewport::default();
    assert_eq!(vp.client_to_canvas(Point::new(120.0, 80.0)), Point::new(120.0, 80.0));
}

#[test]
fn viewport_subtracts_element_origin() {
    let vp = Viewport { left: 30.0, top: 200.0, ..Viewport::default() };
    assert_eq!(vp.client_to_canvas(Point::new(130.0, 300.0)), Point::new(100.0, 100.0));
}

#[test]
fn viewport_scales_shrunken_element() {
    let vp = Viewport { left: 0.0, top: 0.0, css_width: 200.0, css_height: 250.0 };
    assert_eq!(vp.scale_x(), 2.0);
    assert_eq!(vp.scale_y(), 2.0);
    assert_eq!(vp.client_to_canvas(Point::new(50.0, 50.0)), Point::new(100.0, 100.0));
}

#[test]
fn viewport_with_zero_size_does_not_divide_by_zero() {
    let vp = Viewport { left: 5.0, top: 5.0, css_width: 0.0, css_height: 0.0 };
    assert_eq!(vp.client_to_canvas(Point::new(15.0, 25.0)), Point::new(10.0, 20.0));
}
