#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Engine core with the default overlay and a measured width of 160px,
/// roughly what "Your Text Here" measures at 24px Arial.
fn core() -> EngineCore {
    let mut core = EngineCore::new();
    core.set_text_width(160.0);
    core
}

fn drag(core: &mut EngineCore, from: Point, to: Point) {
    core.on_pointer_down(from, Button::Primary);
    core.on_pointer_move(to);
    core.on_pointer_up();
}

// =============================================================
// Overlay inputs
// =============================================================

#[test]
fn set_text_updates_overlay_and_requests_render() {
    let mut core = core();
    assert_eq!(core.set_text("Hello"), Action::RenderNeeded);
    assert_eq!(core.overlay().text, "Hello");
}

#[test]
fn set_text_size_and_color_update_overlay() {
    let mut core = core();
    assert_eq!(core.set_text_size(40.0), Action::RenderNeeded);
    assert_eq!(core.set_text_color("#ff00ff"), Action::RenderNeeded);
    assert_eq!(core.overlay().size, 40.0);
    assert_eq!(core.overlay().color, "#ff00ff");
}

#[test]
fn with_overlay_starts_from_given_state() {
    let overlay = TextOverlay { x: 10.0, y: 20.0, ..TextOverlay::default() };
    let core = EngineCore::with_overlay(overlay);
    assert_eq!(core.position(), pt(10.0, 20.0));
    assert_eq!(core.input, InputState::Idle);
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_on_text_starts_drag() {
    let mut core = core();
    let actions = core.on_pointer_down(pt(100.0, 95.0), Button::Primary);
    assert_eq!(actions, vec![Action::SetCursor("grabbing".to_owned())]);
    assert_eq!(
        core.input,
        InputState::DraggingText { grab_offset: pt(0.0, -5.0) }
    );
}

#[test]
fn pointer_down_outside_text_does_nothing() {
    let mut core = core();
    let actions = core.on_pointer_down(pt(300.0, 400.0), Button::Primary);
    assert!(actions.is_empty());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn pointer_down_with_secondary_button_is_ignored() {
    let mut core = core();
    let actions = core.on_pointer_down(pt(100.0, 95.0), Button::Secondary);
    assert!(actions.is_empty());
    assert!(!core.input.is_dragging());
}

#[test]
fn pointer_down_before_first_measure_only_hits_padding_box() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_down(pt(150.0, 95.0), Button::Primary).is_empty());
    assert!(!core.on_pointer_down(pt(102.0, 95.0), Button::Primary).is_empty());
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn drag_from_anchor_moves_text_to_pointer() {
    let mut core = core();
    drag(&mut core, pt(100.0, 100.0), pt(200.0, 150.0));
    assert_eq!(core.position(), pt(200.0, 150.0));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn drag_preserves_grab_offset() {
    let mut core = core();
    drag(&mut core, pt(130.0, 90.0), pt(230.0, 140.0));
    assert_eq!(core.position(), pt(200.0, 150.0));
}

#[test]
fn move_while_dragging_reports_position_and_render() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    let actions = core.on_pointer_move(pt(120.0, 110.0));
    assert_eq!(actions, vec![Action::PositionChanged { x: 120.0, y: 110.0 }, Action::RenderNeeded]);
}

#[test]
fn move_without_drag_only_updates_cursor() {
    let mut core = core();
    assert_eq!(core.on_pointer_move(pt(100.0, 95.0)), vec![Action::SetCursor("move".to_owned())]);
    assert_eq!(core.on_pointer_move(pt(10.0, 10.0)), vec![Action::SetCursor("default".to_owned())]);
    assert_eq!(core.position(), pt(100.0, 100.0));
}

#[test]
fn drag_maps_client_points_through_viewport() {
    let mut core = core();
    core.set_viewport(Viewport { left: 20.0, top: 40.0, css_width: 200.0, css_height: 250.0 });
    // Client (70, 90) -> canvas (100, 100).
    core.on_pointer_down(pt(70.0, 90.0), Button::Primary);
    // Client (120, 115) -> canvas (200, 150).
    core.on_pointer_move(pt(120.0, 115.0));
    core.on_pointer_up();
    assert_eq!(core.position(), pt(200.0, 150.0));
}

#[test]
fn drag_through_scaled_viewport_snaps_to_whole_pixels() {
    let mut core = core();
    // Drawn at 300x375 CSS px: every CSS pixel is 4/3 canvas pixels.
    core.set_viewport(Viewport { left: 0.0, top: 0.0, css_width: 300.0, css_height: 375.0 });
    // Client (75, 75) -> canvas (100, 100), the anchor itself.
    core.on_pointer_down(pt(75.0, 75.0), Button::Primary);
    // Client (115.2, 100.1) -> canvas (153.6, 133.47).
    let actions = core.on_pointer_move(pt(115.2, 100.1));
    assert_eq!(actions[0], Action::PositionChanged { x: 154.0, y: 133.0 });
    assert_eq!(core.position(), pt(154.0, 133.0));
}

// =============================================================
// Pointer up / leave
// =============================================================

#[test]
fn pointer_up_without_drag_is_noop() {
    let mut core = core();
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn moves_after_release_do_not_drag() {
    let mut core = core();
    drag(&mut core, pt(100.0, 100.0), pt(200.0, 150.0));
    core.on_pointer_move(pt(300.0, 300.0));
    assert_eq!(core.position(), pt(200.0, 150.0));
}

#[test]
fn pointer_leave_ends_drag_and_resets_cursor() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(150.0, 120.0));
    let actions = core.on_pointer_leave();
    assert_eq!(
        actions,
        vec![Action::SetCursor("move".to_owned()), Action::SetCursor("default".to_owned())]
    );
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.position(), pt(150.0, 120.0));
}
