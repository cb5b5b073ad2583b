use super::*;

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_dragging());
}

#[test]
fn dragging_state_reports_dragging() {
    let state = InputState::DraggingText { grab_offset: Point::new(1.0, 2.0) };
    assert!(state.is_dragging());
}

#[test]
fn button_from_dom_maps_standard_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_dom_treats_extra_buttons_as_secondary() {
    assert_eq!(Button::from_dom(3), Button::Secondary);
    assert_eq!(Button::from_dom(4), Button::Secondary);
}
