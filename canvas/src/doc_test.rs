#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_overlay_matches_customizer_defaults() {
    let overlay = TextOverlay::default();
    assert_eq!(overlay.text, "Your Text Here");
    assert_eq!(overlay.position(), Point::new(100.0, 100.0));
    assert_eq!(overlay.size, 24.0);
    assert_eq!(overlay.color, "#000000");
}

#[test]
fn display_text_falls_back_to_placeholder_when_empty() {
    let overlay = TextOverlay { text: String::new(), ..TextOverlay::default() };
    assert_eq!(overlay.display_text(), "Your Text Here");
}

#[test]
fn display_text_uses_user_text_when_present() {
    let overlay = TextOverlay { text: "Hello".to_owned(), ..TextOverlay::default() };
    assert_eq!(overlay.display_text(), "Hello");
}

#[test]
fn font_formats_integral_sizes_without_fraction() {
    let overlay = TextOverlay { size: 36.0, ..TextOverlay::default() };
    assert_eq!(overlay.font(), "36px Arial");
}

#[test]
fn set_position_replaces_anchor() {
    let mut overlay = TextOverlay::default();
    overlay.set_position(Point::new(250.0, 320.0));
    assert_eq!(overlay.x, 250.0);
    assert_eq!(overlay.y, 320.0);
}

#[test]
fn overlay_deserializes_from_json() {
    let overlay: TextOverlay = serde_json::from_value(serde_json::json!({
        "text": "Merch",
        "x": 150.0,
        "y": 210.0,
        "size": 30.0,
        "color": "#ff0000",
    }))
    .unwrap();
    assert_eq!(overlay.display_text(), "Merch");
    assert_eq!(overlay.position(), Point::new(150.0, 210.0));
}
