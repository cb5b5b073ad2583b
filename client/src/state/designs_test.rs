use super::*;

fn design(x: f64, y: f64, size: f64) -> ProductDesignItem {
    ProductDesignItem {
        id: 12,
        product_id: 1,
        custom_text: "Hello".to_owned(),
        text_position_x: x,
        text_position_y: y,
        text_size: size,
        text_color: "#ff0000".to_owned(),
        created_at: "2024-03-01T09:00:00".to_owned(),
    }
}

#[test]
fn preview_font_size_is_a_third_with_floor() {
    assert!((preview_font_size(48.0) - 16.0).abs() < f64::EPSILON);
    assert!((preview_font_size(12.0) - 8.0).abs() < f64::EPSILON);
}

#[test]
fn preview_style_positions_as_percent_of_surface() {
    assert_eq!(
        preview_style(&design(200.0, 250.0, 24.0)),
        "font-size: 8px; color: #ff0000; left: 50%; top: 50%;"
    );
}

#[test]
fn details_message_prints_integral_positions_plainly() {
    assert_eq!(
        details_message(&design(200.0, 150.0, 24.0)),
        "Design ID: 12\nPosition: (200, 150)"
    );
    assert_eq!(
        details_message(&design(120.5, 90.0, 24.0)),
        "Design ID: 12\nPosition: (120.5, 90)"
    );
}
