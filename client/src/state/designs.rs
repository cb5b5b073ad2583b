//! View models for the saved-design gallery.

#[cfg(test)]
#[path = "designs_test.rs"]
mod designs_test;

use canvas::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

use crate::net::types::ProductDesignItem;

pub const DESIGNS_USER_ID: i64 = 1;
pub const DESIGNS_FAILED: &str = "Failed to fetch designs";
pub const DESIGN_DETAIL_FAILED: &str = "Failed to fetch design details";

/// Smallest font size a thumbnail renders at.
const MIN_PREVIEW_FONT_PX: f64 = 8.0;

/// Thumbnail font size: a third of the design size, floored at 8px.
pub fn preview_font_size(text_size: f64) -> f64 {
    (text_size / 3.0).max(MIN_PREVIEW_FONT_PX)
}

/// Inline style placing the thumbnail text at the design's relative position.
pub fn preview_style(design: &ProductDesignItem) -> String {
    let left = design.text_position_x / CANVAS_WIDTH * 100.0;
    let top = design.text_position_y / CANVAS_HEIGHT * 100.0;
    format!(
        "font-size: {}px; color: {}; left: {left}%; top: {top}%;",
        preview_font_size(design.text_size),
        design.text_color,
    )
}

/// Alert body for "View Details".
pub fn details_message(design: &ProductDesignItem) -> String {
    format!(
        "Design ID: {}\nPosition: ({}, {})",
        design.id, design.text_position_x, design.text_position_y
    )
}
