#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Rect};
use crate::consts::SELECTION_PAD;
use crate::doc::TextOverlay;

/// Result of a successful hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Pointer position relative to the text anchor at the moment of the hit.
    pub offset: Point,
}

/// Padded bounding box of the overlay text.
///
/// `text_width` is the measured advance width of [`TextOverlay::display_text`]
/// in the overlay's font. The box spans from one font-size above the
/// baseline to the baseline, padded by `SELECTION_PAD` on every side; the
/// renderer outlines exactly this rectangle.
#[must_use]
pub fn text_bounds(overlay: &TextOverlay, text_width: f64) -> Rect {
    Rect::new(
        overlay.x - text_width / 2.0 - SELECTION_PAD,
        overlay.y - overlay.size - SELECTION_PAD,
        text_width + SELECTION_PAD * 2.0,
        overlay.size + SELECTION_PAD * 2.0,
    )
}

/// Test whether `pt` (canvas pixels) lands on the overlay text.
#[must_use]
pub fn hit_test(pt: Point, overlay: &TextOverlay, text_width: f64) -> Option<Hit> {
    if !text_bounds(overlay, text_width).contains(pt) {
        return None;
    }
    Some(Hit { offset: Point::new(pt.x - overlay.x, pt.y - overlay.y) })
}
