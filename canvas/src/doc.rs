//! Document model: the single text overlay placed on the garment.
//!
//! The customizer edits exactly one object, so there is no store or id
//! space here. `TextOverlay` carries everything the renderer needs and
//! everything the host copies into the saved design: text, anchor position,
//! font size, and color. The anchor is the horizontal center of the text at
//! its alphabetic baseline.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    DEFAULT_TEXT_COLOR, DEFAULT_TEXT_SIZE, DEFAULT_TEXT_X, DEFAULT_TEXT_Y, FONT_FAMILY, PLACEHOLDER_TEXT,
};

/// Text overlay as drawn on the canvas and saved with a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// User-entered text. May be empty while the user is typing.
    pub text: String,
    /// Horizontal center of the text in canvas pixels.
    pub x: f64,
    /// Alphabetic baseline of the text in canvas pixels.
    pub y: f64,
    /// Font size in canvas pixels.
    pub size: f64,
    /// CSS color string for the text fill.
    pub color: String,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            text: PLACEHOLDER_TEXT.to_owned(),
            x: DEFAULT_TEXT_X,
            y: DEFAULT_TEXT_Y,
            size: DEFAULT_TEXT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_owned(),
        }
    }
}

impl TextOverlay {
    /// The string actually drawn; empty text falls back to the placeholder.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() { PLACEHOLDER_TEXT } else { &self.text }
    }

    /// Canvas `font` shorthand, e.g. `"24px Arial"`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{}px {FONT_FAMILY}", self.size)
    }

    /// Current anchor position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the anchor to an absolute position.
    pub fn set_position(&mut self, pt: Point) {
        self.x = pt.x;
        self.y = pt.y;
    }
}
