//! Product customizer form state.
//!
//! The text overlay is the same [`TextOverlay`] the canvas engine edits, so
//! the saved position is whatever the engine last reported.

#[cfg(test)]
#[path = "customizer_test.rs"]
mod customizer_test;

use canvas::camera::Point;
use canvas::consts::DEFAULT_TEXT_COLOR;
use canvas::doc::TextOverlay;

use crate::net::types::ProductDesignCreateRequest;
use crate::util::color::normalize_hex_color;

pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_PRODUCT_ID: i64 = 1;
pub const TEXT_SIZE_MIN: f64 = 12.0;
pub const TEXT_SIZE_MAX: f64 = 48.0;

pub const TEXT_REQUIRED: &str = "Text is required";
pub const DESIGN_SAVED: &str = "Design saved successfully!";
pub const DESIGN_FAILED: &str = "Failed to save design. Please try again.";
pub const PRODUCT_IMAGE_FAILED: &str = "Failed to load product image";

#[derive(Clone, Debug, PartialEq)]
pub struct DesignForm {
    pub user_id: i64,
    pub product_id: i64,
    pub overlay: TextOverlay,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
            product_id: DEFAULT_PRODUCT_ID,
            overlay: TextOverlay::default(),
        }
    }
}

impl DesignForm {
    pub fn set_text(&mut self, text: &str) {
        self.overlay.text = text.to_owned();
    }

    /// Set the font size, clamped to the slider range.
    pub fn set_text_size(&mut self, size: f64) {
        if size.is_finite() {
            self.overlay.size = size.clamp(TEXT_SIZE_MIN, TEXT_SIZE_MAX);
        }
    }

    pub fn set_text_color(&mut self, raw: &str) {
        self.overlay.color = normalize_hex_color(raw, DEFAULT_TEXT_COLOR);
    }

    pub fn set_position(&mut self, pt: Point) {
        self.overlay.set_position(pt);
    }

    /// Design payload at the current overlay position.
    ///
    /// # Errors
    ///
    /// Returns [`TEXT_REQUIRED`] when the custom text is blank.
    pub fn to_request(&self) -> Result<ProductDesignCreateRequest, &'static str> {
        if self.overlay.text.trim().is_empty() {
            return Err(TEXT_REQUIRED);
        }
        Ok(ProductDesignCreateRequest {
            user_id: self.user_id,
            product_id: self.product_id,
            custom_text: self.overlay.text.clone(),
            text_position_x: whole_px(self.overlay.x),
            text_position_y: whole_px(self.overlay.y),
            text_size: self.overlay.size,
            text_color: self.overlay.color.clone(),
        })
    }
}

/// Round a canvas coordinate to the nearest whole pixel.
#[allow(clippy::cast_possible_truncation)]
fn whole_px(v: f64) -> i64 {
    v.round() as i64
}

/// Customizer state outside the saved payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomizerUi {
    pub saving: bool,
    pub error: Option<&'static str>,
}
