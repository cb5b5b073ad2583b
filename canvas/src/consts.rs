//! Shared numeric and color constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Backing width of the customizer canvas in canvas pixels.
pub const CANVAS_WIDTH: f64 = 400.0;

/// Backing height of the customizer canvas in canvas pixels.
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Inset of the mock garment rectangle from each canvas edge.
pub const GARMENT_INSET: f64 = 50.0;

// ── Colors ──────────────────────────────────────────────────────

/// Canvas backdrop behind the garment.
pub const BACKDROP_FILL: &str = "#f3f4f6";

/// Garment body fill.
pub const GARMENT_FILL: &str = "#ffffff";

/// Garment outline.
pub const GARMENT_STROKE: &str = "#d1d5db";

/// Dashed selection outline around the text.
pub const SELECTION_STROKE: &str = "#3b82f6";

// ── Text ────────────────────────────────────────────────────────

/// Drawn in place of the overlay text when the text is empty.
pub const PLACEHOLDER_TEXT: &str = "Your Text Here";

/// Font family used for the overlay text.
pub const FONT_FAMILY: &str = "Arial";

/// Padding between the text extent and the selection outline / hit box.
pub const SELECTION_PAD: f64 = 5.0;

/// Dash and gap length of the selection outline.
pub const SELECTION_DASH: f64 = 5.0;

/// Starting position of a fresh overlay.
pub const DEFAULT_TEXT_X: f64 = 100.0;

/// Starting position of a fresh overlay.
pub const DEFAULT_TEXT_Y: f64 = 100.0;

/// Font size of a fresh overlay in canvas pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 24.0;

/// Text color of a fresh overlay.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
