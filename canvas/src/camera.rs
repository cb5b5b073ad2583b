#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// A point in either client (CSS) or canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive containment test on all four edges.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// Where the canvas element sits on the page and how large it is drawn.
///
/// The backing store is always `CANVAS_WIDTH` × `CANVAS_HEIGHT`, but CSS may
/// shrink the element to fit narrow layouts. Pointer events arrive in client
/// coordinates and have to be scaled back into backing pixels before they
/// can be hit-tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client-space left edge of the element.
    pub left: f64,
    /// Client-space top edge of the element.
    pub top: f64,
    /// Rendered CSS width of the element.
    pub css_width: f64,
    /// Rendered CSS height of the element.
    pub css_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { left: 0.0, top: 0.0, css_width: CANVAS_WIDTH, css_height: CANVAS_HEIGHT }
    }
}

impl Viewport {
    /// Horizontal backing pixels per CSS pixel. Degenerate layouts map 1:1.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        if self.css_width > 0.0 { CANVAS_WIDTH / self.css_width } else { 1.0 }
    }

    /// Vertical backing pixels per CSS pixel. Degenerate layouts map 1:1.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        if self.css_height > 0.0 { CANVAS_HEIGHT / self.css_height } else { 1.0 }
    }

    /// Convert a client-space point (e.g. `MouseEvent.clientX/Y`) to canvas pixels.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point {
            x: (client.x - self.left) * self.scale_x(),
            y: (client.y - self.top) * self.scale_y(),
        }
    }
}
