use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Point, Viewport};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::doc::TextOverlay;
use crate::hit::hit_test;
use crate::input::{Button, InputState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The text anchor moved; the host mirrors it into form state.
    PositionChanged { x: f64, y: f64 },
    /// The host should set the canvas CSS cursor.
    SetCursor(String),
    /// The scene changed and should be redrawn.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub overlay: TextOverlay,
    pub input: InputState,
    pub viewport: Viewport,
    /// Advance width of the displayed text as last measured by the renderer.
    pub text_width: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing overlay (e.g. form defaults).
    #[must_use]
    pub fn with_overlay(overlay: TextOverlay) -> Self {
        Self { overlay, ..Self::default() }
    }

    // --- Overlay inputs ---

    pub fn set_text(&mut self, text: &str) -> Action {
        text.clone_into(&mut self.overlay.text);
        Action::RenderNeeded
    }

    pub fn set_text_size(&mut self, size: f64) -> Action {
        self.overlay.size = size;
        Action::RenderNeeded
    }

    pub fn set_text_color(&mut self, color: &str) -> Action {
        color.clone_into(&mut self.overlay.color);
        Action::RenderNeeded
    }

    /// Record the text width measured by the renderer.
    pub fn set_text_width(&mut self, width: f64) {
        self.text_width = width;
    }

    /// Record where the canvas element sits and how large it is drawn.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Pointer input ---

    /// Begin a drag if the primary button lands on the text.
    pub fn on_pointer_down(&mut self, client_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let pt = self.viewport.client_to_canvas(client_pt);
        let Some(hit) = hit_test(pt, &self.overlay, self.text_width) else {
            return Vec::new();
        };
        self.input = InputState::DraggingText { grab_offset: hit.offset };
        vec![Action::SetCursor("grabbing".to_owned())]
    }

    /// Follow the pointer while dragging; otherwise update hover feedback.
    ///
    /// The anchor snaps to whole canvas pixels, since saved designs store
    /// integer positions.
    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client_pt);
        match self.input {
            InputState::DraggingText { grab_offset } => {
                self.overlay
                    .set_position(Point::new((pt.x - grab_offset.x).round(), (pt.y - grab_offset.y).round()));
                vec![
                    Action::PositionChanged { x: self.overlay.x, y: self.overlay.y },
                    Action::RenderNeeded,
                ]
            }
            InputState::Idle => {
                let cursor = if hit_test(pt, &self.overlay, self.text_width).is_some() { "move" } else { "default" };
                vec![Action::SetCursor(cursor.to_owned())]
            }
        }
    }

    /// End the drag. The anchor keeps whatever position the last move produced.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("move".to_owned())]
    }

    /// Pointer left the canvas; treated like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = self.on_pointer_up();
        actions.push(Action::SetCursor("default".to_owned()));
        actions
    }

    // --- Queries ---

    /// Current text anchor position in canvas pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        self.overlay.position()
    }

    #[must_use]
    pub fn overlay(&self) -> &TextOverlay {
        &self.overlay
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a new engine to the given canvas element and size its backing store.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, overlay: TextOverlay) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width(CANVAS_WIDTH as u32);
            canvas.set_height(CANVAS_HEIGHT as u32);
        }
        Ok(Self { canvas, ctx, core: EngineCore::with_overlay(overlay) })
    }

    // --- Delegated overlay inputs ---

    pub fn set_text(&mut self, text: &str) -> Action {
        self.core.set_text(text)
    }

    pub fn set_text_size(&mut self, size: f64) -> Action {
        self.core.set_text_size(size)
    }

    pub fn set_text_color(&mut self, color: &str) -> Action {
        self.core.set_text_color(color)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, client_pt: Point, button: Button) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_pointer_down(client_pt, button)
    }

    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_pointer_move(client_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    /// Refresh the element's client rect so pointer mapping follows layout changes.
    fn sync_viewport(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_viewport(Viewport {
            left: rect.left(),
            top: rect.top(),
            css_width: rect.width(),
            css_height: rect.height(),
        });
    }

    // --- Render ---

    /// Draw the current state to the canvas and remember the measured text width.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let width = render::draw(&self.ctx, &self.core.overlay)?;
        self.core.set_text_width(width);
        Ok(())
    }
}
