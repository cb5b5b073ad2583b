//! Rendering: draws the customizer scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the overlay and produces pixels; it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<_, JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Rect;
use crate::consts::{
    BACKDROP_FILL, CANVAS_HEIGHT, CANVAS_WIDTH, GARMENT_FILL, GARMENT_INSET, GARMENT_STROKE, SELECTION_DASH,
    SELECTION_STROKE,
};
use crate::doc::TextOverlay;
use crate::hit::text_bounds;

/// Draw the full scene: backdrop, garment, text, and selection outline.
///
/// Returns the measured width of the drawn text so the caller can hit-test
/// against exactly what is on screen.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, overlay: &TextOverlay) -> Result<f64, JsValue> {
    // Layer 1: reset transform and clear.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    // Layer 2: static garment mockup.
    draw_garment(ctx);

    // Layer 3: overlay text.
    let text_width = draw_text(ctx, overlay)?;

    // Layer 4: selection outline.
    draw_selection(ctx, &text_bounds(overlay, text_width))?;

    Ok(text_width)
}

fn draw_garment(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str(BACKDROP_FILL);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    let body = garment_rect();
    ctx.set_fill_style_str(GARMENT_FILL);
    ctx.fill_rect(body.x, body.y, body.width, body.height);
    ctx.set_stroke_style_str(GARMENT_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(body.x, body.y, body.width, body.height);
}

fn draw_text(ctx: &CanvasRenderingContext2d, overlay: &TextOverlay) -> Result<f64, JsValue> {
    let text = overlay.display_text();
    ctx.set_font(&overlay.font());
    ctx.set_fill_style_str(&overlay.color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.fill_text(text, overlay.x, overlay.y)?;
    Ok(ctx.measure_text(text)?.width())
}

fn draw_selection(ctx: &CanvasRenderingContext2d, bounds: &Rect) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(1.0);
    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH.into());
    dash_array.push(&SELECTION_DASH.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(bounds.x, bounds.y, bounds.width, bounds.height);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

/// Garment body rectangle, inset from the canvas edges.
#[must_use]
pub fn garment_rect() -> Rect {
    Rect::new(
        GARMENT_INSET,
        GARMENT_INSET,
        CANVAS_WIDTH - GARMENT_INSET * 2.0,
        CANVAS_HEIGHT - GARMENT_INSET * 2.0,
    )
}
