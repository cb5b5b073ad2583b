//! Text-overlay editor engine for the product customizer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive part of the customizer canvas: mapping raw pointer events into
//! canvas space, hit-testing the text overlay, tracking the drag gesture, and
//! drawing the mock garment with the overlay on top. The host Leptos
//! component is responsible only for wiring DOM events to the engine and
//! reading the final text position when the design is saved.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | The text overlay being edited |
//! | [`camera`] | Points, rectangles, and CSS-to-canvas pixel mapping |
//! | [`input`] | Pointer buttons and the drag state machine |
//! | [`hit`] | Axis-aligned hit-testing against the text bounds |
//! | [`render`] | Garment, text, and selection outline drawing |
//! | [`consts`] | Surface size, colors, and padding constants |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
