//! Per-view client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each view owns its signals; nothing here is shared across routes. Modules
//! hold the plain data types and pure transitions so they can be tested
//! without a reactive runtime.

pub mod analytics;
pub mod customizer;
pub mod designs;
pub mod fetch;
pub mod posts;
pub mod scheduler;
pub mod submit;
