//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per view. Each component owns its signals and talks to the
//! backend through the `ApiClient` provided in context.

pub mod analytics_dashboard;
pub mod charts;
pub mod error_panel;
pub mod navigation;
pub mod post_list;
pub mod post_scheduler;
pub mod product_customizer;
pub mod product_design_list;
