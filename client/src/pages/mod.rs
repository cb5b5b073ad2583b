//! Route-level page components.
//!
//! Pages only compose components; they hold no state of their own.

pub mod analytics;
pub mod customizer;
pub mod home;
pub mod posts;
pub mod schedule;
