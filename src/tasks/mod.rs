//! Background tasks module
//!
//! This module contains the per-carousel rotation timer and the task that
//! reloads containers after the viewport settles.

pub mod resize_debounce;
pub mod rotation_timer;

// Re-export main types and functions
pub use resize_debounce::{resize_debounce_task, RESIZE_DEBOUNCE};
pub use rotation_timer::{RotationTimer, SharedCarousel, MIN_INTERVAL};
