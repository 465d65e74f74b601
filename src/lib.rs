//! Banner Board - A headless rolling-banner controller
//!
//! This library loads banners from the banner API, decides which of them are
//! eligible for the current viewport, and runs one timed, pausable carousel
//! per banner container. Display clients read declarative container views
//! and forward pointer, indicator and resize events over the control API.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use api::create_router;
pub use config::{CarouselSettings, Config};
pub use error::BoardError;
pub use state::{AppState, Board, CarouselState};
pub use tasks::RotationTimer;
pub use utils::signals::shutdown_signal;
