//! State management module
//!
//! This module contains the banner data model, the carousel state machine,
//! the per-container board and the shared application state.

pub mod app_state;
pub mod banner;
pub mod board;
pub mod carousel_state;
pub mod view;
pub mod viewport;

// Re-export main types
pub use app_state::AppState;
pub use banner::{Banner, BannerListResponse, Layout};
pub use board::Board;
pub use carousel_state::{CarouselSnapshot, CarouselState};
pub use view::{ContainerView, Indicator, RenderedSlide, SlideView};
pub use viewport::Viewport;
