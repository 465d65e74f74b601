//! External collaborators module
//!
//! This module contains the banner API client and the loader that turns
//! fetched banner lists into rendered containers.

pub mod banner_api;
pub mod loader;

// Re-export main types and functions
pub use banner_api::{BannerApiClient, BannerSource};
pub use loader::{load_banners, load_container, load_page, track_click, LoadOutcome};
