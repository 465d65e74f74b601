//! HTTP control API module
//!
//! This module contains the endpoints display clients use to read container
//! views and forward pointer, indicator, click and resize events.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/containers/:container_id", get(container_handler))
        .route("/containers/:container_id/reload", post(reload_handler))
        .route("/containers/:container_id/pointer-enter", post(pointer_enter_handler))
        .route("/containers/:container_id/pointer-leave", post(pointer_leave_handler))
        .route("/containers/:container_id/slides/:index", post(jump_handler))
        .route("/banners/:banner_id/click", post(click_handler))
        .route("/viewport", post(viewport_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
