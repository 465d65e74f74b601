//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    error::BoardError,
    services::{load_container, track_click, LoadOutcome},
    state::{AppState, Board, ContainerView, Layout, Viewport},
    tasks::RESIZE_DEBOUNCE,
};
use super::responses::{
    ContainerResponse, ContainerSummary, HealthResponse, ReloadResponse, StatusResponse,
    TrackResponse, ViewportRequest, ViewportResponse,
};

/// Map a board error to the status code reported to the display client
fn status_for(e: &BoardError) -> StatusCode {
    match e {
        BoardError::UnknownContainer(_) => StatusCode::NOT_FOUND,
        BoardError::NotRolling(_) | BoardError::InvalidSlide { .. } => StatusCode::BAD_REQUEST,
        BoardError::NoEligibleBanners => StatusCode::CONFLICT,
        BoardError::Http(_) | BoardError::ApiFailure { .. } => StatusCode::BAD_GATEWAY,
        BoardError::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Current view of a container: rendered, hidden, or unknown to the page
fn current_view(state: &AppState, container_id: &str) -> Result<ContainerView, StatusCode> {
    let board = state.board().map_err(|e| {
        error!("{}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match board.view(container_id) {
        Some(view) => Ok(view),
        None => match state.page_container(container_id) {
            Some(container) => Ok(ContainerView::hidden(
                container_id,
                Layout::for_banner_type(&container.banner_type),
            )),
            None => Err(StatusCode::NOT_FOUND),
        },
    }
}

/// Run a carousel control against the board and answer with the new view
fn control<F>(
    state: &AppState,
    container_id: &str,
    action: &str,
    apply: F,
) -> Result<Json<ContainerResponse>, StatusCode>
where
    F: FnOnce(&mut Board) -> Result<String, BoardError>,
{
    match state.with_board(action, apply) {
        Ok(message) => {
            let view = current_view(state, container_id)?;
            Ok(Json(ContainerResponse::new("ok", message, view)))
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!("{} on {} failed: {}", action, container_id, e);
            } else {
                warn!("{} on {} rejected: {}", action, container_id, e);
            }
            Err(status)
        }
    }
}

/// Handle GET /containers/:id - Return the container view
pub async fn container_handler(
    State(state): State<Arc<AppState>>,
    Path(container_id): Path<String>,
) -> Result<Json<ContainerResponse>, StatusCode> {
    let view = current_view(&state, &container_id)?;
    Ok(Json(ContainerResponse::current(view)))
}

/// Handle POST /containers/:id/reload - Fetch and render the container again
pub async fn reload_handler(
    State(state): State<Arc<AppState>>,
    Path(container_id): Path<String>,
) -> Result<Json<ReloadResponse>, StatusCode> {
    let outcome = load_container(&state, &container_id).await;
    if outcome == LoadOutcome::Skipped && state.page_container(&container_id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    state.record_action("reload");
    info!("Reloaded {}: {:?}", container_id, outcome);

    Ok(Json(ReloadResponse {
        container_id,
        outcome,
        timestamp: Utc::now(),
    }))
}

/// Handle POST /containers/:id/pointer-enter - Hover pause
pub async fn pointer_enter_handler(
    State(state): State<Arc<AppState>>,
    Path(container_id): Path<String>,
) -> Result<Json<ContainerResponse>, StatusCode> {
    control(&state, &container_id, "pointer-enter", |board| {
        Ok(if board.pointer_enter(&container_id)? {
            "Rotation paused".to_string()
        } else {
            "Hover pause disabled".to_string()
        })
    })
}

/// Handle POST /containers/:id/pointer-leave - Hover resume
pub async fn pointer_leave_handler(
    State(state): State<Arc<AppState>>,
    Path(container_id): Path<String>,
) -> Result<Json<ContainerResponse>, StatusCode> {
    control(&state, &container_id, "pointer-leave", |board| {
        Ok(if board.pointer_leave(&container_id)? {
            "Rotation resumed".to_string()
        } else {
            "Hover pause disabled".to_string()
        })
    })
}

/// Handle POST /containers/:id/slides/:index - Indicator click
pub async fn jump_handler(
    State(state): State<Arc<AppState>>,
    Path((container_id, index)): Path<(String, usize)>,
) -> Result<Json<ContainerResponse>, StatusCode> {
    control(&state, &container_id, "jump", |board| {
        Ok(if board.jump_to_slide(&container_id, index)? {
            format!("Jumped to slide {}", index)
        } else {
            format!("Slide {} already active", index)
        })
    })
}

/// Handle POST /banners/:id/click - Forward click tracking
pub async fn click_handler(
    State(state): State<Arc<AppState>>,
    Path(banner_id): Path<u64>,
) -> (StatusCode, Json<TrackResponse>) {
    track_click(&state, banner_id);
    state.record_action("click");
    (
        StatusCode::ACCEPTED,
        Json(TrackResponse {
            banner_id,
            status: "accepted".to_string(),
        }),
    )
}

/// Handle POST /viewport - Debounced resize
pub async fn viewport_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ViewportRequest>,
) -> Json<ViewportResponse> {
    let viewport = Viewport::new(request.width);
    state.set_viewport(viewport);

    Json(ViewportResponse {
        viewport,
        mobile: viewport.is_mobile(),
        reload_after_ms: RESIZE_DEBOUNCE.as_millis() as u64,
    })
}

/// Handle GET /status - Return board status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let (containers, live_timers) = {
        let board = match state.board() {
            Ok(board) => board,
            Err(e) => {
                error!("Failed to get board state: {}", e);
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

        let containers = state
            .page
            .iter()
            .map(|container| ContainerSummary {
                container_id: container.container_id.clone(),
                banner_type: container.banner_type.clone(),
                visible: board.contains(&container.container_id),
                carousel: board.snapshot(&container.container_id),
            })
            .collect::<Vec<_>>();
        (containers, board.live_timers())
    };

    let viewport = state.viewport();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        containers,
        live_timers,
        viewport,
        mobile: viewport.is_mobile(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
