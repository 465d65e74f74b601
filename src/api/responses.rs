//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    services::LoadOutcome,
    state::{CarouselSnapshot, ContainerView, Viewport},
};

/// Response for endpoints that act on one container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub view: ContainerView,
}

impl ContainerResponse {
    pub fn new(status: &str, message: String, view: ContainerView) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            view,
        }
    }

    /// Plain view lookup
    pub fn current(view: ContainerView) -> Self {
        let status = if view.visible { "visible" } else { "hidden" };
        Self::new(status, format!("Container {}", view.container_id), view)
    }
}

/// Response for `POST /containers/:id/reload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub container_id: String,
    #[serde(flatten)]
    pub outcome: LoadOutcome,
    pub timestamp: DateTime<Utc>,
}

/// Per-container line in the status report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub container_id: String,
    pub banner_type: String,
    pub visible: bool,
    pub carousel: Option<CarouselSnapshot>,
}

/// Board status with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub containers: Vec<ContainerSummary>,
    pub live_timers: usize,
    pub viewport: Viewport,
    pub mobile: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Request body for `POST /viewport`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportRequest {
    pub width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportResponse {
    pub viewport: Viewport,
    pub mobile: bool,
    pub reload_after_ms: u64,
}

/// Response for fire-and-forget tracking requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackResponse {
    pub banner_id: u64,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
