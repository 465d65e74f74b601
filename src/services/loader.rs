//! Banner loading: fetch, lay out, render and track

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::state::{AppState, Banner, Layout};

/// Result of loading one container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Container not on this page, or banner type without a layout
    Skipped,
    /// Nothing to display; the container is hidden
    Hidden,
    Shown { banners: usize },
}

/// Fetch `banner_type` and render it into `container_id`.
///
/// Failures never propagate: a failed fetch, an empty list or a list with no
/// banner eligible for the current viewport all leave the container hidden.
pub async fn load_banners(state: &AppState, banner_type: &str, container_id: &str) -> LoadOutcome {
    if state.page_container(container_id).is_none() {
        debug!("{} is not on this page, skipping", container_id);
        return LoadOutcome::Skipped;
    }
    let Some(layout) = Layout::for_banner_type(banner_type) else {
        warn!("No layout for banner type {}, leaving {} untouched", banner_type, container_id);
        return LoadOutcome::Skipped;
    };

    let response = match state.source.fetch_banners(banner_type).await {
        Ok(response) => response,
        Err(e) => {
            error!("Banner load error for {}: {}", container_id, e);
            hide_container(state, container_id);
            return LoadOutcome::Hidden;
        }
    };

    if !response.success || response.banners.is_empty() {
        debug!("No banners for {}, hiding {}", banner_type, container_id);
        hide_container(state, container_id);
        return LoadOutcome::Hidden;
    }

    let viewport = state.viewport();
    let rendered = state.with_board("load", |board| {
        board.render(container_id, layout, &response.banners, viewport)
    });

    let outcome = match rendered {
        Ok(Some(view)) => LoadOutcome::Shown {
            banners: view.slides.len(),
        },
        Ok(None) => LoadOutcome::Hidden,
        Err(e) => {
            error!("Failed to render {}: {}", container_id, e);
            hide_container(state, container_id);
            LoadOutcome::Hidden
        }
    };

    track_impressions(state, &response.banners);
    outcome
}

/// Load a page container using its configured banner type
pub async fn load_container(state: &AppState, container_id: &str) -> LoadOutcome {
    match state.page_container(container_id) {
        Some(container) => {
            let banner_type = container.banner_type.clone();
            load_banners(state, &banner_type, container_id).await
        }
        None => LoadOutcome::Skipped,
    }
}

/// Load every container on the page, in page order
pub async fn load_page(state: &AppState) -> Vec<(String, LoadOutcome)> {
    let mut outcomes = Vec::with_capacity(state.page.len());
    for container in &state.page {
        let outcome = load_banners(state, &container.banner_type, &container.container_id).await;
        outcomes.push((container.container_id.clone(), outcome));
    }

    let shown = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, LoadOutcome::Shown { .. }))
        .count();
    info!("Page loaded: {}/{} container(s) shown", shown, outcomes.len());
    outcomes
}

/// Record an impression for every fetched banner. Failures are ignored.
pub fn track_impressions(state: &AppState, banners: &[Banner]) {
    for banner in banners {
        let source = Arc::clone(&state.source);
        let banner_id = banner.id;
        tokio::spawn(async move {
            let _ = source.track_impression(banner_id).await;
        });
    }
}

/// Record a click. Failures are ignored.
pub fn track_click(state: &AppState, banner_id: u64) {
    let source = Arc::clone(&state.source);
    tokio::spawn(async move {
        let _ = source.track_click(banner_id).await;
    });
}

fn hide_container(state: &AppState, container_id: &str) {
    match state.board() {
        Ok(mut board) => {
            board.dispose(container_id);
        }
        Err(e) => error!("Failed to hide {}: {}", container_id, e),
    }
}
