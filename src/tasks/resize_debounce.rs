//! Viewport resize background task

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::{services::load_page, state::AppState};

/// Quiet period after the last resize before containers reload
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Background task that reloads the page once resizing settles.
///
/// Containers are only reloaded when the viewport moves across the mobile
/// breakpoint, since that is what changes eligibility and images. Reloading
/// replaces every carousel, and with it every rotation timer.
pub async fn resize_debounce_task(state: Arc<AppState>) {
    info!("Starting resize debounce task");

    let mut viewport_rx = state.viewport_tx.subscribe();
    let mut rendered = *viewport_rx.borrow_and_update();

    loop {
        if viewport_rx.changed().await.is_err() {
            break;
        }

        // Restart the quiet period on every further change
        loop {
            tokio::select! {
                _ = sleep(RESIZE_DEBOUNCE) => break,
                changed = viewport_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
            }
        }

        let viewport = *viewport_rx.borrow_and_update();
        if viewport.is_mobile() == rendered.is_mobile() {
            debug!("Viewport settled at {}px, layout class unchanged", viewport.width);
            continue;
        }

        info!(
            "Viewport settled at {}px ({}), reloading containers",
            viewport.width,
            if viewport.is_mobile() { "mobile" } else { "desktop" }
        );
        rendered = viewport;
        load_page(&state).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::Viewport,
        test_support::{app_state, banners, FakeSource},
    };

    const ID: &str = "generalGridBanners";

    #[tokio::test(start_paused = true)]
    async fn bursts_of_resizes_reload_once() {
        let source = FakeSource::new().with("grid_general", banners(4, &[2, 4]));
        let state = Arc::new(app_state(&source, 1280));
        crate::services::load_container(&state, ID).await;
        assert_eq!(state.board().unwrap().snapshot(ID).unwrap().total_banners, 4);
        let page_fetches = source.fetch_count();

        tokio::spawn(resize_debounce_task(Arc::clone(&state)));
        sleep(Duration::from_millis(1)).await;

        for width in [1000, 800, 600, 375] {
            state.set_viewport(Viewport::new(width));
            sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(source.fetch_count(), page_fetches);

        sleep(Duration::from_millis(300)).await;
        assert_eq!(source.fetch_count(), page_fetches + state.page.len());

        let board = state.board().unwrap();
        assert_eq!(board.snapshot(ID).unwrap().total_banners, 2);
        assert_eq!(board.live_timers(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_within_class_does_not_reload() {
        let source = FakeSource::new();
        let state = Arc::new(app_state(&source, 1280));
        tokio::spawn(resize_debounce_task(Arc::clone(&state)));
        sleep(Duration::from_millis(1)).await;

        state.set_viewport(Viewport::new(1024));
        sleep(Duration::from_millis(500)).await;
        assert_eq!(source.fetch_count(), 0);
    }
}
