//! Banner Board - A headless rolling-banner controller
//!
//! This is the main entry point for the banner-board application.

use std::{future::IntoFuture, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use banner_board::{
    api::create_router,
    config::Config,
    services::{load_page, BannerApiClient},
    state::{AppState, Viewport},
    tasks::resize_debounce_task,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("banner_board={},tower_http=info", config.log_level()))
        .init();

    let settings = config.carousel_settings();
    let page = config.page_containers();

    info!("Starting banner-board server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, api={}, interval={:?}, max_banners={}, containers={}",
        config.host,
        config.port,
        config.api_base,
        settings.interval,
        settings.max_banners,
        page.len()
    );

    let source = Arc::new(BannerApiClient::new(config.api_base.clone())?);
    let state = Arc::new(AppState::new(
        settings,
        page,
        source,
        Viewport::new(config.viewport_width),
        config.port,
        config.host.clone(),
    ));

    // Populate every container on the page
    let load_state = Arc::clone(&state);
    tokio::spawn(async move {
        load_page(&load_state).await;
    });

    // Reload containers when the viewport crosses the mobile breakpoint
    let resize_state = Arc::clone(&state);
    tokio::spawn(async move {
        resize_debounce_task(resize_state).await;
    });

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /containers/:id                - Container view");
    info!("  POST /containers/:id/reload         - Reload container banners");
    info!("  POST /containers/:id/pointer-enter  - Pause rotation on hover");
    info!("  POST /containers/:id/pointer-leave  - Resume rotation");
    info!("  POST /containers/:id/slides/:index  - Jump to slide");
    info!("  POST /banners/:id/click             - Track banner click");
    info!("  POST /viewport                      - Report viewport width");
    info!("  GET  /status                        - Board status");
    info!("  GET  /health                        - Health check");

    let server = axum::serve(listener, app).into_future();

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    let cleared = state.teardown();
    info!("Server shutdown complete, {} rotation timer(s) cleared", cleared);
    Ok(())
}
