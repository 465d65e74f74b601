//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::warn;

use super::{Board, Viewport};
use crate::{
    config::{CarouselSettings, PageContainer},
    error::{BoardError, Result},
    services::BannerSource,
};

/// Application state shared by the control API and background tasks
#[derive(Debug)]
pub struct AppState {
    /// Rendered containers and their carousels
    pub board: Arc<Mutex<Board>>,
    /// Where banners come from and where tracking goes
    pub source: Arc<dyn BannerSource>,
    /// Containers present on the page
    pub page: Vec<PageContainer>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Latest requested viewport, observed by the resize task
    pub viewport_tx: watch::Sender<Viewport>,
    /// Keep the receiver alive to prevent channel closure
    pub _viewport_rx: watch::Receiver<Viewport>,
}

impl AppState {
    pub fn new(
        settings: CarouselSettings,
        page: Vec<PageContainer>,
        source: Arc<dyn BannerSource>,
        viewport: Viewport,
        port: u16,
        host: String,
    ) -> Self {
        let (viewport_tx, viewport_rx) = watch::channel(viewport);

        Self {
            board: Arc::new(Mutex::new(Board::new(settings))),
            source,
            page,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            viewport_tx,
            _viewport_rx: viewport_rx,
        }
    }

    /// Lock the board for a synchronous operation
    pub fn board(&self) -> Result<MutexGuard<'_, Board>> {
        self.board
            .lock()
            .map_err(|e| BoardError::LockPoisoned(format!("board: {}", e)))
    }

    /// Run `f` against the board and record `action` on success
    pub fn with_board<T, F>(&self, action: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Board) -> Result<T>,
    {
        let result = {
            let mut board = self.board()?;
            f(&mut *board)?
        };
        self.record_action(action);
        Ok(result)
    }

    pub fn page_container(&self, container_id: &str) -> Option<&PageContainer> {
        self.page.iter().find(|c| c.container_id == container_id)
    }

    pub fn viewport(&self) -> Viewport {
        *self.viewport_tx.borrow()
    }

    /// Publish a new viewport; containers reload once resizing settles
    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport_tx.send_replace(viewport);
        self.record_action("resize");
    }

    /// Release every carousel timer, the page-unload equivalent
    pub fn teardown(&self) -> usize {
        match self.board() {
            Ok(mut board) => board.teardown(),
            Err(e) => {
                warn!("Teardown could not lock the board: {}", e);
                0
            }
        }
    }

    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
