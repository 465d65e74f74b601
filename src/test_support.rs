//! Shared helpers for unit tests

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use crate::{
    config::{default_page, CarouselSettings},
    error::{BoardError, Result},
    services::BannerSource,
    state::{AppState, Banner, BannerListResponse, Viewport},
};

/// Ordered banners with ids `1..=count`; ids in `without_mobile` lack a mobile image
pub fn banners(count: u64, without_mobile: &[u64]) -> Vec<Banner> {
    (1..=count)
        .map(|id| Banner {
            id,
            title: format!("Banner {}", id),
            image_url: format!("/static/banners/{}.png", id),
            mobile_image_url: (!without_mobile.contains(&id))
                .then(|| format!("/static/banners/{}-m.png", id)),
            link_url: Some(format!("https://example.com/{}", id)),
            position_order: Some(id as i64),
        })
        .collect()
}

/// App state over the default page layout, backed by `source`
pub fn app_state(source: &FakeSource, width: u32) -> AppState {
    AppState::new(
        CarouselSettings::default(),
        default_page(),
        Arc::new(source.clone()),
        Viewport::new(width),
        0,
        "127.0.0.1".to_string(),
    )
}

#[derive(Debug, Default)]
struct Inner {
    banners: HashMap<String, Vec<Banner>>,
    failing: AtomicBool,
    failing_tracking: AtomicBool,
    fetches: AtomicUsize,
    impressions: Mutex<Vec<u64>>,
    clicks: Mutex<Vec<u64>>,
}

/// In-memory banner API
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    inner: Arc<Inner>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `banners` for `banner_type`. Only valid before the source is shared.
    pub fn with(mut self, banner_type: &str, banners: Vec<Banner>) -> Self {
        Arc::get_mut(&mut self.inner)
            .expect("configure FakeSource before cloning it")
            .banners
            .insert(banner_type.to_string(), banners);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// Fail only impression and click calls; fetches keep working
    pub fn set_failing_tracking(&self, failing: bool) {
        self.inner.failing_tracking.store(failing, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }

    pub fn impressions(&self) -> Vec<u64> {
        let mut ids = self.inner.impressions.lock().unwrap().clone();
        ids.sort_unstable();
        ids
    }

    pub fn clicks(&self) -> Vec<u64> {
        self.inner.clicks.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(BoardError::ApiFailure {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn check_tracking(&self) -> Result<()> {
        self.check()?;
        if self.inner.failing_tracking.load(Ordering::SeqCst) {
            return Err(BoardError::ApiFailure {
                message: "tracking unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BannerSource for FakeSource {
    async fn fetch_banners(&self, banner_type: &str) -> Result<BannerListResponse> {
        self.inner.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(BannerListResponse {
            success: true,
            banners: self
                .inner
                .banners
                .get(banner_type)
                .cloned()
                .unwrap_or_default(),
            message: None,
        })
    }

    async fn track_impression(&self, banner_id: u64) -> Result<()> {
        self.check_tracking()?;
        self.inner.impressions.lock().unwrap().push(banner_id);
        Ok(())
    }

    async fn track_click(&self, banner_id: u64) -> Result<()> {
        self.check_tracking()?;
        self.inner.clicks.lock().unwrap().push(banner_id);
        Ok(())
    }
}
