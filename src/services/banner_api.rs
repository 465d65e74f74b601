//! Banner API client

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::Result,
    state::BannerListResponse,
};

/// Source of banner lists and sink for tracking events
#[async_trait]
pub trait BannerSource: Send + Sync + std::fmt::Debug {
    /// Fetch the ordered banner list for a banner type
    async fn fetch_banners(&self, banner_type: &str) -> Result<BannerListResponse>;

    async fn track_impression(&self, banner_id: u64) -> Result<()>;

    async fn track_click(&self, banner_id: u64) -> Result<()>;
}

/// HTTP client for the banner API
#[derive(Debug, Clone)]
pub struct BannerApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BannerApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_event(&self, banner_id: u64, event: &str) -> Result<()> {
        let url = self.url(&format!("/api/banners/{}/{}", banner_id, event));
        debug!("POST {}", url);
        self.client.post(&url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl BannerSource for BannerApiClient {
    async fn fetch_banners(&self, banner_type: &str) -> Result<BannerListResponse> {
        let url = self.url(&format!("/api/banners/{}", banner_type));
        debug!("GET {}", url);

        let response: BannerListResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            debug!(
                "Banner API declined {}: {}",
                banner_type,
                response.message.as_deref().unwrap_or("no message")
            );
        }
        Ok(response)
    }

    async fn track_impression(&self, banner_id: u64) -> Result<()> {
        self.post_event(banner_id, "impression").await
    }

    async fn track_click(&self, banner_id: u64) -> Result<()> {
        self.post_event(banner_id, "click").await
    }
}
