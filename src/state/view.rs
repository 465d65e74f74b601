//! Declarative container views handed to display clients

use serde::{Deserialize, Serialize};

use super::{Banner, CarouselSnapshot, Layout, Viewport};

/// One rendered banner, with the asset already chosen for the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideView {
    pub banner_id: u64,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    /// Load immediately instead of lazily
    pub eager: bool,
}

impl SlideView {
    pub fn from_banner(banner: &Banner, viewport: Viewport, eager: bool) -> Self {
        Self {
            banner_id: banner.id,
            title: banner.title.clone(),
            image_url: viewport.image_for(banner).to_string(),
            link_url: banner.link_url.clone().filter(|url| !url.is_empty()),
            eager,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSlide {
    #[serde(flatten)]
    pub slide: SlideView,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// What a container currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerView {
    pub container_id: String,
    pub layout: Option<Layout>,
    pub visible: bool,
    pub slides: Vec<RenderedSlide>,
    pub indicators: Vec<Indicator>,
    pub carousel: Option<CarouselSnapshot>,
}

impl ContainerView {
    /// A container with nothing to display
    pub fn hidden(container_id: impl Into<String>, layout: Option<Layout>) -> Self {
        Self {
            container_id: container_id.into(),
            layout,
            visible: false,
            slides: Vec::new(),
            indicators: Vec::new(),
            carousel: None,
        }
    }

    pub fn active_slide(&self) -> Option<&RenderedSlide> {
        self.slides.iter().find(|s| s.active)
    }
}
