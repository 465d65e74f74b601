//! Viewport classification and the banner eligibility policy

use serde::{Deserialize, Serialize};

use super::Banner;

/// Widths at or below this many pixels are classified as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT
    }

    /// Whether a banner may be shown at this viewport.
    ///
    /// Mobile viewports only show banners that carry a dedicated mobile
    /// image; there is no fallback to the desktop asset.
    pub fn is_eligible(&self, banner: &Banner) -> bool {
        !self.is_mobile() || banner.has_mobile_image()
    }

    /// Image to display for an eligible banner
    pub fn image_for<'a>(&self, banner: &'a Banner) -> &'a str {
        match banner.mobile_image_url.as_deref() {
            Some(url) if self.is_mobile() && !url.is_empty() => url,
            _ => &banner.image_url,
        }
    }

    /// Filter an ordered banner list down to the eligible ones, keeping order
    pub fn eligible<'a>(&self, banners: &'a [Banner]) -> Vec<&'a Banner> {
        banners.iter().filter(|b| self.is_eligible(b)).collect()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280)
    }
}
