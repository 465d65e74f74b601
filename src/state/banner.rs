//! Banner records as served by the banner API

use serde::{Deserialize, Serialize};

/// Number of slots in the home page 2x2 grid
pub const GRID_SLOTS: usize = 4;

/// A displayable ad unit, read-only from the board's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub mobile_image_url: Option<String>,
    /// Absent means "no navigation"
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub position_order: Option<i64>,
}

impl Banner {
    pub fn has_mobile_image(&self) -> bool {
        self.mobile_image_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }
}

/// Response body of `GET /api/banners/{bannerType}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerListResponse {
    pub success: bool,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub message: Option<String>,
}

/// How a banner type is laid out in its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Home page 2x2 grid, all slots visible at once
    Grid,
    /// Timed carousel with one visible slide
    Rolling,
    /// Single large banner
    Large,
}

impl Layout {
    /// Resolve the layout used for a banner type, `None` for unknown types
    pub fn for_banner_type(banner_type: &str) -> Option<Self> {
        match banner_type {
            "home_grid" => Some(Layout::Grid),
            "grid_general" | "grid_coupang" | "grid_profit" | "grid_efficiency"
            | "grid_keyword" => Some(Layout::Rolling),
            "home_top" | "home_bottom" => Some(Layout::Large),
            _ => None,
        }
    }

    /// Maximum banners this layout takes from the fetched list
    pub fn capacity(&self, max_rolling: usize) -> usize {
        match self {
            Layout::Grid => GRID_SLOTS,
            Layout::Rolling => max_rolling,
            Layout::Large => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_follow_banner_type() {
        assert_eq!(Layout::for_banner_type("home_grid"), Some(Layout::Grid));
        assert_eq!(Layout::for_banner_type("grid_keyword"), Some(Layout::Rolling));
        assert_eq!(Layout::for_banner_type("home_bottom"), Some(Layout::Large));
        assert_eq!(Layout::for_banner_type("sidebar"), None);
        assert_eq!(Layout::Rolling.capacity(6), 6);
        assert_eq!(Layout::Grid.capacity(6), 4);
        assert_eq!(Layout::Large.capacity(6), 1);
    }

    #[test]
    fn decodes_api_payload_with_missing_fields() {
        let body = r#"{
            "success": true,
            "banners": [
                {"id": 1, "title": "Top", "image_url": "/a.png", "mobile_image_url": null,
                 "link_url": "https://example.com", "position_order": 1},
                {"id": 2, "image_url": "/b.png", "mobile_image_url": "/b-m.png"}
            ]
        }"#;
        let response: BannerListResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.banners.len(), 2);
        assert!(!response.banners[0].has_mobile_image());
        assert!(response.banners[1].has_mobile_image());
        assert_eq!(response.banners[1].link_url, None);
        assert_eq!(response.banners[1].title, "");
    }

    #[test]
    fn empty_mobile_image_is_not_a_mobile_image() {
        let banner = Banner {
            id: 3,
            title: "x".into(),
            image_url: "/x.png".into(),
            mobile_image_url: Some(String::new()),
            link_url: None,
            position_order: None,
        };
        assert!(!banner.has_mobile_image());
    }
}
