//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Default page layout: container id to banner type
const DEFAULT_PAGE: &[(&str, &str)] = &[
    ("homeTopBanner", "home_top"),
    ("homeGridBanners", "home_grid"),
    ("homeBottomBanner", "home_bottom"),
    ("generalGridBanners", "grid_general"),
    ("coupangGridBanners", "grid_coupang"),
    ("profitBanners", "grid_profit"),
    ("efficiencyBanners", "grid_efficiency"),
    ("keywordBanners", "grid_keyword"),
];

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "banner-board")]
#[command(about = "A headless rolling-banner controller")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port to bind the control API to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Base URL of the banner API
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub api_base: String,

    /// Page container as ID=BANNER_TYPE (repeatable)
    #[arg(long = "container", value_parser = parse_page_container)]
    pub containers: Vec<PageContainer>,

    /// Rotation interval in milliseconds
    #[arg(short, long, default_value = "5000")]
    pub interval_ms: u64,

    /// Maximum number of banners in a rolling container
    #[arg(long, default_value = "6")]
    pub max_banners: usize,

    /// Initial viewport width in pixels
    #[arg(long, default_value = "1280")]
    pub viewport_width: u32,

    /// Keep rotating while the pointer hovers a carousel
    #[arg(long)]
    pub no_pause_on_hover: bool,

    /// Do not render slide indicators
    #[arg(long)]
    pub hide_indicators: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Carousel behaviour shared by every container
    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            interval: Duration::from_millis(self.interval_ms.max(1)),
            max_banners: self.max_banners.max(1),
            pause_on_hover: !self.no_pause_on_hover,
            show_indicators: !self.hide_indicators,
        }
    }

    /// Containers present on the page, falling back to the default layout
    pub fn page_containers(&self) -> Vec<PageContainer> {
        if self.containers.is_empty() {
            default_page()
        } else {
            self.containers.clone()
        }
    }
}

/// Global carousel configuration, applied uniformly to all containers
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    pub interval: Duration,
    pub max_banners: usize,
    pub pause_on_hover: bool,
    pub show_indicators: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(5000),
            max_banners: 6,
            pause_on_hover: true,
            show_indicators: true,
        }
    }
}

/// A banner container on the page and the banner type it displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContainer {
    pub container_id: String,
    pub banner_type: String,
}

impl PageContainer {
    pub fn new(container_id: impl Into<String>, banner_type: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            banner_type: banner_type.into(),
        }
    }
}

/// The container map of the dashboard pages
pub fn default_page() -> Vec<PageContainer> {
    DEFAULT_PAGE
        .iter()
        .map(|(id, banner_type)| PageContainer::new(*id, *banner_type))
        .collect()
}

fn parse_page_container(raw: &str) -> Result<PageContainer, String> {
    let (id, banner_type) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=BANNER_TYPE, got '{}'", raw))?;
    let (id, banner_type) = (id.trim(), banner_type.trim());
    if id.is_empty() || banner_type.is_empty() {
        return Err(format!("container id and banner type must be non-empty: '{}'", raw));
    }
    Ok(PageContainer::new(id, banner_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_container_pairs() {
        let container = parse_page_container("profitBanners=grid_profit").unwrap();
        assert_eq!(container, PageContainer::new("profitBanners", "grid_profit"));
        assert!(parse_page_container("profitBanners").is_err());
        assert!(parse_page_container("=grid_profit").is_err());
    }

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = Config::try_parse_from(["banner-board"]).unwrap();
        let settings = config.carousel_settings();
        assert_eq!(settings, CarouselSettings::default());
        assert_eq!(config.page_containers().len(), 8);
        assert_eq!(config.address(), "0.0.0.0:20554");
    }

    #[test]
    fn explicit_containers_replace_defaults() {
        let config = Config::try_parse_from([
            "banner-board",
            "--container",
            "a=grid_general",
            "--no-pause-on-hover",
            "--interval-ms",
            "3000",
        ])
        .unwrap();
        assert_eq!(config.page_containers(), vec![PageContainer::new("a", "grid_general")]);
        let settings = config.carousel_settings();
        assert!(!settings.pause_on_hover);
        assert_eq!(settings.interval, Duration::from_millis(3000));
    }
}
