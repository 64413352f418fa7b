//! Application Configuration
//!
//! Read once at startup from build-time environment variables.

use leptos_masonry::GridConfig;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Pages served by the built-in sample feed before it reports exhaustion
pub const SAMPLE_MAX_PAGES: u32 = 5;
/// Artificial latency of the sample feed
pub const SAMPLE_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API gateway base URL; `None` serves the built-in sample feed
    pub api_base_url: Option<String>,
    pub page_size: u32,
    pub grid: GridConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            page_size: DEFAULT_PAGE_SIZE,
            grid: GridConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("INSPIRA_API_URL"),
            option_env!("INSPIRA_PAGE_SIZE"),
            option_env!("INSPIRA_GRID_CONFIG"),
        )
    }

    /// Invalid values are logged and replaced by defaults
    pub fn from_values(api_url: Option<&str>, page_size: Option<&str>, grid_json: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());

        let page_size = match page_size.map(|s| s.trim().parse::<u32>()) {
            None => DEFAULT_PAGE_SIZE,
            Some(Ok(n)) if n > 0 => n,
            Some(_) => {
                log::warn!("[Config] Invalid INSPIRA_PAGE_SIZE, using {}", DEFAULT_PAGE_SIZE);
                DEFAULT_PAGE_SIZE
            }
        };

        let grid = match grid_json.map(GridConfig::from_json) {
            None => GridConfig::default(),
            Some(Ok(grid)) => grid,
            Some(Err(e)) => {
                log::error!("[Config] {}, using default grid config", e);
                GridConfig::default()
            }
        };

        Self {
            api_base_url,
            page_size,
            grid,
        }
    }

    pub fn uses_sample_feed(&self) -> bool {
        self.api_base_url.is_none()
    }
}
