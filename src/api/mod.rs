//! API Gateway Client
//!
//! JSON-over-HTTP access to the gateway, plus the built-in sample feed used
//! when no gateway is configured.

mod pins;
pub mod sample;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{AppConfig, SAMPLE_DELAY_MS, SAMPLE_MAX_PAGES};
use crate::feed::PageRequest;
use crate::models::Pin;

pub use pins::PinService;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = auth_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| ApiError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Bearer token left in localStorage by the sign-in flow
fn auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item("auth_token").ok()?.filter(|t| !t.is_empty())
}

/// Where the explore feed gets its pages
#[derive(Clone, Debug)]
pub enum FeedSource {
    Api(PinService),
    Sample,
}

impl FeedSource {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.api_base_url {
            Some(url) => FeedSource::Api(PinService::new(ApiClient::new(url))),
            None => FeedSource::Sample,
        }
    }

    /// Page cap for `FeedState`; the gateway signals its own end
    pub fn max_pages(&self) -> Option<u32> {
        match self {
            FeedSource::Api(_) => None,
            FeedSource::Sample => Some(SAMPLE_MAX_PAGES),
        }
    }

    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Pin>, ApiError> {
        match self {
            FeedSource::Api(service) => service.page(&request.category, request.page, request.limit).await,
            FeedSource::Sample => {
                gloo_timers::future::TimeoutFuture::new(SAMPLE_DELAY_MS).await;
                Ok(sample::sample_page(&request.category, request.page, request.limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/pins/trending"), "http://localhost:8080/pins/trending");
        assert_eq!(client.url("pins/1"), "http://localhost:8080/pins/1");
    }

    #[test]
    fn test_source_from_config() {
        let sample = FeedSource::from_config(&AppConfig::default());
        assert!(matches!(sample, FeedSource::Sample));
        assert_eq!(sample.max_pages(), Some(SAMPLE_MAX_PAGES));

        let config = AppConfig::from_values(Some("http://gateway"), None, None);
        let api = FeedSource::from_config(&config);
        assert!(matches!(api, FeedSource::Api(_)));
        assert_eq!(api.max_pages(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(502).to_string(), "Server returned status 502");
        assert_eq!(ApiError::Decode("eof".into()).to_string(), "Malformed response: eof");
    }
}
