//! Pixabay video search client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{StockError, StockResult};
use crate::provider::StockProvider;
use crate::types::{PixabaySearchResponse, StockCandidate};

const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/videos/";

/// Configuration for the Pixabay client.
#[derive(Debug, Clone)]
pub struct PixabayConfig {
    /// Base URL of the video search API
    pub base_url: String,
    /// API key; searches fail with `MissingKey` when empty
    pub api_key: String,
    /// Results requested per search
    pub per_page: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PixabayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            per_page: 3,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PixabayConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PIXABAY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: std::env::var("PIXABAY_API_KEY").unwrap_or_default(),
            per_page: std::env::var("PIXABAY_PER_PAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            timeout: Duration::from_secs(
                std::env::var("PIXABAY_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Builder-style setter for the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }
}

/// Client for the Pixabay video search API.
pub struct PixabayClient {
    http: Client,
    config: PixabayConfig,
}

impl PixabayClient {
    /// Create a new Pixabay client.
    pub fn new(config: PixabayConfig) -> StockResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(StockError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> StockResult<Self> {
        Self::new(PixabayConfig::from_env())
    }

    /// Probe the API with a fixed query to verify the key works.
    pub async fn test_connection(&self) -> bool {
        match self.fetch("test").await {
            Ok(_) => true,
            Err(e) => {
                warn!("Pixabay connection test failed: {}", e);
                false
            }
        }
    }

    async fn fetch(&self, keyword: &str) -> StockResult<Vec<StockCandidate>> {
        if self.config.api_key.is_empty() {
            return Err(StockError::MissingKey);
        }

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("key", self.config.api_key.as_str()), ("q", keyword)])
            .query(&[("per_page", self.config.per_page)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StockError::Api { status, message });
        }

        let body: PixabaySearchResponse = response.json().await?;
        Ok(body.hits.into_iter().map(StockCandidate::from).collect())
    }
}

#[async_trait]
impl StockProvider for PixabayClient {
    async fn search(&self, keyword: &str) -> StockResult<Vec<StockCandidate>> {
        debug!(keyword, "Searching Pixabay");
        let candidates = self.fetch(keyword).await?;
        debug!(keyword, count = candidates.len(), "Search returned candidates");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn hit_json(id: u64, duration: u32) -> serde_json::Value {
        json!({
            "id": id,
            "duration": duration,
            "videos": {
                "large": { "url": format!("https://cdn.example.com/{id}_large.mp4"), "width": 1920, "height": 1080, "size": 4_000_000 },
                "medium": { "url": format!("https://cdn.example.com/{id}_medium.mp4"), "width": 1280, "height": 720, "size": 2_000_000 },
                "small": { "url": format!("https://cdn.example.com/{id}_small.mp4"), "width": 640, "height": 360, "size": 500_000 },
            }
        })
    }

    fn client_for(server: &MockServer) -> PixabayClient {
        let config = PixabayConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            ..PixabayConfig::default()
        };
        PixabayClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_search_maps_hits_to_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("key", "test-key"))
            .and(query_param("q", "mountains"))
            .and(query_param("per_page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hits": [hit_json(11, 34), hit_json(12, 18)]
            })))
            .mount(&server)
            .await;

        let candidates = client_for(&server).search("mountains").await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, 11);
        assert_eq!(candidates[0].native_duration_secs, 34);
        assert_eq!(
            candidates[0].preview_url,
            "https://cdn.example.com/11_small.mp4"
        );
    }

    #[tokio::test]
    async fn test_empty_hits_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [] })))
            .mount(&server)
            .await;

        let candidates = client_for(&server).search("xyzzy").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_api_error_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server).search("mountains").await.unwrap_err();
        match &err {
            StockError::Api { status, message } => {
                assert_eq!(*status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = PixabayClient::new(PixabayConfig::default()).unwrap();
        let err = client.search("mountains").await.unwrap_err();
        assert!(matches!(err, StockError::MissingKey));
    }

    #[tokio::test]
    async fn test_connection_probe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hits": [] })))
            .mount(&server)
            .await;

        assert!(client_for(&server).test_connection().await);

        let failing = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid key"))
            .mount(&failing)
            .await;

        assert!(!client_for(&failing).test_connection().await);
    }
}
