//! HTTP client for the TVmaze API
//!
//! Thin wrapper over `reqwest` that issues one GET per call and classifies
//! failures. There is no retry: every error is returned to the caller.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TvMazeError};
use crate::url::DEFAULT_BASE_URL;

const USER_AGENT: &str = concat!("tvmaze-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: "https://api.tvmaze.com")
    pub base_url: String,
    /// Request timeout in seconds (default: none, requests may hang)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for TVmaze
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` - base URL is not an absolute http(s) URL
    /// - `HttpError` - the underlying client could not be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TvMazeError::InvalidUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(TvMazeError::HttpError)?;

        Ok(Self { client, base_url })
    }

    /// API root this client talks to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a response body from a full URL
    ///
    /// # Returns
    /// The body as a string when the API answers with a 2xx status
    ///
    /// # Errors
    /// - `HttpError` - network or transport errors
    /// - `ApiStatus` - the API answered with a non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TvMazeError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvMazeError::ApiStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(TvMazeError::HttpError)?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("tvmaze-core/"));
    }

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9999/".to_string(),
            timeout_secs: Some(5),
            ..ClientConfig::default()
        };
        let client = TvMazeClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_client_rejects_relative_base_url() {
        let config = ClientConfig {
            base_url: "api.tvmaze.com".to_string(),
            ..ClientConfig::default()
        };
        match TvMazeClient::with_config(config) {
            Err(TvMazeError::InvalidUrl(url)) => assert_eq!(url, "api.tvmaze.com"),
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}
