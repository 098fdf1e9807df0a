// src/session.rs
use crate::types::{Config, ParaMinerError};
use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client for all sources. Proxy and timeout come from the
/// configuration; failures surface as `NetworkError`.
#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, ParaMinerError> {
        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90));

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| ParaMinerError::ConfigError(format!("Invalid proxy URL: {}", e)))?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build().map_err(|e| {
            ParaMinerError::ConfigError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Session { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response, ParaMinerError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| ParaMinerError::NetworkError(e.to_string()))
    }

    /// GET a URL and return its body, treating non-success statuses as
    /// network errors.
    pub async fn get_text(&self, url: &str) -> Result<String, ParaMinerError> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            return Err(ParaMinerError::NetworkError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ParaMinerError::NetworkError(e.to_string()))
    }
}
