//! Sheet API source.
//!
//! One plain GET against the configured endpoint: no query parameters, no
//! auth headers, no pagination. The body is buffered and decoded in one go.

use crate::decode_rows;
use pour_core::{config::SourceConfig, RawRow, RowSource, SourceError};
use std::time::Duration;

const USER_AGENT: &str = concat!("pour/", env!("CARGO_PKG_VERSION"));

/// Fetches recipe rows from a spreadsheet-backed JSON API.
pub struct HttpSource {
    http_client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        Ok(Self { http_client, url: url.into() })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::new(config.api_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RowSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<RawRow>, SourceError> {
        tracing::debug!(url = %self.url, "requesting recipe sheet");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status { status: status.as_u16(), body });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let rows = decode_rows(&body)?;
        tracing::debug!(url = %self.url, rows = rows.len(), "recipe sheet decoded");
        Ok(rows)
    }
}
