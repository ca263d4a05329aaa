//! HTTP transport for the stats API
//!
//! Endpoint wrappers never talk to `reqwest` directly; they go through the
//! [`Transport`] trait so tests (and callers with their own HTTP stack) can
//! swap the collaborator out.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::{NbaError, Result, BASE_URL_ENV_VAR, TIMEOUT_ENV_VAR};


/// Base path for the stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Executes one GET request against a resource path and returns the decoded
/// JSON body.
///
/// Implementations must fail on non-success status codes rather than returning
/// the error body as a document.
pub trait Transport {
    fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// Static header block the stats API expects on every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
        ),
    );
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Configuration for [`StatsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; resource paths are appended to it.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Headers sent with every request.
    pub headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: STATS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: default_headers(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `NBA_STATS_BASE_URL` and `NBA_STATS_TIMEOUT_SECS`
    /// when they are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| NbaError::InvalidConfig {
                message: format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_ENV_VAR, raw),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Full URL for a resource path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Error for a non-success reply. A body that cannot be read is reported as
/// empty so the status and URL are kept.
fn status_error(status: StatusCode, url: String, body: reqwest::Result<String>) -> NbaError {
    NbaError::Transport {
        status: status.as_u16(),
        url,
        body: body.unwrap_or_default(),
    }
}

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    config: ClientConfig,
}

impl StatsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.headers.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Client configured from the environment, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for StatsClient {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.config.url_for(path);
        debug!(url = %url, params = ?query, "stats request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            debug!(status = status.as_u16(), url = %final_url, "stats request failed");
            return Err(status_error(status, final_url, response.text().await));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
