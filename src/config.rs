//! Client configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CHAT_POLL_MS: u64 = 5000;
pub const DEFAULT_VIDEO_CONNECT_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the clinic site, without trailing slash.
    pub base_url: String,
    /// Raw `Cookie` header carrying the identity cookies and `csrftoken`.
    pub cookie: Option<String>,
    pub chat_poll_interval: Duration,
    pub video_connect_timeout: Duration,
    pub http: HttpTimeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie: None,
            chat_poll_interval: Duration::from_millis(DEFAULT_CHAT_POLL_MS),
            video_connect_timeout: Duration::from_secs(DEFAULT_VIDEO_CONNECT_TIMEOUT_SECS),
            http: HttpTimeouts {
                request_secs: DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `CLINIC_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `CLINIC_COOKIE`: raw cookie header sent with chat requests
    /// - `CLINIC_CHAT_POLL_MS`: default 5000
    /// - `CLINIC_VIDEO_CONNECT_TIMEOUT_SECS`: default 45
    /// - `CLINIC_HTTP_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CLINIC_HTTP_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if `CLINIC_BASE_URL` is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(std::env::var("CLINIC_BASE_URL").ok().as_deref())?;
        let cookie = std::env::var("CLINIC_COOKIE")
            .ok()
            .filter(|c| !c.trim().is_empty());

        Ok(Self {
            base_url,
            cookie,
            chat_poll_interval: Duration::from_millis(env_parse("CLINIC_CHAT_POLL_MS", DEFAULT_CHAT_POLL_MS)),
            video_connect_timeout: Duration::from_secs(env_parse(
                "CLINIC_VIDEO_CONNECT_TIMEOUT_SECS",
                DEFAULT_VIDEO_CONNECT_TIMEOUT_SECS,
            )),
            http: HttpTimeouts {
                request_secs: env_parse("CLINIC_HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_HTTP_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("CLINIC_HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_HTTP_CONNECT_TIMEOUT_SECS),
            },
        })
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.unwrap_or(DEFAULT_BASE_URL).trim();
    let url = reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl(format!("{raw}: unsupported scheme")));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
