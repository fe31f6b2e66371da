//! Remote chat feed client.
//!
//! Thin HTTP wrapper for `/clinic/chat/`. The feed body is decoded by
//! `types::parse_feed` so the parsing is testable without a server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use super::csrf::{CookieJar, CsrfTokenSource};
use super::types::{ChatError, MessageRecord, OutgoingDraft, parse_feed};
use crate::config::ClientConfig;

pub const CHAT_PATH: &str = "/clinic/chat/";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// The shared consultation message log.
#[async_trait]
pub trait ChatFeed: Send + Sync {
    /// Fetch the full feed in server order.
    async fn fetch(&self) -> Result<Vec<MessageRecord>, ChatError>;

    /// Submit a message for durable storage.
    async fn send(&self, draft: &OutgoingDraft) -> Result<(), ChatError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpChatFeed {
    http: reqwest::Client,
    url: String,
    cookies: CookieJar,
    csrf: Arc<dyn CsrfTokenSource>,
}

impl HttpChatFeed {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.request_secs))
            .connect_timeout(Duration::from_secs(config.http.connect_secs))
            .build()
            .map_err(|e| ChatError::HttpClientBuild(e.to_string()))?;
        let cookies = CookieJar::new(config.cookie.clone().unwrap_or_default());
        Ok(Self {
            http,
            url: format!("{}{CHAT_PATH}", config.base_url),
            csrf: Arc::new(cookies.clone()),
            cookies,
        })
    }

    /// Read the CSRF token from `source` instead of the configured cookie.
    #[must_use]
    pub fn with_csrf_source(mut self, source: Arc<dyn CsrfTokenSource>) -> Self {
        self.csrf = source;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn cookie_headers(&self) -> Result<HeaderMap, ChatError> {
        let mut headers = HeaderMap::new();
        if !self.cookies.is_empty() {
            let value =
                HeaderValue::from_str(self.cookies.header_value()).map_err(|e| ChatError::InvalidHeader(e.to_string()))?;
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl ChatFeed for HttpChatFeed {
    async fn fetch(&self) -> Result<Vec<MessageRecord>, ChatError> {
        let response = self
            .http
            .get(&self.url)
            .headers(self.cookie_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        if status != 200 {
            return Err(ChatError::Status { status, body: text });
        }

        parse_feed(&text)
    }

    async fn send(&self, draft: &OutgoingDraft) -> Result<(), ChatError> {
        let csrf = HeaderValue::from_str(&self.csrf.csrf_token())
            .map_err(|e| ChatError::InvalidHeader(e.to_string()))?;

        let response = self
            .http
            .post(&self.url)
            .headers(self.cookie_headers()?)
            .header(CSRF_HEADER, csrf)
            .json(draft)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status { status: status.as_u16(), body });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;
