//! Chat value types and wire formats.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

/// Display name used for messages echoed locally before the server has them.
pub const LOCAL_AUTHOR: &str = "You";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The feed endpoint answered with something other than 200.
    #[error("chat endpoint returned status {status}")]
    Status { status: u16, body: String },

    /// The feed body was not the expected JSON shape.
    #[error("chat feed decode failed: {0}")]
    Decode(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A configured header value (cookie or CSRF token) is not valid ASCII.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

// =============================================================================
// MESSAGE RECORD
// =============================================================================

/// One message in the consultation log.
///
/// Identity is `id` alone: two records with the same id are the same message
/// even if the server normalized other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "uuid")]
    pub id: String,
    #[serde(rename = "name")]
    pub author_display_name: String,
    /// Epoch milliseconds. The server emits fractional values.
    #[serde(rename = "time")]
    pub sent_at: f64,
    #[serde(rename = "text")]
    pub body: String,
}

/// Body of `GET /clinic/chat/`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub messages: Vec<MessageRecord>,
}

/// A message about to be sent, serialized as `{uuid, text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingDraft {
    #[serde(rename = "uuid")]
    pub id: String,
    #[serde(rename = "text")]
    pub body: String,
}

impl OutgoingDraft {
    /// Local record used for the optimistic echo.
    #[must_use]
    pub fn to_local_record(&self, sent_at: f64) -> MessageRecord {
        MessageRecord {
            id: self.id.clone(),
            author_display_name: LOCAL_AUTHOR.to_string(),
            sent_at,
            body: self.body.clone(),
        }
    }
}

/// Parse a feed body.
///
/// # Errors
///
/// Returns `ChatError::Decode` if the body is not `{messages: [...]}`.
pub fn parse_feed(text: &str) -> Result<Vec<MessageRecord>, ChatError> {
    serde_json::from_str::<FeedResponse>(text)
        .map(|r| r.messages)
        .map_err(|e| ChatError::Decode(e.to_string()))
}

// =============================================================================
// RENDERING
// =============================================================================

/// What a view shows for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub id: String,
    pub name: String,
    /// `HH:MM:SS` wall-clock time.
    pub time: String,
    pub text: String,
}

impl RenderedMessage {
    #[must_use]
    pub fn from_record(record: &MessageRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.author_display_name.clone(),
            time: format_clock(record.sent_at),
            text: record.body.clone(),
        }
    }
}

/// Format epoch millis as local `HH:MM:SS`, falling back to UTC when the
/// local offset is unavailable (e.g. on a multi-threaded runtime).
#[must_use]
pub fn format_clock(sent_at_ms: f64) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    format_clock_in(sent_at_ms, offset)
}

pub(crate) fn format_clock_in(sent_at_ms: f64, offset: UtcOffset) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (sent_at_ms * 1_000_000.0) as i128;
    let at = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .to_offset(offset);
    format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())
}

/// Current time as epoch millis.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn now_millis() -> f64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as f64
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
