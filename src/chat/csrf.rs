//! CSRF token lookup for chat POSTs.
//!
//! The clinic site sets a `csrftoken` cookie that must be echoed in the
//! `X-CSRFToken` header. A missing cookie yields an empty token; the server
//! then rejects the POST, which the composer only logs.

use cookie::Cookie;

pub const CSRF_COOKIE: &str = "csrftoken";

/// Supplies the `X-CSRFToken` header value for each POST.
pub trait CsrfTokenSource: Send + Sync {
    fn csrf_token(&self) -> String;
}

/// A raw `Cookie` header value, e.g. `patient_id=...; csrftoken=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    raw: String,
}

impl CookieJar {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Percent-decoded value of the first cookie named `name`. Malformed
    /// pairs are skipped.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        Cookie::split_parse_encoded(self.raw.as_str())
            .filter_map(Result::ok)
            .find(|c| c.name() == name)
            .map(|c| c.value().to_owned())
    }
}

impl CsrfTokenSource for CookieJar {
    fn csrf_token(&self) -> String {
        self.get(CSRF_COOKIE).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;
