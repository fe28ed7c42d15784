//! Client toast notifications carried in a custom response header.
//!
//! Mutating endpoints attach a JSON-encoded payload in `X-Notification`;
//! the client reads it and shows a toast without inspecting the body.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

/// Response header carrying the JSON-encoded notification payload.
pub const NOTIFICATION_HEADER: &str = "x-notification";

/// Toast payload shown by the client after a mutating operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Header map containing only the notification header.
    ///
    /// Messages are plain ASCII; a payload that cannot be encoded as a
    /// header value is dropped rather than failing the response.
    pub fn into_headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(json) = serde_json::to_string(&self) {
            if let Ok(value) = HeaderValue::try_from(json) {
                headers.insert(HeaderName::from_static(NOTIFICATION_HEADER), value);
            }
        }
        headers
    }
}
