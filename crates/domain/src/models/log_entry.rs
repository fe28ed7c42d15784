//! Audit log domain models.
//!
//! Log entries are append-only records written alongside every mutating
//! operation, in the same transaction as the mutation itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub controller: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub url: Option<String>,
}

/// Input for a new audit log entry, built with a fluent API from route
/// handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub action: String,
    pub controller: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub url: Option<String>,
}

impl NewLogEntry {
    /// Start a new entry for the given free-text action description.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            controller: None,
            level: Some("INFO".to_string()),
            message: None,
            url: None,
        }
    }

    /// Name the controller (route module) that performed the action.
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    /// Override the log level (defaults to `INFO`).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Attach a human-readable message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Record the request URL the action originated from.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let entry = NewLogEntry::action("Dodan novi partner");
        assert_eq!(entry.action, "Dodan novi partner");
        assert_eq!(entry.level.as_deref(), Some("INFO"));
        assert_eq!(entry.controller, None);
        assert_eq!(entry.message, None);
        assert_eq!(entry.url, None);
    }

    #[test]
    fn test_builder_chaining() {
        let entry = NewLogEntry::action("Obrisan zadatak 5")
            .controller("zadatak")
            .level("WARN")
            .message("delete")
            .url("/zadatak/5");
        assert_eq!(entry.controller.as_deref(), Some("zadatak"));
        assert_eq!(entry.level.as_deref(), Some("WARN"));
        assert_eq!(entry.message.as_deref(), Some("delete"));
        assert_eq!(entry.url.as_deref(), Some("/zadatak/5"));
    }

    #[test]
    fn test_log_entry_wire_names() {
        let entry = LogEntry {
            id: 1,
            timestamp: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            action: "Dodan novi partner".to_string(),
            controller: Some("partner".to_string()),
            level: Some("INFO".to_string()),
            message: None,
            url: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["Id"], 1);
        assert_eq!(json["Action"], "Dodan novi partner");
        assert_eq!(json["Controller"], "partner");
    }
}
