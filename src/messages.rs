//! Severity-keyed message accumulation.
//!
//! Nothing in the resolution pipeline is fatal: failures degrade to "best
//! available content" plus a logged message. Each resolution returns its
//! message (if any) as a plain value and the pipeline reduces them into a
//! [`MessageLog`], so no mutable state is shared between calls.

use serde::Serialize;

/// Severity of a collected message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single human-readable message produced while resolving one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    /// Create a warning-level message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    /// Create an error-level message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Ordered warning and error messages accumulated over one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageLog {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under its severity, preserving insertion order.
    pub fn push(&mut self, message: Message) {
        match message.severity {
            Severity::Warning => self.warnings.push(message.text),
            Severity::Error => self.errors.push(message.text),
        }
    }

    /// Append a warning.
    pub fn warn(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    /// Append an error.
    pub fn error(&mut self, text: impl Into<String>) {
        self.errors.push(text.into());
    }

    /// True when no messages were collected.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        assert!(MessageLog::new().is_empty());
    }

    #[test]
    fn push_routes_by_severity() {
        let mut log = MessageLog::new();
        log.push(Message::warning("heads up"));
        log.push(Message::error("went wrong"));

        assert_eq!(log.warnings, vec!["heads up"]);
        assert_eq!(log.errors, vec!["went wrong"]);
        assert!(!log.is_empty());
    }

    #[test]
    fn messages_keep_insertion_order() {
        let mut log = MessageLog::new();
        log.error("first");
        log.error("second");
        log.error("third");

        assert_eq!(log.errors, vec!["first", "second", "third"]);
    }

    #[test]
    fn serializes_to_severity_keyed_json() {
        let mut log = MessageLog::new();
        log.warn("w1");
        log.error("e1");

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["warnings"][0], "w1");
        assert_eq!(json["errors"][0], "e1");
    }
}
