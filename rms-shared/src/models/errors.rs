use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend.
///
/// `detail` is a plain string for handled failures and a list of
/// `{ loc, msg, type }` objects for request validation failures.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorResponse {
    /// Creates an error body carrying a plain message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    /// Parses an error body, returning `None` when it is not the backend's shape.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Flattens `detail` into a single human readable message.
    ///
    /// # Returns
    /// `None` when the detail is absent, empty, or of an unexpected shape.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
