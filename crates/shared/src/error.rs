use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERIC_FETCH_FAILURE: &str = "An error occurred";

/// Body carried by a failed catalog fetch.
///
/// The remote endpoint has no documented error schema, so the body is kept
/// as-is and only interpreted when a display message is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum ErrorPayload {
    Structured(Value),
    Text(String),
    Generic,
}

impl ErrorPayload {
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            return Self::Generic;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Structured(value) => structured_message(value),
            Self::Text(text) => text.clone(),
            Self::Generic => GENERIC_FETCH_FAILURE.to_string(),
        }
    }
}

fn structured_message(value: &Value) -> String {
    match value {
        Value::Object(fields) => ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::String(text) if !text.trim().is_empty() => text.clone(),
        Value::String(_) | Value::Null => GENERIC_FETCH_FAILURE.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
