//! Turns failed API calls into something a user can read.
//!
//! Errors arrive as JSON views of whatever the HTTP client threw. Fields are
//! tested for JavaScript truthiness, so `""`, `0`, `false` and `null` count as
//! absent.

use serde_json::Value;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Picks the best message, in order: the server's `response.data.error`,
/// a status-derived message, a network failure message, the error's own
/// `message`, and finally `fallback`.
pub fn describe_api_error(error: &Value, fallback: &str) -> String {
    if let Some(response) = truthy_field(error, "response") {
        if let Some(server_error) = response.pointer("/data/error").filter(|v| is_truthy(v)) {
            return display(server_error);
        }
        let status = response
            .get("status")
            .filter(|v| is_truthy(v))
            .map(display)
            .unwrap_or_else(|| "unknown".to_string());
        return format!("Server error: {status}");
    }
    if truthy_field(error, "request").is_some() {
        return NETWORK_ERROR_MESSAGE.to_string();
    }
    if let Some(message) = truthy_field(error, "message") {
        return display(message);
    }
    fallback.to_string()
}

fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
