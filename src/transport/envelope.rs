//! Response envelope handling.
//!
//! Successful responses may wrap the payload as `{ "data": ... }`; callers
//! only ever see the payload. Failed responses are reduced to a
//! `TransportError`, preferring whatever message the server supplied.

use crate::error::TransportError;
use serde_json::Value;

/// Return the payload of a successful response body.
///
/// Empty bodies (e.g. `204 No Content`) become `Value::Null`. Bodies that are
/// not JSON are kept as a JSON string.
pub fn unwrap_payload(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        Ok(other) => other,
        Err(_) => Value::String(body.to_string()),
    }
}

/// Extract the server-supplied message from an error body, if any.
///
/// Looks at `message`, then `error.message`, then `error` when it is a plain
/// string.
pub fn server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let pick = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    pick(json.get("message"))
        .or_else(|| pick(json.get("error").and_then(|e| e.get("message"))))
        .or_else(|| pick(json.get("error")))
}

/// Normalize a non-2xx response into a `TransportError`.
pub fn normalize_error(status: u16, body: &str, reason: Option<&str>) -> TransportError {
    let message = server_message(body)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
        })
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {status}"));
    TransportError::new(Some(status), message)
}
