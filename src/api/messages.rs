//! Human-readable messages from failure response bodies.
//!
//! The backend is not consistent about error shapes. Recognized bodies, in
//! priority order:
//!
//! - `{"detail": "text"}` (`HTTPException`)
//! - `{"detail": [{"loc": [...], "msg": "text"}, ...]}` (request validation)
//! - `{"detail": {"message": "text"}}`
//! - `{"message": "text"}` (error envelope)
//! - `{"field": {"msg" | "detail" | "message": "text"}, ...}` or
//!   `{"field": "text"}` (per-field registration errors)

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use serde_json::{Map, Value};

/// Extract every recognizable message from `body`. Per-field messages follow
/// JSON map iteration order. Returns an empty list for unparseable or unrecognized
/// bodies.
#[must_use]
pub fn extract_error_messages(body: &str) -> Vec<String> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };

    if let Some(detail) = map.get("detail") {
        let messages = detail_messages(detail);
        if !messages.is_empty() {
            return messages;
        }
    }
    if let Some(message) = non_blank(map.get("message")) {
        return vec![message];
    }
    field_messages(&map)
}

fn detail_messages(detail: &Value) -> Vec<String> {
    match detail {
        Value::String(text) => non_blank_str(text).into_iter().collect(),
        Value::Array(items) => items.iter().filter_map(validation_item_message).collect(),
        Value::Object(inner) => non_blank(inner.get("message")).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn validation_item_message(item: &Value) -> Option<String> {
    let msg = non_blank(item.get("msg"))?;
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str)
        .filter(|name| *name != "body");
    Some(match field {
        Some(field) => format!("{field}: {msg}"),
        None => msg,
    })
}

/// Envelope members that never hold a per-field message.
const ENVELOPE_KEYS: &[&str] = &["status", "data", "errors", "code"];

fn field_messages(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .filter(|(key, _)| !ENVELOPE_KEYS.contains(&key.as_str()))
        .filter_map(|(_, value)| match value {
            Value::String(text) => non_blank_str(text),
            Value::Object(inner) => ["msg", "detail", "message"]
                .iter()
                .find_map(|key| non_blank(inner.get(*key))),
            _ => None,
        })
        .collect()
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).and_then(non_blank_str)
}

fn non_blank_str(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
