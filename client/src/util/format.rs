//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::{Map, Value};

/// Render a 0..=1 ratio as a percentage with one decimal, e.g. `91.0%`.
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Snake-case backend keys as labels: `f1_score` becomes `F1 score`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compact text for a loosely typed JSON field.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_owned(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Label/value pairs for a payload's passthrough fields, in key order.
#[must_use]
pub fn extra_fields(extra: &Map<String, Value>) -> Vec<(String, String)> {
    extra.iter().map(|(key, value)| (humanize_key(key), value_text(value))).collect()
}
