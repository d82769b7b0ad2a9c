use crate::http_client::Payload;
use serde_json::Value;

/// Formats a response payload for display.
///
/// Text that parses as JSON is re-serialized with two-space indentation and
/// anything else is returned verbatim. Structured payloads are serialized the
/// same way.
pub fn display(payload: &Payload) -> String {
    match payload {
        Payload::Structured(value) => pretty_value(value),
        Payload::Text(text) => pretty(text),
    }
}

/// Pretty-prints text as indented JSON, falling back to the text itself when
/// it does not parse.
pub fn pretty(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .map(|value| pretty_value(&value))
        .unwrap_or_else(|_| text.into())
}

fn pretty_value(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
