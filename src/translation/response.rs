/*!
 * Parsing of raw LLM output into JSON.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::UpstreamError;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_-]*\s*\n?(.*?)\n?\s*```$").expect("valid code fence regex")
});

/// Remove a surrounding Markdown code fence, if any
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match CODE_FENCE.captures(trimmed).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    }
}

/// Parse provider output as JSON
pub fn parse_json(raw: &str) -> Result<Value, UpstreamError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| UpstreamError::parse(e, raw.trim()))
}

/// Parse provider output as a JSON array
pub fn parse_array(raw: &str) -> Result<Vec<Value>, UpstreamError> {
    match parse_json(raw)? {
        Value::Array(items) => Ok(items),
        other => Err(UpstreamError::Shape(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Parse provider output as a JSON object
pub fn parse_object(raw: &str) -> Result<Map<String, Value>, UpstreamError> {
    match parse_json(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(UpstreamError::Shape(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
