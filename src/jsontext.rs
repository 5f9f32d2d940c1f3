use anyhow::{Context, Result};
use serde_json::Value;

/// Parse `text`, surfacing a user-facing message when the syntax is bad.
pub fn validate(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("Invalid JSON format. Please check your syntax.")
}

/// Re-render `text` as two-space indented JSON. Fails without touching the
/// caller's state when the input does not parse.
pub fn beautify(text: &str) -> Result<String> {
    let value = validate(text)?;
    serde_json::to_string_pretty(&value).context("Failed to re-serialize JSON")
}

/// Pretty-print when the text parses, otherwise hand back the raw text.
pub fn beautify_or_raw(text: &str) -> String {
    beautify(text).unwrap_or_else(|_| text.to_string())
}
