//! Response formatting: pretty JSON or a flattened text rendering.

use crate::error::TempoError;
use crate::settings::DisplayMode;
use serde_json::Value;

/// Field injected into every successful response as a confirmation marker.
pub const HTTP_CODE_FIELD: &str = "httpCode";

/// Characters removed from every surviving line in text mode.
const STRIPPED: [char; 4] = ['[', '{', '"', ','];

/// Render a successful response body. An empty body is treated as `{}`.
pub fn render_response(body: &str, mode: DisplayMode) -> Result<String, TempoError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    let mut value: Value = serde_json::from_str(body)?;
    if let Value::Object(ref mut map) = value {
        map.insert(HTTP_CODE_FIELD.to_string(), Value::from(200));
    }
    format_value(&value, mode)
}

/// Render a value as-is (no marker injected).
pub fn format_value(value: &Value, mode: DisplayMode) -> Result<String, TempoError> {
    let pretty = serde_json::to_string_pretty(value)?;
    Ok(match mode {
        DisplayMode::Json => pretty,
        DisplayMode::Text => flatten_text(&pretty),
    })
}

/// Strip structural punctuation from pretty-printed JSON.
///
/// Lines starting (after indentation) with `{`, `}` or `]` are dropped. A blank line
/// separates consecutive list entries: it is emitted when a dropped line is followed by
/// a line at the same indentation as the previous surviving line.
pub fn flatten_text(pretty: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut last_structural = false;
    let mut last_indent = 0usize;

    for line in pretty.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let structural = matches!(line[indent..].chars().next(), Some('{' | '}' | ']'));

        if !structural {
            if last_structural && last_indent == indent {
                lines.push(String::new());
            }
            last_indent = indent;
            lines.push(line.chars().filter(|c| !STRIPPED.contains(c)).collect());
        }
        last_structural = structural;
    }

    lines.join("\n")
}
