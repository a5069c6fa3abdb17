//! Rendering of resolved mappings for the CLI.

use crate::config::OutputFormat;
use crate::dotenv::EnvMap;
use crate::error::{EnvScriptError, Result};

/// Render `vars` in the requested format. Non-empty output ends with a newline.
pub fn render(vars: &EnvMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Dotenv => Ok(lines(vars, |key, value| {
            format!("{}={}", key, dotenv_value(value))
        })),
        OutputFormat::Shell => Ok(lines(vars, |key, value| {
            format!("export {}={}", key, shell_quote(value))
        })),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(vars).map_err(|e| {
                EnvScriptError::UserError(format!("failed to serialize variables to JSON: {}", e))
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn lines(vars: &EnvMap, render_one: impl Fn(&str, &str) -> String) -> String {
    vars.iter()
        .map(|(key, value)| render_one(key.as_str(), value.as_str()) + "\n")
        .collect()
}

/// Double-quote values that would not survive an unquoted dotenv round trip.
fn dotenv_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value != value.trim()
        || value
            .chars()
            .any(|c| matches!(c, '#' | '"' | '\'' | '\\' | '\n' | '\r' | '\t'));
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
