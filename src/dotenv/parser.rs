//! Line-by-line dotenv parser.

use super::substitute::expand;
use super::{EnvLineParser, EnvMap, ParseError};
use regex::Regex;
use std::sync::LazyLock;

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("Invalid env key regex"));

/// Parser for `KEY=VALUE` output.
///
/// Variable substitution is off unless built with
/// [`DotEnvParser::with_substitution`].
#[derive(Debug, Clone, Default)]
pub struct DotEnvParser {
    substitution: Option<EnvMap>,
}

/// A parsed right-hand side.
#[derive(Debug, PartialEq, Eq)]
enum Value {
    /// Single-quoted; never expanded.
    Literal(String),
    /// Unquoted or double-quoted; expanded when substitution is on.
    Expandable(String),
}

impl DotEnvParser {
    /// Parser that keeps values exactly as written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that expands `$NAME` and `${NAME}` references.
    ///
    /// References resolve against variables defined earlier in the same
    /// output first, then against `base`, then to the empty string.
    pub fn with_substitution(base: EnvMap) -> Self {
        Self {
            substitution: Some(base),
        }
    }

    /// Whether `$NAME` references are expanded.
    pub fn substitutes(&self) -> bool {
        self.substitution.is_some()
    }
}

impl EnvLineParser for DotEnvParser {
    fn parse_lines(&self, lines: &[String]) -> Result<EnvMap, ParseError> {
        let mut vars = EnvMap::new();

        for (idx, raw) in lines.iter().enumerate() {
            let line_no = idx + 1;
            let Some((key, value)) = parse_line(raw, line_no)? else {
                continue;
            };

            let value = match (value, &self.substitution) {
                (Value::Expandable(v), Some(base)) => expand(&v, &vars, base),
                (Value::Expandable(v), None) | (Value::Literal(v), _) => v,
            };
            vars.insert(key, value);
        }

        Ok(vars)
    }
}

/// Parse a single line. Blank and comment lines yield `None`.
fn parse_line(raw: &str, line: usize) -> Result<Option<(String, Value)>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let body = trimmed
        .strip_prefix("export ")
        .map(str::trim_start)
        .unwrap_or(trimmed);

    let Some((key, rest)) = body.split_once('=') else {
        return Err(ParseError {
            line,
            message: format!("expected KEY=VALUE, found '{}'", trimmed),
        });
    };

    let key = key.trim();
    if !KEY_REGEX.is_match(key) {
        return Err(ParseError {
            line,
            message: format!("invalid variable name '{}'", key),
        });
    }

    // `KEY= # note` is an empty value followed by a comment.
    if rest.starts_with(char::is_whitespace) && rest.trim_start().starts_with('#') {
        return Ok(Some((key.to_string(), Value::Expandable(String::new()))));
    }

    let value = parse_value(rest.trim(), line)?;
    Ok(Some((key.to_string(), value)))
}

fn parse_value(raw: &str, line: usize) -> Result<Value, ParseError> {
    if let Some(rest) = raw.strip_prefix('\'') {
        let Some(end) = rest.find('\'') else {
            return Err(ParseError {
                line,
                message: "unterminated single-quoted value".to_string(),
            });
        };
        check_trailing(&rest[end + 1..], line)?;
        return Ok(Value::Literal(rest[..end].to_string()));
    }

    if let Some(rest) = raw.strip_prefix('"') {
        let (value, consumed) = parse_double_quoted(rest, line)?;
        check_trailing(&rest[consumed..], line)?;
        return Ok(Value::Expandable(value));
    }

    // Unquoted: an inline comment starts at whitespace followed by '#'.
    let end = [" #", "\t#"]
        .iter()
        .filter_map(|marker| raw.find(marker))
        .min()
        .unwrap_or(raw.len());
    let value = &raw[..end];
    Ok(Value::Expandable(value.trim_end().to_string()))
}

/// Parse the body of a double-quoted value, returning the unescaped text and
/// the number of bytes consumed including the closing quote.
fn parse_double_quoted(rest: &str, line: usize) -> Result<(String, usize), ParseError> {
    let mut value = String::with_capacity(rest.len());
    let mut chars = rest.char_indices();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '"' => return Ok((value, pos + 1)),
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                }
                None => break,
            },
            c => value.push(c),
        }
    }

    Err(ParseError {
        line,
        message: "unterminated double-quoted value".to_string(),
    })
}

fn check_trailing(trailing: &str, line: usize) -> Result<(), ParseError> {
    let trailing = trailing.trim_start();
    if trailing.is_empty() || trailing.starts_with('#') {
        Ok(())
    } else {
        Err(ParseError {
            line,
            message: format!("unexpected characters after quoted value: '{}'", trailing),
        })
    }
}
