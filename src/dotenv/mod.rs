//! Env-file line parsing.
//!
//! The script executor hands the captured output lines to an [`EnvLineParser`]
//! and returns whatever it produces. [`DotEnvParser`] is the bundled
//! implementation; hosts with their own grammar implement the trait or pass
//! a closure.
//!
//! # Grammar
//!
//! ```text
//! # comment
//! export FOO=bar
//! QUOTED="line one\nline two"
//! LITERAL='no $expansion here'
//! UNQUOTED=value # trailing comment
//! ```

mod parser;
mod substitute;


use std::collections::BTreeMap;
use thiserror::Error;

pub use parser::DotEnvParser;

/// Mapping from variable name to value.
pub type EnvMap = BTreeMap<String, String>;

/// A line of script output that is not valid env-file content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid env-file output at line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number within the parsed output.
    pub line: usize,
    pub message: String,
}

/// Converts env-file lines into a variable mapping.
pub trait EnvLineParser {
    /// Parse `lines` into a mapping, failing on malformed input.
    fn parse_lines(&self, lines: &[String]) -> Result<EnvMap, ParseError>;
}

impl<F> EnvLineParser for F
where
    F: Fn(&[String]) -> Result<EnvMap, ParseError>,
{
    fn parse_lines(&self, lines: &[String]) -> Result<EnvMap, ParseError> {
        self(lines)
    }
}
