//! Configuration types for envscript.

use serde::{Deserialize, Serialize};

/// How a resolved mapping is printed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `KEY=VALUE` lines, double-quoted when needed (default).
    #[default]
    Dotenv,
    /// A JSON object with sorted keys.
    Json,
    /// `export KEY='VALUE'` lines for `eval` in a POSIX shell.
    Shell,
}
