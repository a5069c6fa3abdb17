//! Config struct definition.

use super::types::OutputFormat;
use crate::dotenv::EnvMap;
use serde::{Deserialize, Serialize};

/// Settings for resolving an env script from the CLI.
///
/// Loaded from an optional YAML file. Unknown fields are ignored for forward
/// compatibility; command-line flags are applied on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base environment entries passed to the script.
    pub environment: EnvMap,

    /// Whether `$NAME` references in the script output are expanded.
    pub substitute_env_vars: bool,

    /// Output format for `resolve`.
    pub format: OutputFormat,
}
