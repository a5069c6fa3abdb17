//! Config loading, validation, and override operations.

use super::model::Config;
use super::types::OutputFormat;
use crate::error::{EnvScriptError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EnvScriptError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EnvScriptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document as `null`; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            EnvScriptError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Environment keys must be non-empty and must not contain `=` or NUL.
    pub fn validate(&self) -> Result<()> {
        for key in self.environment.keys() {
            validate_env_key(key)?;
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    ///
    /// `environment` entries overlay the file's, `substitute` can only turn
    /// substitution on, and `format` replaces the file's format when given.
    pub fn apply_overrides(
        &mut self,
        environment: impl IntoIterator<Item = (String, String)>,
        substitute: bool,
        format: Option<OutputFormat>,
    ) -> Result<()> {
        for (key, value) in environment {
            validate_env_key(&key)?;
            self.environment.insert(key, value);
        }
        self.substitute_env_vars |= substitute;
        if let Some(format) = format {
            self.format = format;
        }
        Ok(())
    }
}

fn validate_env_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(EnvScriptError::UserError(
            "config validation failed: environment keys must be non-empty".to_string(),
        ));
    }
    if key.contains('=') || key.contains('\0') {
        return Err(EnvScriptError::UserError(format!(
            "config validation failed: environment key '{}' must not contain '=' or NUL",
            key.escape_default()
        )));
    }
    Ok(())
}

/// Parse a `KEY=VALUE` command-line assignment.
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => {
            Err(format!("invalid assignment '{}': key is empty", raw))
        }
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("invalid assignment '{}': expected KEY=VALUE", raw)),
    }
}
