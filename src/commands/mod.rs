//! Command implementations for envscript.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config and executor setup they share.

mod exec;
mod resolve;

use crate::cli::{Command, ScriptArgs};
use crate::config::{Config, OutputFormat};
use crate::dotenv::{DotEnvParser, EnvMap};
use crate::error::Result;
use crate::script::ScriptExecutor;

/// Dispatch a command to its implementation.
///
/// Returns the process exit code on success.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Resolve(args) => resolve::cmd_resolve(args),
        Command::Exec(args) => exec::cmd_exec(args),
    }
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(args: &ScriptArgs, format: Option<OutputFormat>) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(args.env.iter().cloned(), args.substitute, format)?;
    Ok(config)
}

/// Run the script named by `args` with the settings in `config`.
fn resolve_script(args: &ScriptArgs, config: &Config) -> Result<EnvMap> {
    let parser = if config.substitute_env_vars {
        DotEnvParser::with_substitution(substitution_base(&config.environment))
    } else {
        DotEnvParser::new()
    };

    ScriptExecutor::new(parser).resolve(&config.environment, &args.script)
}

/// Variables visible to `$NAME` references: the host environment overlaid
/// with the configured base environment. Non-UTF-8 host entries are skipped.
fn substitution_base(environment: &EnvMap) -> EnvMap {
    let mut base: EnvMap = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    base.extend(environment.iter().map(|(k, v)| (k.clone(), v.clone())));
    base
}
