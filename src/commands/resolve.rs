//! Implementation of the `envscript resolve` command.

use super::{load_config, resolve_script};
use crate::cli::ResolveArgs;
use crate::error::{EnvScriptError, Result};
use crate::exit_codes;
use crate::output::render;
use std::io::Write;

/// Print the variables resolved from the script on stdout.
pub fn cmd_resolve(args: ResolveArgs) -> Result<i32> {
    let config = load_config(&args.script, args.format)?;
    let vars = resolve_script(&args.script, &config)?;
    let rendered = render(&vars, config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| EnvScriptError::UserError(format!("failed to write output: {}", e)))?;

    Ok(exit_codes::SUCCESS)
}
