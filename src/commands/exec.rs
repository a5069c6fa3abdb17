//! Implementation of the `envscript exec` command.

use super::{load_config, resolve_script};
use crate::cli::ExecArgs;
use crate::error::{EnvScriptError, Result};
use std::process::{Command, ExitStatus};

/// Resolve the script, then run the target command with the variables applied.
pub fn cmd_exec(args: ExecArgs) -> Result<i32> {
    let config = load_config(&args.script, None)?;
    let vars = resolve_script(&args.script, &config)?;

    let Some((program, program_args)) = args.command.split_first() else {
        return Err(EnvScriptError::UserError(
            "exec requires a command after '--'".to_string(),
        ));
    };

    tracing::debug!(program = %program, resolved = vars.len(), "launching command");

    let status = Command::new(program)
        .args(program_args)
        .envs(&config.environment)
        .envs(&vars)
        .status()
        .map_err(|e| {
            EnvScriptError::UserError(format!(
                "failed to execute command '{}': {}\n\
                 Fix: ensure the command is installed and in PATH.",
                program, e
            ))
        })?;

    Ok(exit_code_of(status))
}

/// Map a child status to our exit code; signals follow the shell's 128+N.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
