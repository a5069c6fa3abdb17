//! Error types for envscript.
//!
//! Uses thiserror for derive macros. Every message names the script so it can
//! be shown to a user on its own before a launch aborts.

use crate::dotenv::ParseError;
use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for script resolution.
#[derive(Error, Debug)]
pub enum EnvScriptError {
    /// The path does not exist or is not a regular file.
    #[error("env script '{}' does not exist or is not a regular file", path.display())]
    ScriptNotFound { path: PathBuf },

    /// The file exists but the current user cannot execute it.
    #[error("env script '{}' is not executable", path.display())]
    ScriptNotExecutable { path: PathBuf },

    /// The script ran and exited with a non-zero status.
    #[error(
        "env script '{}' returned a non-zero exit code, {}.\n{output}",
        path.display(),
        describe_code(*code)
    )]
    ScriptExecutionFailed {
        path: PathBuf,
        /// Exit code, `None` when the process was terminated by a signal.
        code: Option<i32>,
        /// Combined stdout and stderr, lines joined with `\n`.
        output: String,
    },

    /// The process could not be spawned, read, or waited on.
    #[error("error while executing '{}' as an env script: {source}", path.display())]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line parser rejected the script output.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

impl EnvScriptError {
    /// Returns the process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvScriptError::ScriptNotFound { .. } => exit_codes::USER_ERROR,
            EnvScriptError::ScriptNotExecutable { .. } => exit_codes::USER_ERROR,
            EnvScriptError::UserError(_) => exit_codes::USER_ERROR,
            EnvScriptError::ScriptExecutionFailed { .. } => exit_codes::SCRIPT_FAILURE,
            EnvScriptError::ScriptIo { .. } => exit_codes::IO_FAILURE,
            EnvScriptError::Parse(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for envscript operations.
pub type Result<T> = std::result::Result<T, EnvScriptError>;
