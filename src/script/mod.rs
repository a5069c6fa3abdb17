//! Env script execution.
//!
//! This module turns a script path and a base environment into a resolved
//! variable mapping:
//!
//! - Validation: the path must be an existing, executable regular file
//! - Process: the script runs in its own directory with the host environment
//!   overlaid by the caller's entries, stdout and stderr merged
//! - Interpretation: a non-zero exit is a failure carrying the output; a zero
//!   exit hands the output lines to an [`EnvLineParser`](crate::dotenv::EnvLineParser)
//!
//! Execution is synchronous and has no timeout. A script that never exits
//! blocks the caller indefinitely.

mod executor;
mod process;
mod validation;


// Re-export public API
pub use executor::{ScriptExecutor, resolve};
pub use process::{ScriptOutput, run_script};
pub use validation::validate_script;
