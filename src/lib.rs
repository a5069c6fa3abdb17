//! envscript: resolve environment variables by running a script.
//!
//! A caller supplies a base environment and the path of an executable. The
//! script runs in its own directory with the host environment overlaid by the
//! base environment; its combined stdout and stderr is parsed as env-file
//! content and returned as a mapping.
//!
//! ```no_run
//! use envscript::{DotEnvParser, EnvMap, ScriptExecutor};
//! use std::path::Path;
//!
//! let mut base = EnvMap::new();
//! base.insert("PROJECT_ROOT".to_string(), "/work/app".to_string());
//!
//! let executor = ScriptExecutor::new(DotEnvParser::new());
//! let vars = executor.resolve(&base, Path::new("/work/app/env.sh"))?;
//! for (key, value) in &vars {
//!     println!("{key}={value}");
//! }
//! # Ok::<(), envscript::EnvScriptError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dotenv;
pub mod error;
pub mod exit_codes;
pub mod output;
pub mod report;
pub mod script;

#[cfg(test)]
mod test_support;

// Re-export public API
pub use dotenv::{DotEnvParser, EnvLineParser, EnvMap, ParseError};
pub use error::{EnvScriptError, Result};
pub use report::{NoopReporter, Reporter, TracingReporter};
pub use script::{ScriptExecutor, ScriptOutput, resolve, run_script, validate_script};
