//! Script resolution: run, interpret the outcome, and parse.

use super::process::run_script;
use crate::dotenv::{DotEnvParser, EnvLineParser, EnvMap};
use crate::error::{EnvScriptError, Result};
use crate::report::{Reporter, TracingReporter};
use std::path::Path;

/// Resolves env scripts into variable mappings.
///
/// Parsing of the script output is delegated to `P`; successful runs are
/// reported to `R`. The executor holds no other state, so one instance can
/// serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct ScriptExecutor<P = DotEnvParser, R = TracingReporter> {
    parser: P,
    reporter: R,
}

impl<P: EnvLineParser> ScriptExecutor<P, TracingReporter> {
    /// Executor that reports through `tracing`.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            reporter: TracingReporter,
        }
    }
}

impl<P: EnvLineParser, R: Reporter> ScriptExecutor<P, R> {
    /// Executor with an explicit reporter.
    pub fn with_reporter(parser: P, reporter: R) -> Self {
        Self { parser, reporter }
    }

    /// The line parser used for script output.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Run `script` and parse its output into a variable mapping.
    ///
    /// # Arguments
    ///
    /// * `base_env` - Entries overlaid on the host environment for the child
    /// * `script` - Path to the executable; its directory is the working directory
    ///
    /// # Returns
    ///
    /// * `Ok(EnvMap)` - The parser's mapping of the script output
    /// * `Err(ScriptNotFound | ScriptNotExecutable)` - The path is unusable
    /// * `Err(ScriptExecutionFailed)` - Non-zero exit, with the captured output
    /// * `Err(ScriptIo)` - The process could not be run or read
    /// * `Err(Parse)` - The parser rejected the output, unchanged
    pub fn resolve(&self, base_env: &EnvMap, script: &Path) -> Result<EnvMap> {
        let output = run_script(script, base_env)?;
        let joined = output.joined();

        if !output.is_success() {
            return Err(EnvScriptError::ScriptExecutionFailed {
                path: script.to_path_buf(),
                code: output.code,
                output: joined,
            });
        }

        self.reporter.script_succeeded(script, &joined);

        Ok(self.parser.parse_lines(&output.lines)?)
    }
}

/// Resolve `script` with the default [`DotEnvParser`] and tracing reporter.
pub fn resolve(base_env: &EnvMap, script: &Path) -> Result<EnvMap> {
    ScriptExecutor::new(DotEnvParser::new()).resolve(base_env, script)
}
