//! Observability hook for script executions.
//!
//! The executor reports each successful run to an injected [`Reporter`]
//! instead of a process-wide logger. [`TracingReporter`] forwards to the
//! `tracing` facade and is the default.

use std::path::Path;

/// Receives an informational record for every successful script run.
pub trait Reporter {
    /// Called once with the script path and its combined output.
    fn script_succeeded(&self, script: &Path, output: &str);
}

/// Emits an `info` event with `script` and `output` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn script_succeeded(&self, script: &Path, output: &str) {
        tracing::info!(
            script = %script.display(),
            output,
            "got results from env script"
        );
    }
}

/// Discards all records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn script_succeeded(&self, _script: &Path, _output: &str) {}
}

impl<F> Reporter for F
where
    F: Fn(&Path, &str),
{
    fn script_succeeded(&self, script: &Path, output: &str) {
        self(script, output)
    }
}
