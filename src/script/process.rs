//! Child process orchestration for env scripts.

use super::validation::validate_script;
use crate::dotenv::EnvMap;
use crate::error::{EnvScriptError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Outcome of one script run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    /// Exit code of the process (None if terminated by a signal).
    pub code: Option<i32>,
    /// Combined stdout and stderr, split into lines in the order produced.
    /// `\n`, `\r\n`, and a lone `\r` all end a line.
    pub lines: Vec<String>,
}

impl ScriptOutput {
    /// Check if the script exited with status 0.
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// The captured lines joined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Validate and run `script`, capturing its merged output.
///
/// The script is invoked with no arguments and a null stdin. Its working
/// directory is the script's parent directory and its environment is the
/// host environment overlaid with `base_env`.
///
/// The output pipe is drained before the child is reaped, so scripts that
/// print more than a pipe buffer do not stall. If reading fails the child is
/// killed and reaped before the error is returned.
///
/// # Returns
///
/// * `Ok(ScriptOutput)` - The script ran to completion (any exit status)
/// * `Err(ScriptNotFound | ScriptNotExecutable)` - Validation failed, nothing spawned
/// * `Err(ScriptIo)` - Spawning, reading, or waiting failed
pub fn run_script(script: &Path, base_env: &EnvMap) -> Result<ScriptOutput> {
    validate_script(script)?;

    let io_error = |source: std::io::Error| EnvScriptError::ScriptIo {
        path: script.to_path_buf(),
        source,
    };

    // A relative program path is ambiguous once current_dir changes.
    let program = std::path::absolute(script).map_err(io_error)?;
    let working_dir = working_dir(&program);

    let (mut reader, writer) = std::io::pipe().map_err(io_error)?;
    let stderr_writer = writer.try_clone().map_err(io_error)?;

    let mut command = Command::new(&program);
    command
        .current_dir(&working_dir)
        .envs(base_env)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer);

    tracing::debug!(
        script = %program.display(),
        cwd = %working_dir.display(),
        overrides = base_env.len(),
        "spawning env script"
    );

    let mut child = command.spawn().map_err(io_error)?;

    // The command still owns the write ends; the read below only sees EOF
    // once every copy is closed.
    drop(command);

    let mut raw = Vec::new();
    if let Err(e) = reader.read_to_end(&mut raw) {
        kill_process(&mut child);
        return Err(io_error(e));
    }

    let status = child.wait().map_err(io_error)?;
    tracing::debug!(script = %program.display(), code = ?status.code(), "env script exited");

    let lines = split_lines(&String::from_utf8_lossy(&raw));

    Ok(ScriptOutput {
        code: status.code(),
        lines,
    })
}

fn working_dir(program: &Path) -> PathBuf {
    match program.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Split on `\n`, `\r\n`, or a lone `\r`. A final terminator does not start
/// an extra empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Kill a process and wait for it to terminate.
fn kill_process(child: &mut Child) {
    // The process may already have exited; either way it must be reaped.
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_dir_is_parent() {
        assert_eq!(
            working_dir(Path::new("/opt/scripts/env.sh")),
            PathBuf::from("/opt/scripts")
        );
    }

    #[test]
    fn test_working_dir_without_parent_is_current() {
        assert_eq!(working_dir(Path::new("env.sh")), PathBuf::from("."));
    }

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("A=1\nB=2\n"), vec!["A=1", "B=2"]);
        assert_eq!(split_lines("A=1\r\nB=2"), vec!["A=1", "B=2"]);
        assert_eq!(split_lines("A=1\rB=2\r"), vec!["A=1", "B=2"]);
        assert_eq!(split_lines("A=1\n\nB=2"), vec!["A=1", "", "B=2"]);
        assert!(split_lines("").is_empty());
    }

    #[cfg(unix)]
    #[test]
    #[serial_test::serial]
    fn test_kill_process_reaps_running_child() {
        use std::os::unix::process::ExitStatusExt;

        let mut child = Command::new("sleep").arg("30").spawn().unwrap();

        kill_process(&mut child);

        // Already reaped: the cached status is returned without blocking.
        let status = child.try_wait().unwrap().expect("child was not reaped");
        assert_eq!(status.signal(), Some(libc::SIGKILL));
    }

    #[test]
    fn test_output_helpers() {
        let output = ScriptOutput {
            code: Some(0),
            lines: vec!["A=1".to_string(), "B=2".to_string()],
        };
        assert!(output.is_success());
        assert_eq!(output.joined(), "A=1\nB=2");

        let output = ScriptOutput {
            code: None,
            ..output
        };
        assert!(!output.is_success());
    }
}
