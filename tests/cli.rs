//! Integration tests for top-level CLI behavior.
//!
//! Every test is `#[serial]` so no test forks while another's script file is
//! still open for writing.

#![cfg(unix)]

use serial_test::serial;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_envscript(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_envscript");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run envscript binary")
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
#[serial]
fn help_lists_commands() {
    let output = run_envscript(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("exec"));
}

#[test]
#[serial]
fn resolve_prints_dotenv_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo B=2\necho A=1");

    let output = run_envscript(&["resolve", path_arg(&script)]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "A=1\nB=2\n");
}

#[test]
#[serial]
fn resolve_json_with_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo \"OUT=$FOO\"");

    let output = run_envscript(&[
        "resolve",
        path_arg(&script),
        "-e",
        "FOO=bar",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({"OUT": "bar"}));
}

#[test]
#[serial]
fn resolve_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo 'DATA=${ROOT}/data'");
    let config = temp_dir.path().join("envscript.yaml");
    std::fs::write(
        &config,
        "environment:\n  ROOT: /srv\nsubstitute_env_vars: true\nformat: shell\n",
    )
    .unwrap();

    let output = run_envscript(&["resolve", path_arg(&script), "--config", path_arg(&config)]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "export DATA='/srv/data'\n"
    );
}

#[test]
#[serial]
fn resolve_missing_script_is_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.sh");

    let output = run_envscript(&["resolve", path_arg(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert!(stderr.contains("missing.sh"));
}

#[test]
#[serial]
fn resolve_failing_script_reports_output() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo boom\nexit 1");

    let output = run_envscript(&["resolve", path_arg(&script)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-zero exit code, 1"));
    assert!(stderr.contains("boom"));
}

#[test]
#[serial]
fn resolve_malformed_output_is_parse_failure() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo not-an-assignment");

    let output = run_envscript(&["resolve", path_arg(&script)]);

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"));
}

#[test]
#[serial]
fn verbose_logs_script_output_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo A=1");

    let output = run_envscript(&["-v", "resolve", path_arg(&script)]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "A=1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("got results from env script"));
}

#[test]
#[serial]
fn exec_runs_command_with_resolved_vars() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo GREETING=hello");

    let output = run_envscript(&[
        "exec",
        path_arg(&script),
        "-e",
        "NAME=world",
        "--",
        "sh",
        "-c",
        "echo \"$GREETING $NAME\"; exit 5",
    ]);

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello world\n");
}

#[test]
#[serial]
fn exec_resolved_vars_win_over_env_flags() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "env.sh", "echo MODE=from-script");

    let output = run_envscript(&[
        "exec",
        path_arg(&script),
        "-e",
        "MODE=from-flag",
        "--",
        "sh",
        "-c",
        "echo $MODE",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "from-script\n");
}
