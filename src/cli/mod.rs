//! CLI argument parsing for envscript.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{OutputFormat, parse_assignment};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// envscript: resolve environment variables by running a script.
///
/// The script runs in its own directory with the current environment plus any
/// `--env` entries. Whatever it prints (stdout and stderr) must be env-file
/// content, one `KEY=VALUE` per line.
#[derive(Parser, Debug)]
#[command(name = "envscript")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for envscript.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a script and print the variables it resolves to.
    Resolve(ResolveArgs),

    /// Run a script, then run a command with the resolved variables.
    ///
    /// The command inherits the current environment, the `--env` entries, and
    /// the resolved variables, later sources winning. Its exit code becomes
    /// envscript's exit code.
    Exec(ExecArgs),
}

/// Arguments shared by every command that runs a script.
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// Path to the executable env script.
    pub script: PathBuf,

    /// Extra variable for the script, as KEY=VALUE. Repeatable.
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub env: Vec<(String, String)>,

    /// YAML config file with base environment and defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Expand $NAME and ${NAME} references in the script output.
    #[arg(long)]
    pub substitute: bool,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Output format (defaults to the config file's, then dotenv).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `exec` command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Command to run, followed by its arguments.
    #[arg(last = true, required = true, num_args = 1.., value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
