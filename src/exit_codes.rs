//! Exit code constants for the envscript CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing or non-executable script)
//! - 2: The script exited non-zero
//! - 3: I/O failure while running the script
//! - 4: The script output could not be parsed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or an unusable script path.
pub const USER_ERROR: i32 = 1;

/// The env script ran and returned a non-zero exit status.
pub const SCRIPT_FAILURE: i32 = 2;

/// Spawning, reading from, or waiting on the script failed.
pub const IO_FAILURE: i32 = 3;

/// The script output was not valid env-file content.
pub const PARSE_FAILURE: i32 = 4;
