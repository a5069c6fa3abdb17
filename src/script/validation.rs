//! Pre-spawn checks on the script path.

use crate::error::{EnvScriptError, Result};
use std::path::Path;

/// Check that `path` is an existing regular file the current user may execute.
///
/// Symlinks are followed. Checks run in order, so a missing file is always
/// reported as [`EnvScriptError::ScriptNotFound`] rather than not executable.
pub fn validate_script(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => {
            return Err(EnvScriptError::ScriptNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    if !is_executable(path) {
        return Err(EnvScriptError::ScriptNotExecutable {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Ask the kernel whether the calling user may execute `path` (`access(2)` with `X_OK`).
///
/// The owner, group, and other bits are weighed against the caller's ids, so a
/// file executable only by others is rejected for its owner.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

// Windows has no execute bit; whether the file can be launched is decided at spawn.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
