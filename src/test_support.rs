use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serializes every test that moves the process working directory.
static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Runs a test from another working directory and restores the old one on drop.
///
/// Scripts must not depend on the caller's cwd; tests move it to prove that.
pub(crate) struct CwdGuard {
    previous: PathBuf,
    _held: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        // A panicking test poisons the lock; the cwd is restored by Drop anyway.
        let held = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self {
            previous,
            _held: held,
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Write an executable `/bin/sh` script with the given body.
///
/// Tests that spawn scripts should be `#[serial]`: a fork in another thread
/// while this file is open for writing makes exec fail with ETXTBSY.
#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    write_script_with_mode(dir, name, body, 0o755)
}

#[cfg(unix)]
pub(crate) fn write_script_with_mode(dir: &Path, name: &str, body: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    path
}
