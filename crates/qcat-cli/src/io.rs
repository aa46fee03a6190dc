//! File reads and atomic writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::error::{CliError, Result};

/// Read a whole UTF-8 file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Write `content` to `path` atomically.
///
/// The content goes to a locked temp file next to the target, is synced,
/// then renamed over the target. A failed run never leaves a half-written
/// output behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| CliError::io(&temp_path, e))?;

    if temp_file.lock_exclusive().is_err() {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::LockFailed {
            path: path.to_path_buf(),
        });
    }

    let written = temp_file
        .write_all(content.as_bytes())
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::io(&temp_path, e));
    }

    if temp_file.unlock().is_err() {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::LockFailed {
            path: path.to_path_buf(),
        });
    }
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::io(path, e));
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
