//! Copy and removal primitives with path-aware errors
//!
//! Every function reports failures as [`Error::Io`] carrying the path that
//! failed, which is what ends up in the engine's "Skipped" warnings.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Create a directory and any missing ancestors.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Copy the full byte content of `src` over `dst`.
///
/// The bytes are streamed into a temporary file in the destination directory
/// (same filesystem), flushed to disk, then renamed over `dst`, so `dst` is
/// either the old content or the complete new content. The temporary file is
/// removed if any step fails.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut source = File::open(src).map_err(|e| Error::io(src, e))?;
    let temp_path = temp_path_for(dst);

    let result = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        let copied = io::copy(&mut source, &mut temp_file).map_err(|e| Error::io(src, e))?;

        temp_file.flush().map_err(|e| Error::io(&temp_path, e))?;
        temp_file
            .sync_all()
            .map_err(|e| Error::io(&temp_path, e))?;
        drop(temp_file);

        fs::rename(&temp_path, dst).map_err(|e| Error::io(dst, e))?;
        Ok(copied)
    })();

    if result.is_err()
        && temp_path.exists()
        && let Err(e) = fs::remove_file(&temp_path)
    {
        tracing::debug!("Failed to clean up {}: {}", temp_path.display(), e);
    }

    result
}

/// Remove a single file (or symlink).
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Remove an empty directory. Never recursive.
pub fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir(path).map_err(|e| Error::io(path, e))
}

/// Remove a directory and everything below it.
///
/// Only used when a replica directory stands where the source has a file.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Temporary sibling path used while replacing `dst`: `.{name}.{pid}.tmp`.
fn temp_path_for(dst: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        dst.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    dst.with_file_name(temp_name)
}
