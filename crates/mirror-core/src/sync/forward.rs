//! Forward sync: make every source entry present and current in the replica

use std::path::Path;

use mirror_fs::{Entry, EntryKind, NormalizedPath, checksum, io, rebase, walk};

use crate::Result;
use crate::logger::MirrorLogger;

/// Walk `source` top-down and bring the replica up to date entry by entry.
///
/// Directories missing from the replica are created (`Created`). Files are
/// copied (`Updated`) when the replica has nothing at that path or when the
/// content digests differ; equal digests mean no action and no log line.
/// A replica entry of the wrong kind is removed first (`Removed`).
///
/// A failure on one entry is logged as a `Skipped file` warning and the walk
/// moves on. Only failing to read the source root itself is fatal.
pub fn forward_sync(source: &Path, replica: &Path, logger: &dyn MirrorLogger) -> Result<()> {
    tracing::debug!(source = %source.display(), replica = %replica.display(), "Forward sync");

    for item in walk(source) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.is_root() => return Err(e.into()),
            Err(e) => {
                logger.warning(&format!(
                    "Skipped file \"{}\": {}",
                    NormalizedPath::new(e.path()),
                    e.io_error()
                ));
                continue;
            }
        };

        if let Err(e) = sync_entry(&entry, source, replica, logger) {
            logger.warning(&format!(
                "Skipped file \"{}\": {}",
                NormalizedPath::new(entry.path()),
                e
            ));
        }
    }

    Ok(())
}

fn sync_entry(
    entry: &Entry,
    source: &Path,
    replica: &Path,
    logger: &dyn MirrorLogger,
) -> mirror_fs::Result<()> {
    let target = rebase(entry.path(), source, replica)?;

    let mut present = EntryKind::probe(&target);
    if let Some(kind) = present
        && kind != entry.kind()
    {
        match kind {
            EntryKind::Directory => io::remove_dir_all(&target)?,
            EntryKind::File => io::remove_file(&target)?,
        }
        logger.info(&format!("Removed \"{}\"", NormalizedPath::new(&target)));
        present = None;
    }

    match entry.kind() {
        EntryKind::Directory => {
            if present.is_none() {
                io::create_dir_all(&target)?;
                logger.info(&format!("Created \"{}\"", NormalizedPath::new(&target)));
            }
        }
        EntryKind::File => {
            // Replica side is digested first
            if present.is_none() || !checksum::files_match(&target, entry.path())? {
                io::copy_file(entry.path(), &target)?;
                logger.info(&format!("Updated \"{}\"", NormalizedPath::new(&target)));
            }
        }
    }

    Ok(())
}
