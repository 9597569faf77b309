//! Reverse prune: delete replica entries that no longer exist in the source

use std::path::Path;

use mirror_fs::{Entry, EntryKind, NormalizedPath, entry_exists, io, rebase, walk};

use crate::Result;
use crate::logger::MirrorLogger;

/// Remove every replica entry without a source counterpart.
///
/// The replica is enumerated top-down and the collected entries are then
/// processed in reverse, so every entry's descendants are handled before the
/// entry itself. Directories are removed with a non-recursive delete, which
/// only succeeds once their orphaned contents are gone.
///
/// Failed removals are logged as `Skipped removing file` warnings; the entry
/// stays and is retried on the next pass. Only failing to read the replica
/// root itself is fatal.
pub fn reverse_prune(source: &Path, replica: &Path, logger: &dyn MirrorLogger) -> Result<()> {
    tracing::debug!(source = %source.display(), replica = %replica.display(), "Reverse prune");

    let mut entries = Vec::new();
    for item in walk(replica) {
        match item {
            Ok(entry) => entries.push(entry),
            Err(e) if e.is_root() => return Err(e.into()),
            Err(e) => logger.warning(&format!(
                "Skipped removing file \"{}\": {}",
                NormalizedPath::new(e.path()),
                e.io_error()
            )),
        }
    }

    for entry in entries.iter().rev() {
        match prune_entry(entry, source, replica) {
            Ok(true) => {
                logger.info(&format!("Removed \"{}\"", NormalizedPath::new(entry.path())));
            }
            Ok(false) => {}
            Err(e) => logger.warning(&format!(
                "Skipped removing file \"{}\": {}",
                NormalizedPath::new(entry.path()),
                e
            )),
        }
    }

    Ok(())
}

/// Delete `entry` if the source has nothing at the mapped path.
///
/// A source path that cannot be inspected is an error, never a deletion.
fn prune_entry(entry: &Entry, source: &Path, replica: &Path) -> mirror_fs::Result<bool> {
    let counterpart = rebase(entry.path(), replica, source)?;
    if entry_exists(&counterpart).map_err(|e| mirror_fs::Error::io(&counterpart, e))? {
        return Ok(false);
    }

    match entry.kind() {
        EntryKind::Directory => io::remove_dir(entry.path())?,
        EntryKind::File => io::remove_file(entry.path())?,
    }
    Ok(true)
}
