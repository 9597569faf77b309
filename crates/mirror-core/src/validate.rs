//! Pre-pass checks on the source and replica roots

use std::path::{Path, PathBuf};

use mirror_fs::{NormalizedPath, io};

use crate::ValidationError;
use crate::logger::MirrorLogger;

/// Confirm the roots are usable before a pass touches anything.
///
/// The source must be an existing directory. A missing replica root is
/// created (with any missing parents) and logged; an existing replica must be
/// a directory. The roots may not contain one another.
///
/// Runs on every pass, so a root that goes bad between passes fails the next
/// one.
pub fn validate(
    source: &Path,
    replica: &Path,
    logger: &dyn MirrorLogger,
) -> Result<(), ValidationError> {
    if !source.exists() {
        return Err(ValidationError::SourceNotFound {
            path: NormalizedPath::new(source),
        });
    }
    if !source.is_dir() {
        return Err(ValidationError::SourceNotDirectory {
            path: NormalizedPath::new(source),
        });
    }

    check_overlap(source, replica)?;

    if !replica.exists() {
        io::create_dir_all(replica).map_err(|e| ValidationError::ReplicaCreate {
            path: NormalizedPath::new(replica),
            source: e,
        })?;
        logger.info(&format!("Created \"{}\"", NormalizedPath::new(replica)));
    } else if !replica.is_dir() {
        return Err(ValidationError::ReplicaNotDirectory {
            path: NormalizedPath::new(replica),
        });
    }

    Ok(())
}

fn check_overlap(source: &Path, replica: &Path) -> Result<(), ValidationError> {
    let source_abs = resolve(source);
    let replica_abs = resolve(replica);

    if source_abs.starts_with(&replica_abs) || replica_abs.starts_with(&source_abs) {
        tracing::debug!(
            source = %source_abs.display(),
            replica = %replica_abs.display(),
            "Roots overlap"
        );
        return Err(ValidationError::OverlappingRoots {
            source_root: NormalizedPath::new(source),
            replica_root: NormalizedPath::new(replica),
        });
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-attach the
/// components that do not exist yet.
fn resolve(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut missing = Vec::new();

    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}
