//! Path mapping between the source and replica roots
//!
//! Every entry the engine touches is addressed by its absolute path under one
//! root; [`rebase`] moves it to the same relative location under the other.

use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Map `path`, which lives under `from_root`, to the same relative location
/// under `to_root`.
///
/// # Errors
///
/// Returns [`Error::OutsideRoot`] if `path` is not `from_root` or one of its
/// descendants.
pub fn rebase(path: &Path, from_root: &Path, to_root: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(from_root)
        .map_err(|_| Error::OutsideRoot {
            path: path.to_path_buf(),
            root: from_root.to_path_buf(),
        })?;

    if relative.as_os_str().is_empty() {
        Ok(to_root.to_path_buf())
    } else {
        Ok(to_root.join(relative))
    }
}

/// Whether anything at all lives at `path`.
///
/// Unlike [`Path::exists`] this does not follow symlinks, so a dangling link
/// still counts as an entry. Only a missing entry (or a non-directory where a
/// parent component should be) means absent; any other failure to inspect
/// `path` is returned as an error.
pub fn entry_exists(path: &Path) -> io::Result<bool> {
    match path.symlink_metadata() {
        Ok(_) => Ok(true),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// A path rendered with forward slashes.
///
/// Used wherever paths are shown to people (log lines, error messages) so
/// output is identical on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Converts backslashes to forward slashes.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebase_moves_nested_path() {
        let mapped = rebase(
            Path::new("/data/source/a/b/file.txt"),
            Path::new("/data/source"),
            Path::new("/backup/replica"),
        )
        .unwrap();
        assert_eq!(mapped, PathBuf::from("/backup/replica/a/b/file.txt"));
    }

    #[test]
    fn rebase_of_root_is_other_root() {
        let mapped = rebase(Path::new("/src"), Path::new("/src"), Path::new("/dst")).unwrap();
        assert_eq!(mapped, PathBuf::from("/dst"));
    }

    #[test]
    fn rebase_rejects_foreign_path() {
        let err = rebase(
            Path::new("/elsewhere/file.txt"),
            Path::new("/src"),
            Path::new("/dst"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::OutsideRoot { .. }));
    }

    #[test]
    fn rebase_is_component_wise() {
        // "/src-other" shares a string prefix with "/src" but not a component
        let result = rebase(
            Path::new("/src-other/file.txt"),
            Path::new("/src"),
            Path::new("/dst"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn normalized_display_uses_forward_slashes() {
        let path = NormalizedPath::new("replica\\sub\\file.txt");
        assert_eq!(path.to_string(), "replica/sub/file.txt");
    }

    #[test]
    fn missing_entry_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();

        assert!(!entry_exists(&dir.path().join("missing")).unwrap());
        assert!(entry_exists(dir.path()).unwrap());
    }

    #[test]
    fn file_in_place_of_parent_means_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes"), "plain file").unwrap();

        assert!(!entry_exists(&dir.path().join("notes/inner/x.txt")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_entry() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();

        assert!(!link.exists());
        assert!(entry_exists(&link).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_parent_is_an_error_not_absence() {
        use std::os::unix::fs::PermissionsExt;

        let is_root = std::process::Command::new("id")
            .arg("-u")
            .output()
            .map(|out| String::from_utf8_lossy(&out.stdout).trim() == "0")
            .unwrap_or(false);
        if is_root {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::write(locked.join("hidden.txt"), "hidden").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let result = entry_exists(&locked.join("hidden.txt"));

        let _ = std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }
}
