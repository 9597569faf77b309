//! Top-down tree enumeration
//!
//! [`walk`] yields every descendant of a root in pre-order: a directory is
//! always produced before anything inside it. Reverse pruning relies on this
//! ordering, so it is part of the contract and covered by tests.

use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Kind of a filesystem entry, as far as mirroring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Classify a file type without following symlinks.
    ///
    /// Anything that is not a real directory (regular files, symlinks,
    /// special files) is treated as a file.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Kind of whatever currently lives at `path`, if anything.
    pub fn probe(path: &Path) -> Option<Self> {
        path.symlink_metadata()
            .ok()
            .map(|meta| Self::from_file_type(meta.file_type()))
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A single enumerated descendant of the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Absolute path (the walk root joined with the relative location).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Failure to read part of the tree.
#[derive(Debug, thiserror::Error)]
#[error("cannot read {}: {}", .path.display(), .source)]
pub struct WalkError {
    path: PathBuf,
    depth: usize,
    #[source]
    source: io::Error,
}

impl WalkError {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the walk root itself could not be read.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let depth = err.depth();
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other(message));
        Self {
            path,
            depth,
            source,
        }
    }
}

/// Lazy pre-order iterator over the descendants of a root directory.
///
/// The root itself is not yielded. Siblings are sorted by file name and
/// symlinks are reported as entries without being followed.
pub struct Walk {
    inner: walkdir::IntoIter,
}

impl Iterator for Walk {
    type Item = Result<Entry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(
            item.map(|dir_entry| {
                let kind = EntryKind::from_file_type(dir_entry.file_type());
                Entry::new(dir_entry.into_path(), kind)
            })
            .map_err(WalkError::from),
        )
    }
}

/// Enumerate everything under `root`, top-down.
pub fn walk(root: impl AsRef<Path>) -> Walk {
    let inner = WalkDir::new(root.as_ref())
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    Walk { inner }
}
