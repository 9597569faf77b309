//! [`MirrorFixture`]: temporary source and replica trees.

use std::fs;
use std::path::{Path, PathBuf};

use mirror_core::{MirrorLogger, run_pass};
use tempfile::TempDir;

/// A temporary directory holding `source_folder/` and `replica_folder/`.
///
/// Paths passed to the helpers are relative to the respective root and use
/// forward slashes.
pub struct MirrorFixture {
    temp_dir: TempDir,
    source: PathBuf,
    replica: PathBuf,
}

impl MirrorFixture {
    /// Create empty source and replica directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source_folder");
        let replica = temp_dir.path().join("replica_folder");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&replica).unwrap();
        Self {
            temp_dir,
            source,
            replica,
        }
    }

    /// The usual starting tree:
    ///
    /// ```text
    /// source_folder/
    ///   file1.txt          "This is file 1"
    ///   file2.txt          "This is file 2"
    ///   subdir/file3.txt   "This is file 3 in subdir"
    /// replica_folder/      (empty)
    /// ```
    pub fn standard() -> Self {
        let fixture = Self::new();
        fixture.write_source("file1.txt", "This is file 1");
        fixture.write_source("file2.txt", "This is file 2");
        fixture.write_source("subdir/file3.txt", "This is file 3 in subdir");
        fixture
    }

    /// The temp directory containing both roots.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn replica(&self) -> &Path {
        &self.replica
    }

    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source.join(relative)
    }

    pub fn replica_path(&self, relative: &str) -> PathBuf {
        self.replica.join(relative)
    }

    /// Write a source file, creating parent directories as needed.
    pub fn write_source(&self, relative: &str, content: impl AsRef<[u8]>) {
        write_with_parents(&self.source_path(relative), content.as_ref());
    }

    /// Write a replica file, creating parent directories as needed.
    pub fn write_replica(&self, relative: &str, content: impl AsRef<[u8]>) {
        write_with_parents(&self.replica_path(relative), content.as_ref());
    }

    pub fn mkdir_source(&self, relative: &str) {
        fs::create_dir_all(self.source_path(relative)).unwrap();
    }

    pub fn mkdir_replica(&self, relative: &str) {
        fs::create_dir_all(self.replica_path(relative)).unwrap();
    }

    /// Delete a source file or directory tree.
    pub fn remove_source(&self, relative: &str) {
        let path = self.source_path(relative);
        if path.is_dir() {
            fs::remove_dir_all(&path).unwrap();
        } else {
            fs::remove_file(&path).unwrap();
        }
    }

    pub fn read_replica(&self, relative: &str) -> String {
        fs::read_to_string(self.replica_path(relative)).unwrap_or_else(|e| {
            panic!("Failed to read replica file {}: {}", relative, e);
        })
    }

    /// Run one pass of the engine over this fixture.
    pub fn run_pass(&self, logger: &dyn MirrorLogger) -> mirror_core::Result<()> {
        run_pass(&self.source, &self.replica, logger)
    }

    /// Assert that every source entry exists in the replica with the same
    /// kind (and identical bytes for files), and nothing else does.
    pub fn assert_mirrored(&self) {
        let source = snapshot(&self.source);
        let replica = snapshot(&self.replica);
        assert_eq!(
            source, replica,
            "replica does not mirror source\nsource:  {:?}\nreplica: {:?}",
            source, replica
        );
    }
}

impl Default for MirrorFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_with_parents(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Sorted `(relative path, Some(bytes) for files / None for dirs)` pairs.
fn snapshot(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
    let mut out = Vec::new();
    collect(root, root, &mut out);
    out.sort();
    out
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<(String, Option<Vec<u8>>)>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let relative = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            out.push((relative, None));
            collect(root, &path, out);
        } else {
            out.push((relative, Some(fs::read(&path).unwrap())));
        }
    }
}
