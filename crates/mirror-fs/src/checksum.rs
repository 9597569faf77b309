//! SHA-256 content digests
//!
//! Produces a single canonical checksum format (`sha256:<hex>`) used by the
//! mirror engine to decide whether a replica file differs from its source.
//! Files are streamed through the hasher in fixed-size chunks so memory use
//! does not grow with file size.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::{Error, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Read buffer size used when hashing files.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 checksum of in-memory content.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn compute_content_checksum(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    compute_reader_checksum(file)
}

/// Compute the SHA-256 checksum of everything a reader yields.
pub fn compute_reader_checksum(mut reader: impl Read) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}

/// Whether two files have identical content digests.
///
/// `left` is read first.
///
/// # Errors
///
/// Returns [`Error::Io`] for the first file that cannot be read, carrying
/// that file's path.
pub fn files_match(left: &Path, right: &Path) -> Result<bool> {
    let left_digest = compute_file_checksum(left).map_err(|e| Error::io(left, e))?;
    let right_digest = compute_file_checksum(right).map_err(|e| Error::io(right, e))?;
    Ok(left_digest == right_digest)
}
