//! Tests for error handling under adverse filesystem conditions
//!
//! These tests verify that mirror-fs surfaces real error conditions with the
//! offending path attached.

use mirror_fs::{Error, checksum, io, walk};
use std::fs;
use tempfile::tempdir;

#[test]
fn checksum_of_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(checksum::compute_file_checksum(dir.path()).is_err());
}

#[test]
fn remove_missing_file_reports_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghost.txt");

    let err = io::remove_file(&path).unwrap_err();

    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(matches!(err, Error::Io { path: ref p, .. } if p == &path));
}

#[test]
fn walk_error_converts_into_fs_error() {
    let dir = tempdir().unwrap();
    let walk_err = walk(dir.path().join("missing"))
        .next()
        .unwrap()
        .unwrap_err();

    let err: Error = walk_err.into();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(err.to_string().contains("missing"));
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn checksum_permission_denied_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("secret.txt");
        fs::write(&file_path, "secret content").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let result = checksum::compute_file_checksum(&file_path);

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        assert_eq!(
            result.unwrap_err().kind(),
            std::io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn copy_into_readonly_directory_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let src = dir.path().join("new.txt");
        fs::write(&src, "new content").unwrap();
        let parent = dir.path().join("parent");
        fs::create_dir(&parent).unwrap();
        let dst = parent.join("existing.txt");
        fs::write(&dst, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io::copy_file(&src, &dst);

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err(), "Copy into read-only directory should fail");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "original");
    }

    #[test]
    fn unreadable_subdirectory_yields_nested_walk_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside.txt"), "x").unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let results: Vec<_> = walk(dir.path()).collect();

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));

        let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_root());
        assert_eq!(errors[0].kind(), std::io::ErrorKind::PermissionDenied);
    }
}
