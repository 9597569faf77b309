//! Multi-pass scenarios: a source tree evolves between passes and the replica
//! must follow it exactly.

use mirror_core::{MirrorEngine, run_pass};
use mirror_fs::{EntryKind, walk};
use mirror_test_utils::{Level, MirrorFixture, RecordingLogger};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn source_evolution_over_several_passes() {
    let fixture = MirrorFixture::standard();
    let engine = MirrorEngine::new(fixture.source(), fixture.replica());
    let logger = RecordingLogger::new();

    // (a) initial copy
    engine.run_pass(&logger).unwrap();
    assert_eq!(fixture.read_replica("file1.txt"), "This is file 1");

    // (b) update
    fixture.write_source("file1.txt", "Updated content for file 1");
    logger.clear();
    engine.run_pass(&logger).unwrap();
    assert_eq!(
        fixture.read_replica("file1.txt"),
        "Updated content for file 1"
    );
    assert_eq!(logger.count("Updated"), 1);

    // (c) delete
    fixture.remove_source("file2.txt");
    logger.clear();
    engine.run_pass(&logger).unwrap();
    assert!(!fixture.replica_path("file2.txt").exists());
    assert_eq!(logger.count("Removed"), 1);

    // New nested content plus a directory rename
    fixture.write_source("subdir/new/deeper.txt", "fresh");
    fs::rename(fixture.source_path("subdir"), fixture.source_path("renamed")).unwrap();
    logger.clear();
    engine.run_pass(&logger).unwrap();
    assert!(!fixture.replica_path("subdir").exists());
    assert_eq!(fixture.read_replica("renamed/new/deeper.txt"), "fresh");
    fixture.assert_mirrored();

    // Idempotence
    logger.clear();
    engine.run_pass(&logger).unwrap();
    assert!(logger.is_empty(), "unexpected lines: {:?}", logger.lines());
}

#[test]
fn conflicting_replica_content_is_overwritten() {
    // (d)
    let fixture = MirrorFixture::standard();
    fixture.write_source("conflict.txt", "Source content");
    fixture.write_replica("conflict.txt", "Replica content");

    run_pass(fixture.source(), fixture.replica(), &RecordingLogger::new()).unwrap();

    assert_eq!(fixture.read_replica("conflict.txt"), "Source content");
}

#[test]
fn every_log_line_uses_the_fixed_vocabulary() {
    let fixture = MirrorFixture::standard();
    fixture.write_replica("orphan/x.txt", "x");
    let logger = RecordingLogger::new();

    fixture.run_pass(&logger).unwrap();

    for (level, message) in logger.lines() {
        let known = match level {
            Level::Info => ["Created \"", "Updated \"", "Removed \""]
                .iter()
                .any(|p| message.starts_with(p)),
            Level::Warning => message.starts_with("Skipped"),
        };
        assert!(known, "unexpected {level:?} line: {message}");
    }
    assert_eq!(logger.count("Removed"), 2);
}

#[test]
fn generated_tree_mirrors_exactly() {
    let fixture = MirrorFixture::new();

    // A deterministic tree: 6 directories, each with files of varied sizes,
    // some nested two levels down, plus empty directories.
    for d in 0..6 {
        for f in 0..5 {
            let size = (d * 7 + f * 13) * 97;
            let content: Vec<u8> = (0..size).map(|i| ((i * 31 + d) % 256) as u8).collect();
            fixture.write_source(&format!("dir{d}/file{f}.bin"), &content);
        }
        fixture.write_source(&format!("dir{d}/inner/leaf.txt"), format!("leaf {d}"));
        fixture.mkdir_source(&format!("dir{d}/empty"));
    }
    // Replica starts with partially overlapping junk
    fixture.write_replica("dir0/file0.bin", "stale");
    fixture.write_replica("dir9/ghost.txt", "ghost");
    fixture.write_replica("dir1/inner", "file where a directory belongs");

    let logger = RecordingLogger::new();
    fixture.run_pass(&logger).unwrap();

    fixture.assert_mirrored();
    assert!(logger.warnings().is_empty(), "{:?}", logger.warnings());

    let directories = walk(fixture.replica())
        .map(Result::unwrap)
        .filter(|e| e.kind() == EntryKind::Directory)
        .count();
    assert_eq!(directories, 18);

    logger.clear();
    fixture.run_pass(&logger).unwrap();
    assert!(logger.is_empty());
}

#[test]
fn replica_is_recreated_if_deleted_between_passes() {
    let fixture = MirrorFixture::standard();
    fixture.run_pass(&RecordingLogger::new()).unwrap();

    fs::remove_dir_all(fixture.replica()).unwrap();
    let logger = RecordingLogger::new();
    fixture.run_pass(&logger).unwrap();

    fixture.assert_mirrored();
    assert!(logger.infos()[0].starts_with("Created \""));
}
