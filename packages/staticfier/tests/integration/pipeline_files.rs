//! Batch runs over a project tree on disk

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::*;
use pretty_assertions::assert_eq;
use staticfier::config::StaticfierConfig;
use staticfier::pipeline::{collect_files, process_paths, write_changes, FileStatus};
use tempfile::TempDir;

const BROKEN: &str = "class Broken { private int f( { return 1; } }\n";
const GENERATED: &str = "class Generated { private int one() { return 1; } }\n";

/// A small Maven-style project:
///
/// ```text
/// src/main/java/shop/Inventory.java   two conversions
/// src/main/java/shop/Plain.java       nothing to convert
/// src/main/java/shop/Broken.java      does not parse
/// src/main/java/shop/README.md        not Java
/// target/generated/Generated.java     excluded directory
/// ```
fn fixture_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pkg = dir.path().join("src/main/java/shop");
    fs::create_dir_all(&pkg).unwrap();
    fs::create_dir_all(dir.path().join("target/generated")).unwrap();

    fs::write(pkg.join("Inventory.java"), fixture_inventory()).unwrap();
    fs::write(
        pkg.join("Plain.java"),
        fixture_class("Plain", &["int n;", "private int get() { return n; }"]),
    )
    .unwrap();
    fs::write(pkg.join("Broken.java"), BROKEN).unwrap();
    fs::write(pkg.join("README.md"), "# shop\n").unwrap();
    fs::write(dir.path().join("target/generated/Generated.java"), GENERATED).unwrap();
    dir
}

fn shop(dir: &TempDir, file: &str) -> PathBuf {
    dir.path().join("src/main/java/shop").join(file)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn sequential() -> StaticfierConfig {
    StaticfierConfig::default().parallel(false)
}

// ═══════════════════════════════════════════════════════════════════════════
// Discovery
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_collects_java_files_outside_excluded_dirs() {
    let dir = fixture_project();
    let files = collect_files(&[dir.path().to_path_buf()], &sequential());
    assert_eq!(
        files,
        vec![
            shop(&dir, "Broken.java"),
            shop(&dir, "Inventory.java"),
            shop(&dir, "Plain.java"),
        ]
    );
}

#[test]
fn test_excluding_nothing_reaches_target() {
    let dir = fixture_project();
    let mut config = sequential();
    config.exclude_dirs.clear();
    let files = collect_files(&[dir.path().to_path_buf()], &config);
    assert!(files.contains(&dir.path().join("target/generated/Generated.java")));
}

// ═══════════════════════════════════════════════════════════════════════════
// Processing and writing
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_report_per_file() {
    let dir = fixture_project();
    let report = process_paths(&[dir.path().to_path_buf()], &sequential());

    let statuses: Vec<(PathBuf, FileStatus)> = report
        .files
        .iter()
        .map(|f| (f.path.clone(), f.status.clone()))
        .collect();
    assert_eq!(statuses.len(), 3);
    assert!(matches!(statuses[0].1, FileStatus::Skipped { .. }));
    assert_eq!(statuses[1], (shop(&dir, "Inventory.java"), FileStatus::Changed));
    assert_eq!(statuses[2], (shop(&dir, "Plain.java"), FileStatus::Unchanged));

    let totals = &report.totals;
    assert_eq!(totals.files_scanned, 3);
    assert_eq!(totals.files_changed, 1);
    assert_eq!(totals.files_skipped, 1);
    assert_eq!(totals.files_failed, 0);
    assert_eq!(totals.methods_converted, 2);
    assert!(report.has_changes());
}

#[test]
fn test_nothing_written_until_asked() {
    let dir = fixture_project();
    let inventory = shop(&dir, "Inventory.java");
    let report = process_paths(&[dir.path().to_path_buf()], &sequential());
    assert_eq!(read(&inventory), fixture_inventory());

    assert_eq!(write_changes(&report).unwrap(), 1);
    let written = read(&inventory);
    assert!(written.contains("private static boolean isValid(String item)"));
    assert!(written.contains("private static String normalize(String item)"));
    assert!(written.contains("private int nextVersion()"));
}

#[test]
fn test_unparseable_and_unchanged_files_stay_on_disk() {
    let dir = fixture_project();
    let plain_before = read(&shop(&dir, "Plain.java"));
    let report = process_paths(&[dir.path().to_path_buf()], &sequential());
    write_changes(&report).unwrap();

    assert_eq!(read(&shop(&dir, "Broken.java")), BROKEN);
    assert_eq!(read(&shop(&dir, "Plain.java")), plain_before);
    assert_eq!(read(&dir.path().join("target/generated/Generated.java")), GENERATED);
}

#[test]
fn test_second_batch_run_changes_nothing() {
    let dir = fixture_project();
    let first = process_paths(&[dir.path().to_path_buf()], &sequential());
    write_changes(&first).unwrap();

    let second = process_paths(&[dir.path().to_path_buf()], &sequential());
    assert!(!second.has_changes());
    assert_eq!(second.totals.methods_converted, 0);
    assert_eq!(write_changes(&second).unwrap(), 0);
}

#[test]
fn test_size_limit() {
    let dir = fixture_project();
    let big = fixture_class("Big", &["private int one() { return 1; }"])
        + &"// padding\n".repeat(200);
    let big_path = shop(&dir, "Big.java");
    fs::write(&big_path, &big).unwrap();

    let config = sequential().max_file_bytes(1024);
    let report = process_paths(&[big_path.clone()], &config);
    assert_eq!(report.totals.files_skipped, 1);
    match &report.files[0].status {
        FileStatus::Skipped { reason } => assert!(reason.contains("1024 byte limit")),
        other => panic!("expected skipped, got {other:?}"),
    }
    write_changes(&report).unwrap();
    assert_eq!(read(&big_path), big);
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = fixture_project();
    for i in 0..8 {
        fs::write(
            shop(&dir, &format!("Gen{i}.java")),
            fixture_class(
                &format!("Gen{i}"),
                &["int n;", "private int a() { return 1; }", "private int b() { return n; }"],
            ),
        )
        .unwrap();
    }
    let paths = [dir.path().to_path_buf()];

    let serial = process_paths(&paths, &sequential());
    let parallel = process_paths(&paths, &StaticfierConfig::default().threads(4));

    assert_eq!(serial.totals, parallel.totals);
    assert_eq!(serial.to_json().unwrap(), parallel.to_json().unwrap());
    assert_eq!(parallel.totals.methods_converted, 2 + 8);
}

// ═══════════════════════════════════════════════════════════════════════════
// Report and configuration files
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_json_report() {
    let dir = fixture_project();
    let report = process_paths(&[dir.path().to_path_buf()], &sequential());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["totals"]["files_changed"], 1);
    assert_eq!(json["totals"]["methods_converted"], 2);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files[0]["status"], "skipped");
    assert_eq!(files[1]["status"], "changed");
    assert_eq!(files[1]["converted"][0]["method"], "isValid");
    assert_eq!(files[1]["converted"][0]["after"], "private static");
    assert_eq!(files[2]["status"], "unchanged");
    assert!(files[2].get("converted").is_none());
    assert!(files[1].get("output").is_none());
}

#[test]
fn test_yaml_config_drives_the_run() {
    let dir = fixture_project();
    fs::write(
        shop(&dir, "Chain.java"),
        fixture_class(
            "Chain",
            &[
                "private int helper() { return 1; }",
                "private int caller() { return helper() + 1; }",
                "private synchronized int locked() { return 2; }",
            ],
        ),
    )
    .unwrap();
    let config_path = dir.path().join("staticfier.yaml");
    fs::write(
        &config_path,
        "version: 1\nreject_synchronized: false\nmax_passes: 3\nparallel: false\n",
    )
    .unwrap();

    let config = StaticfierConfig::from_file(&config_path).unwrap();
    let report = process_paths(&[shop(&dir, "Chain.java")], &config);
    let file = &report.files[0];
    let converted: Vec<(&str, usize)> = file
        .converted
        .iter()
        .map(|c| (c.method.as_str(), c.pass))
        .collect();
    assert_eq!(converted, vec![("helper", 1), ("locked", 1), ("caller", 2)]);
    assert_eq!(file.rejected, 0);
}
