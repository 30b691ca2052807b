//! Integration tests for dirtally


use assert_cmd::Command;
use dirtally::{DirectoryWalker, NO_EXTENSION, WalkerConfig};
use harness::{TestTree, run_dirtally, run_json};
use predicates::prelude::*;

#[test]
fn test_basic_detailed_output() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("b.TXT", "b");
    tree.add_file("sub/c.md", "c");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &[]);
    assert!(success, "dirtally should succeed");
    assert!(stdout.contains("[level 0]"), "should show root block: {}", stdout);
    assert!(stdout.contains("[level 1]"), "should show sub block: {}", stdout);
    assert!(stdout.contains("total files: 3"), "{}", stdout);
    assert!(stdout.contains(".txt: 2"), "{}", stdout);
    assert!(stdout.contains("Scanned 2 directories"), "{}", stdout);
}

#[test]
fn test_json_totals() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("b.TXT", "b");
    tree.add_file("sub/c.md", "c");

    let json = run_json(tree.path(), &[]);
    assert_eq!(json["total_files"], 3);
    assert_eq!(json["file_types"][".txt"], 2);
    assert_eq!(json["file_types"][".md"], 1);
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["nodes"][0]["level"], 0);
    assert_eq!(json["nodes"][1]["level"], 1);
    assert_eq!(json["nodes"][1]["parent"], 0);
}

#[test]
fn test_hidden_entries_skipped_by_default() {
    let tree = TestTree::new();
    tree.add_file(".env", "SECRET=1");
    tree.add_file("a.txt", "a");

    let json = run_json(tree.path(), &[]);
    assert_eq!(json["total_files"], 1);
    assert_eq!(json["file_types"].as_object().unwrap().len(), 1);

    let json = run_json(tree.path(), &["-a"]);
    assert_eq!(json["total_files"], 2);
    assert_eq!(json["file_types"][".txt"], 1);
    assert_eq!(json["file_types"][NO_EXTENSION], 1);
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "");
    tree.add_file("level1/mid.rs", "");
    tree.add_file("level1/level2/deep.rs", "");

    let json = run_json(tree.path(), &["-L", "1"]);
    assert_eq!(json["total_files"], 2);
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["nodes"][1]["folders"][0], "level2");

    let json = run_json(tree.path(), &["-L", "0"]);
    assert_eq!(json["node_count"], 1);
    assert_eq!(json["total_files"], 1);
}

#[test]
fn test_summary_verbosity() {
    let tree = TestTree::new();
    tree.add_file("x/y.json", "{}");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["--verbosity", "summary"]);
    assert!(success);
    assert!(!stdout.contains("[level"), "summary should skip nodes: {}", stdout);
    assert!(stdout.contains("total files: 1"));
}

#[test]
fn test_quiet_prints_nothing() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["-q"]);
    assert!(success);
    assert!(stdout.is_empty(), "quiet should print nothing: {}", stdout);
}

#[test]
fn test_quick_scan() {
    let tree = TestTree::new();
    tree.add_file("a.py", "");
    tree.add_file("B.PY", "");
    tree.add_file("pkg/inner.py", "");

    let json = run_json(tree.path(), &["--quick"]);
    assert_eq!(json["folder_count"], 1);
    assert_eq!(json["file_count"], 2);
    assert_eq!(json["file_types"][".py"], 2);

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["--quick"]);
    assert!(success);
    assert!(stdout.contains("folders: 1"));
    assert!(stdout.contains(".py: 2"));
}

#[test]
fn test_structure_output() {
    let tree = TestTree::new();
    tree.add_file("README", "");
    tree.add_file("src/lib.rs", "");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["--structure"]);
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["level"], 0);
    assert_eq!(json["files"][0]["name"], "README");
    assert_eq!(json["files"][0]["type"], NO_EXTENSION);
    assert_eq!(json["directories"][0]["name"], "src");
    assert_eq!(json["directories"][0]["files"][0]["type"], ".rs");
}

#[test]
fn test_at_level_filter() {
    let tree = TestTree::new();
    tree.add_file("one/a.txt", "");
    tree.add_file("one/two/b.txt", "");

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["--at-level", "1"]);
    assert!(success);
    assert!(stdout.contains("[level 1]"));
    assert!(!stdout.contains("[level 0]"));
    assert!(!stdout.contains("[level 2]"));
}

#[test]
fn test_at_level_json() {
    let tree = TestTree::new();
    tree.add_file("one/a.txt", "");
    tree.add_file("one/two/b.txt", "");

    let json = run_json(tree.path(), &["--at-level", "1"]);
    let nodes = json.as_array().expect("level slice should be an array");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["level"], 1);
    assert_eq!(nodes[0]["file_count"], 1);
}

#[test]
fn test_at_level_needs_detailed_output() {
    let tree = TestTree::new();
    tree.add_file("one/a.txt", "");

    let (stdout, stderr, success) =
        run_dirtally(tree.path(), &["--at-level", "1", "--verbosity", "summary"]);
    assert!(!success);
    assert!(stdout.is_empty(), "{}", stdout);
    assert!(stderr.contains("--at-level"), "{}", stderr);

    let (_stdout, _stderr, success) = run_dirtally(tree.path(), &["--at-level", "1", "--quick"]);
    assert!(!success, "--at-level and --quick should conflict");
}

#[test]
fn test_json_conflicts_with_quiet() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    for args in [&["--json", "-q"][..], &["--json", "--verbosity", "quiet"][..]] {
        let (stdout, _stderr, success) = run_dirtally(tree.path(), args);
        assert!(!success, "{:?} should be rejected", args);
        assert!(stdout.is_empty(), "{}", stdout);
    }

    let (_stdout, _stderr, success) = run_dirtally(tree.path(), &["--quick", "--json", "-q"]);
    assert!(!success);
}

#[test]
fn test_folder_limit() {
    let tree = TestTree::new();
    for i in 0..7 {
        tree.add_dir(&format!("folder_{}", i));
    }

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["-L", "0"]);
    assert!(success);
    assert!(stdout.contains("... 7 folders"), "{}", stdout);

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["-L", "0", "--folder-limit", "0"]);
    assert!(success);
    assert!(!stdout.contains("... 7 folders"), "{}", stdout);

    let (stdout, _stderr, success) = run_dirtally(tree.path(), &["-L", "0", "--no-folders"]);
    assert!(success);
    assert!(!stdout.contains("folder_3"), "{}", stdout);
}

#[test]
fn test_progress_flag_still_reports() {
    let tree = TestTree::new();
    tree.populate(2, 2, 2);

    let (stdout, _stderr, success) =
        run_dirtally(tree.path(), &["--progress", "--verbosity", "summary"]);
    assert!(success);
    assert!(stdout.contains("Scanned 7 directories"), "{}", stdout);
    assert!(stdout.contains("total files: 14"), "{}", stdout);
}

#[test]
fn test_cli_missing_root_fails() {
    let tree = TestTree::new();
    Command::cargo_bin("dirtally")
        .unwrap()
        .current_dir(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("dirtally: cannot access"));
}

#[test]
fn test_cli_root_is_file_fails() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "");
    Command::cargo_bin("dirtally")
        .unwrap()
        .current_dir(tree.path())
        .arg("plain.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("dirtally")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dirtally"));
}

#[test]
fn test_library_matches_cli() {
    let tree = TestTree::new();
    tree.populate(3, 2, 4);

    let report = DirectoryWalker::new(WalkerConfig::default())
        .walk(tree.path())
        .unwrap();
    let json = run_json(tree.path(), &[]);

    assert_eq!(json["total_files"], report.total_files());
    assert_eq!(json["node_count"], report.node_count);
    assert_eq!(report.node_count, 1 + 3 + 9);
    assert_eq!(report.total_files(), 13 * 4);
    assert_eq!(report.file_types().total(), report.total_files());
    assert_eq!(report.nodes_at_level(2).len(), 9);
}
