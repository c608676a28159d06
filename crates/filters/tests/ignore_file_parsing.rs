//! Tests for reading ignore files from disk and feeding them into rule sets.

use filters::{IGNORE_FILE_NAME, IgnoreRule, RuleSet, read_rules};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn default_ignore_file_name_is_stable() {
    assert_eq!(IGNORE_FILE_NAME, "recopy.ignore");
}

#[test]
fn file_rules_compose_with_parent_set() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join(IGNORE_FILE_NAME);
    fs::write(&path, "# local overrides\n!keep.tmp\n").expect("write ignore file");

    let (root, _) = RuleSet::new().extended(Path::new(""), [IgnoreRule::exclude("*.tmp")]);
    let local = read_rules(&path).expect("read rules");
    let (child, skipped) = root.extended(Path::new("sub"), local);

    assert!(skipped.is_empty());
    assert!(!child.is_excluded(Path::new("sub/keep.tmp"), false));
    assert!(child.is_excluded(Path::new("sub/other.tmp"), false));
}

#[test]
fn malformed_lines_are_dropped_and_reported() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join(IGNORE_FILE_NAME);
    fs::write(&path, "*.tmp\n[\n!keep.tmp\n").expect("write ignore file");

    let local = read_rules(&path).expect("read rules");
    let (set, skipped) = RuleSet::new().extended(Path::new(""), local);

    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].pattern(), "[");
    // the surviving rules still apply in order
    assert!(set.is_excluded(Path::new("scratch.tmp"), false));
    assert!(!set.is_excluded(Path::new("keep.tmp"), false));
}

#[test]
fn unreadable_file_is_an_error_not_a_panic() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("no-such.ignore");

    let error = read_rules(&missing).expect_err("missing ignore file");
    assert_eq!(error.path(), missing);
}
