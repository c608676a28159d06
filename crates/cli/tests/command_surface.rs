//! Tests for the command-line surface, run against in-memory buffers.

use std::fs;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = cli::run(args.iter().copied(), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout utf8"),
        String::from_utf8(stderr).expect("stderr utf8"),
    )
}

#[test]
fn help_prints_usage_without_walking() {
    let (code, stdout, stderr) = run(&["recopy", "--help"]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--no-clipboard"));
    assert!(stderr.is_empty());
}

#[test]
fn version_prints_and_exits() {
    let (code, stdout, stderr) = run(&["recopy", "--version"]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    assert!(stderr.is_empty());
}

#[test]
fn unknown_flag_is_an_argument_error() {
    let (code, _stdout, stderr) = run(&["recopy", "--bogus"]);
    assert_eq!(code, cli::EXIT_FAILURE);
    assert!(!stderr.is_empty());
}

#[test]
fn missing_root_is_a_fatal_error() {
    let (code, stdout, stderr) = run(&["recopy", "--no-clipboard", "/no/such/directory"]);
    assert_eq!(code, cli::EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("does not exist"));
}

#[test]
fn no_clipboard_prints_report_to_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("a.txt"), "alpha\n").expect("write");
    fs::write(temp.path().join("b.txt"), "beta\n").expect("write");

    let (code, stdout, stderr) = run(&[
        "recopy",
        "--no-clipboard",
        temp.path().to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(
        stdout,
        "filepath: a.txt\nalpha\n\nfilepath: b.txt\nbeta\n\n"
    );
    assert!(stderr.is_empty());
}

#[test]
fn skipped_entries_are_summarised_after_delivery() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("blob.bin"), b"a\x00b").expect("write");
    fs::write(temp.path().join("kept.txt"), "text\n").expect("write");

    let (code, stdout, stderr) = run(&[
        "recopy",
        "--no-clipboard",
        temp.path().to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.starts_with("filepath: kept.txt\n"));
    assert!(stderr.contains("skipped 1 entries"));
    assert!(stderr.contains("blob.bin"));
}

#[test]
fn stats_flag_prints_category_totals() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("blob.bin"), b"a\x00b").expect("write");
    fs::write(temp.path().join("kept.txt"), "text\n").expect("write");

    let (code, _stdout, stderr) = run(&[
        "recopy",
        "--no-clipboard",
        "--stats",
        temp.path().to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stderr.contains("files collected: 1"));
    assert!(stderr.contains("entries skipped: 1"));
    assert!(stderr.contains("binary: 1"));
}

#[test]
fn ignore_file_flag_selects_rule_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".customignore"), "*.log\n").expect("write");
    fs::write(temp.path().join("run.log"), "log\n").expect("write");
    fs::write(temp.path().join("kept.txt"), "text\n").expect("write");

    let (code, stdout, _stderr) = run(&[
        "recopy",
        "--no-clipboard",
        "--ignore-file",
        ".customignore",
        temp.path().to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.contains("filepath: kept.txt"));
    assert!(!stdout.contains("run.log"));
}

#[test]
fn skip_empty_flag_drops_blank_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("blank.txt"), "  \n").expect("write");
    fs::write(temp.path().join("kept.txt"), "text\n").expect("write");

    let (code, stdout, _stderr) = run(&[
        "recopy",
        "--no-clipboard",
        "--skip-empty",
        temp.path().to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.contains("filepath: kept.txt"));
    assert!(!stdout.contains("blank.txt"));
}
