//! End-to-end drill tests driving the binary through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memverse(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("memverse").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("MEMVERSE_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn drill_stdout(dir: &TempDir, args: &[&str], stdin: &str) -> String {
    let output = memverse(dir)
        .arg("drill")
        .args(args)
        .write_stdin(stdin)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "drill failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn auto_drill_hides_everything() {
    let dir = TempDir::new().unwrap();
    memverse(&dir)
        .args(["drill", "--reference", "X:1-3", "--text", "a b c", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a b c\nX:1-3"))
        .stdout(predicate::str::contains("____ ____ ____\nX:1-3"))
        .stdout(predicate::str::contains("All words hidden."));
}

#[test]
fn prompts_for_reference_and_text() {
    let dir = TempDir::new().unwrap();
    let out = drill_stdout(
        &dir,
        &["--seed", "1"],
        "John 3:16\nFor God so loved the world\nquit\n",
    );
    assert!(out.contains("Enter scripture reference:"));
    assert!(out.contains("Enter scripture text:"));
    assert!(out.contains("For God so loved the world\nJohn 3:16-16"));
    assert!(out.contains("Press Enter to continue or type 'quit' to end."));
    assert!(!out.contains("All words hidden."));
}

#[test]
fn enter_hides_words_until_done() {
    let dir = TempDir::new().unwrap();
    let stdin = "\n".repeat(500);
    let out = drill_stdout(
        &dir,
        &["--reference", "Alma 32:21", "--text", "Faith is not", "--seed", "9"],
        &stdin,
    );
    assert!(out.contains("Faith is not\nAlma 32:21-21"));
    assert!(out.contains("____ ____ ____\nAlma 32:21-21"));
    assert!(out.ends_with("All words hidden.\n"));
}

#[test]
fn same_seed_same_drill() {
    let dir = TempDir::new().unwrap();
    let args = [
        "--reference",
        "X:1",
        "--text",
        "one two three four five six",
        "--seed",
        "42",
        "--auto",
    ];
    assert_eq!(drill_stdout(&dir, &args, ""), drill_stdout(&dir, &args, ""));
}

#[test]
fn empty_text_completes_immediately() {
    let dir = TempDir::new().unwrap();
    let out = drill_stdout(&dir, &["--reference", "Y:5", "--text", ""], "");
    assert_eq!(out, "Y:5-5\n\nAll words hidden.\n");
}

#[test]
fn bad_reference_fails() {
    let dir = TempDir::new().unwrap();
    memverse(&dir)
        .args(["drill", "--reference", "Bad", "--text", "one two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: missing ':'"));
}

#[test]
fn non_numeric_verse_fails() {
    let dir = TempDir::new().unwrap();
    memverse(&dir)
        .args(["drill", "--reference", "John 3:x", "--text", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid verse number 'x'"));
}

#[test]
fn drill_passage_from_library() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lib.toml"),
        r#"
[library]
id = "lib"
name = "Lib"

[[passages]]
id = "moroni"
reference = "Moroni 10:4-5"
text = "ask God"
"#,
    )
    .unwrap();

    let out = drill_stdout(
        &dir,
        &["--passage", "moroni", "--library", "lib.toml", "--auto", "--seed", "3"],
        "",
    );
    assert!(out.contains("ask God\nMoroni 10:4-5"));
    assert!(out.contains("All words hidden."));
}

#[test]
fn unknown_passage_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lib.toml"),
        "[library]\nid = \"lib\"\nname = \"Lib\"\n",
    )
    .unwrap();

    memverse(&dir)
        .args(["drill", "--passage", "missing", "--library", "lib.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("passage 'missing' not found"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("memverse.toml"), "words_per_step = 0\n").unwrap();

    memverse(&dir)
        .args(["drill", "--reference", "X:1", "--text", "a", "--auto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("words_per_step must be at least 1"));
}

#[test]
fn rust_log_enables_session_debug_events() {
    let dir = TempDir::new().unwrap();
    memverse(&dir)
        .env("RUST_LOG", "memverse=debug")
        .args(["drill", "--reference", "X:1", "--text", "a b", "--auto", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created masking session"))
        .stderr(predicate::str::contains("passage fully hidden"));
}

#[test]
fn debug_events_are_off_by_default() {
    let dir = TempDir::new().unwrap();
    memverse(&dir)
        .args(["drill", "--reference", "X:1", "--text", "a b", "--auto", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created masking session").not());
}
