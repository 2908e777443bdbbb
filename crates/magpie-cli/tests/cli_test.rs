//! End-to-end CLI tests
//!
//! Runs the `mag` binary against a temporary vault and checks the written
//! frontmatter and command output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_note(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn seed_vault() -> TempDir {
    let vault = TempDir::new().unwrap();
    write_note(vault.path(), "target.md", "# Weekly review\n");
    write_note(
        vault.path(),
        "notes.md",
        "> [!note] Hi\n> line one\n> line two\n\n> [!warning] Careful\n> risk\n",
    );
    vault
}

fn mag() -> Command {
    Command::cargo_bin("mag").unwrap()
}

#[test]
fn collect_writes_callouts_into_target_frontmatter() {
    let vault = seed_vault();

    mag()
        .args(["collect", "target.md", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Collected 2 callout(s)"));

    let text = std::fs::read_to_string(vault.path().join("target.md")).unwrap();
    assert!(text.starts_with("---\n"));
    assert!(text.contains("callouts:"));
    assert!(text.contains("type: note"));
    assert!(text.contains("title: Hi"));
    assert!(text.contains("content: line one line two"));
    assert!(text.contains("type: warning"));
    assert!(text.contains("fileName: notes.md"));
    assert!(text.ends_with("# Weekly review\n"));
}

#[test]
fn filter_with_explicit_type_writes_only_that_type() {
    let vault = seed_vault();

    mag()
        .args(["filter", "target.md", "--type", "warning", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Collected 1 callout(s)"));

    let text = std::fs::read_to_string(vault.path().join("target.md")).unwrap();
    assert!(text.contains("type: warning"));
    assert!(!text.contains("type: note"));
}

#[test]
fn missing_target_is_a_quiet_success() {
    let vault = seed_vault();

    mag()
        .args(["collect", "no-such-note", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing collected"));

    // The target was never created and the other notes are untouched.
    assert!(!vault.path().join("no-such-note.md").exists());
}

#[test]
fn list_renders_a_table_by_default() {
    let vault = seed_vault();

    mag()
        .args(["list", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("note"))
        .stdout(predicate::str::contains("Careful"));
}

#[test]
fn list_outputs_json_records() {
    let vault = seed_vault();

    mag()
        .args(["list", "--format", "json", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"note\""))
        .stdout(predicate::str::contains("\"content\": \"line one line two\""))
        .stdout(predicate::str::contains("\"filePath\": \"notes.md\""));
}

#[test]
fn list_empty_vault_reports_no_callouts() {
    let vault = TempDir::new().unwrap();
    write_note(vault.path(), "plain.md", "nothing here\n");

    mag()
        .args(["list", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No callouts found"));
}

#[test]
fn raw_flag_keeps_quote_markers() {
    let vault = seed_vault();

    mag()
        .args(["list", "--format", "json", "--raw", "--vault"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("> line one"));
}
