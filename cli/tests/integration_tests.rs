//! Integration tests for the bookstore binary.
//!
//! Each test drives the compiled binary with a scripted stdin menu session
//! against a temp-directory database file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Helper to create a temp directory that is cleaned up on drop.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("bookstore_cli_test_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    fn db_path(&self) -> PathBuf {
        self.path.join("ebookstore.db")
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Runs the bookstore binary with the given stdin script and extra args.
fn run_session(db: &Path, script: &str, extra_args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bookstore"))
        .arg("--db")
        .arg(db)
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run bookstore");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(script.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for bookstore")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn exits_cleanly_on_zero() {
    let dir = TempDir::new("exit");
    let output = run_session(&dir.db_path(), "0\n", &[]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("Welcome to the Bookstore"));
    assert!(out.contains("0. Exit"));
}

#[test]
fn startup_reports_catalog_status() {
    let dir = TempDir::new("status");
    let db = dir.db_path();

    let output = run_session(&db, "1\nDune\nFrank Herbert\n5\n0\n", &[]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Catalog ready: 5 books on file."));

    // Second startup sees the inserted book in the count.
    let output = run_session(&db, "0\n", &[]);
    assert!(stdout_of(&output).contains("Catalog ready: 6 books on file."));
}

#[test]
fn first_run_seeds_catalog() {
    let dir = TempDir::new("seed");
    let output = run_session(&dir.db_path(), "4\nLewis\n0\n", &[]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("C.S. Lewis"));
    assert!(out.contains("Lewis Carroll"));
}

#[test]
fn add_then_search_in_one_session() {
    let dir = TempDir::new("add_search");
    let script = "1\nDune\nFrank Herbert\n5\n4\nDune\n0\n";
    let output = run_session(&dir.db_path(), script, &[]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("Book added successfully!"));
    assert!(out.contains("Frank Herbert"));
}

#[test]
fn records_persist_across_sessions_without_reseeding() {
    let dir = TempDir::new("persist");
    let db = dir.db_path();

    let output = run_session(&db, "1\nDune\nFrank Herbert\n5\n0\n", &[]);
    assert!(output.status.success());

    // Second session: the inserted book is still there, and searching the
    // whole catalog shows no duplicated seed rows.
    let output = run_session(&db, "4\nDune\n4\nTale of Two\n0\n", &[]);
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("Frank Herbert"));
    assert_eq!(out.matches("A Tale of Two Cities").count(), 1);
}

#[test]
fn bad_quantity_is_rejected_before_the_store() {
    let dir = TempDir::new("bad_quantity");
    let script = "1\nGhost Book\nNobody\nabc\n4\nGhost\n0\n";
    let output = run_session(&dir.db_path(), script, &[]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("Invalid quantity 'abc'"));
    assert!(out.contains("No books found."));
}

#[test]
fn update_and_delete_missing_ids_are_soft() {
    let dir = TempDir::new("soft_missing");
    let script = "2\n9999\nNew Title\n\n\n3\n9999\n0\n";
    let output = run_session(&dir.db_path(), script, &[]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert_eq!(out.matches("No book with id 9999.").count(), 2);
}

#[test]
fn update_changes_only_supplied_fields() {
    let dir = TempDir::new("partial_update");
    let db = dir.db_path();

    let output = run_session(&db, "2\n3001\n\n\n31\n0\n", &[]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Book updated successfully!"));

    let output = run_session(&db, "4\nTale of Two\n0\n", &[]);
    let out = stdout_of(&output);
    assert!(out.contains("A Tale of Two Cities"));
    assert!(out.contains("31"));
}

#[test]
fn json_format_outputs_serialized_records() {
    let dir = TempDir::new("json");
    let output = run_session(&dir.db_path(), "4\nLewis\n0\n", &["--format", "json"]);

    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("\"id\": 3003"));
    assert!(out.contains("\"quantity\": 12"));
}

#[test]
fn invalid_menu_choice_returns_to_menu() {
    let dir = TempDir::new("bad_choice");
    let output = run_session(&dir.db_path(), "9\n0\n", &[]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Invalid choice. Please enter a valid option."));
}
