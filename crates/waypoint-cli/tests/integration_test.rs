//! Integration tests checking that CLI output is the core Display output.

use std::process::Command;

use jiff::Timestamp;
use tempfile::TempDir;
use waypoint_core::{
    models::{PlanHistoryEntry, PlanItem, TimeUnit},
    HistoryEntries, PlanHistory, SqliteStore,
};

/// Stores `count` entries directly in a fresh database.
fn seed_history(temp_dir: &TempDir, count: usize) -> (String, Vec<PlanHistoryEntry>) {
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::open(&db_path).expect("Failed to open store");

    let mut history = PlanHistory::new();
    for i in 0..count {
        let created_at = Timestamp::from_second(1_700_000_000 + i as i64).unwrap();
        history.record(PlanHistoryEntry::new(
            format!("Role {i}"),
            1,
            TimeUnit::Week,
            vec![PlanItem {
                index: Some(1),
                title: "Orientation".to_string(),
                skills: vec!["Networking".to_string()],
                ..Default::default()
            }],
            created_at,
        ));
    }
    assert!(history.persist(&store));

    (
        db_path.to_str().unwrap().to_string(),
        history.entries().to_vec(),
    )
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_waypoint"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "command failed: {args:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_show_matches_entry_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, entries) = seed_history(&temp_dir, 2);

    let id = entries[1].id.to_string();
    let output = run_cli_command(&db_path, &["show", &id]);
    assert_eq!(output, entries[1].to_string());
    assert!(output.contains("### Week 1: Orientation"));
}

#[test]
fn test_history_lists_six_most_recent() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let (db_path, entries) = seed_history(&temp_dir, 8);

    let output = run_cli_command(&db_path, &["history"]);
    let expected = HistoryEntries(entries[..6].to_vec()).to_string();
    assert_eq!(output, format!("# Recent Plans\n\n{expected}"));
    assert!(output.contains("Role 7"));
    assert!(!output.contains("Role 1 "));

    let all = run_cli_command(&db_path, &["history", "--all"]);
    assert!(all.contains("Role 0"));
}
