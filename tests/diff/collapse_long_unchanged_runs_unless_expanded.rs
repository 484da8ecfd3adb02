use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

fn numbered_lines(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("entry {i}")).collect()
}

#[rstest]
fn collapse_long_unchanged_runs_unless_expanded(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = numbered_lines(20);
    let mut new = old.clone();
    new.push("entry 21".to_string());

    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), old.join("\n")));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), new.join("\n")));

    run_linediff_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .success()
        .stdout("--- a/old.txt\n+++ b/new.txt\n@@ 20 unchanged lines @@\n+entry 21\n");

    run_linediff_command(workspace_dir.path(), &["-U", "1", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " entry 1\n@@ 18 unchanged lines @@\n entry 20\n+entry 21",
        ));

    let expanded = run_linediff_command(workspace_dir.path(), &["--expanded", "old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = String::from_utf8(expanded.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout.lines().count(), 2 + 21);
    assert!(!stdout.contains("unchanged lines"));

    Ok(())
}
