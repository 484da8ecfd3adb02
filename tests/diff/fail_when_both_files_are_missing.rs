use crate::common::command::{run_linediff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_when_both_files_are_missing(workspace_dir: TempDir) {
    run_linediff_command(workspace_dir.path(), &["nope.txt", "neither.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither nope.txt nor neither.txt exists"));
}
