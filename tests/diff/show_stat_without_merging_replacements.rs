use crate::common::command::{go_mod_new, go_mod_old, run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_stat_without_merging_replacements(
    workspace_dir: TempDir,
    go_mod_old: String,
    go_mod_new: String,
) {
    write_file(FileSpec::new(workspace_dir.path().join("go.mod.orig"), go_mod_old));
    write_file(FileSpec::new(workspace_dir.path().join("go.mod"), go_mod_new));

    run_linediff_command(
        workspace_dir.path(),
        &["--no-merge", "--stat", "go.mod.orig", "go.mod"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "equal: 6, insert: 3, delete: 2, replace: 0",
    ))
    .stdout(predicate::str::contains("-go 1.22"))
    .stdout(predicate::str::contains("+go 1.23"));
}
