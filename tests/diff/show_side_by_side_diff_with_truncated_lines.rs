use crate::common::command::{go_mod_new, go_mod_old, run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_side_by_side_diff_with_truncated_lines(
    workspace_dir: TempDir,
    go_mod_old: String,
    go_mod_new: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("go.mod.orig"), go_mod_old));
    write_file(FileSpec::new(workspace_dir.path().join("go.mod"), go_mod_new));

    let assert = run_linediff_command(
        workspace_dir.path(),
        &[
            "--layout",
            "side-by-side",
            "--width",
            "43",
            "--line-numbers",
            "go.mod.orig",
            "go.mod",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("…"))
    .stdout(predicate::str::contains(" | "))
    .stdout(predicate::str::contains(" > "));

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let body = stdout.lines().skip(2).collect::<Vec<_>>();

    // 2 header lines, then one row per edit
    pretty_assertions::assert_eq!(body.len(), 9);
    pretty_assertions::assert_eq!(body[2], "   3 go 1.22         |    3 go 1.23");
    assert!(body.iter().all(|row| row.chars().count() <= 43));

    Ok(())
}
