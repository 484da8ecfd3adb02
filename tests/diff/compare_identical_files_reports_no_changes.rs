use crate::common::command::{go_mod_old, run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_identical_files_reports_no_changes(workspace_dir: TempDir, go_mod_old: String) {
    write_file(FileSpec::new(workspace_dir.path().join("a.mod"), go_mod_old.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("b.mod"), go_mod_old));

    run_linediff_command(workspace_dir.path(), &["a.mod", "b.mod"])
        .assert()
        .success()
        .stdout("No changes.\n");
}
