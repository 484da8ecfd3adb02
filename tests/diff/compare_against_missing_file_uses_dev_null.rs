use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_against_missing_file_uses_dev_null(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("CHANGELOG.md"),
        "# Changelog\n\n## v1.1.0\n".to_string(),
    ));

    run_linediff_command(workspace_dir.path(), &["missing.md", "CHANGELOG.md"])
        .assert()
        .success()
        .stdout("--- /dev/null\n+++ b/CHANGELOG.md\n+# Changelog\n+\n+## v1.1.0\n");

    run_linediff_command(workspace_dir.path(), &["CHANGELOG.md", "missing.md"])
        .assert()
        .success()
        .stdout("--- a/CHANGELOG.md\n+++ /dev/null\n-# Changelog\n-\n-## v1.1.0\n");
}
