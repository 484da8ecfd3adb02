use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file, write_generated_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn compare_generated_files_with_appended_line(workspace_dir: TempDir) {
    let lines_count = (1..=40).fake::<usize>();
    let mut lines = write_generated_file(&workspace_dir.path().join("before.txt"), lines_count);

    let appended = format!("zz {}", Sentence(3..6).fake::<String>());
    lines.push(appended.clone());
    write_file(FileSpec::new(
        workspace_dir.path().join("after.txt"),
        lines.join("\n"),
    ));

    for algorithm in ["myers", "lcs"] {
        run_linediff_command(
            workspace_dir.path(),
            &["-a", algorithm, "--expanded", "--wrap", "before.txt", "after.txt"],
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("+{}", appended.trim_end())))
        .stdout(predicate::str::contains("\n-").not());
    }
}
