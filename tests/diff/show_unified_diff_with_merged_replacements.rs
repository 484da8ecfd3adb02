use crate::common::command::{
    go_mod_new, go_mod_old, go_mod_unified_output, run_linediff_command, workspace_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("myers")]
#[case("lcs")]
fn show_unified_diff_with_merged_replacements(
    workspace_dir: TempDir,
    go_mod_old: String,
    go_mod_new: String,
    go_mod_unified_output: String,
    #[case] algorithm: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("go.mod.orig"), go_mod_old));
    write_file(FileSpec::new(workspace_dir.path().join("go.mod"), go_mod_new));

    let actual_output = run_linediff_command(
        workspace_dir.path(),
        &["--algorithm", algorithm, "go.mod.orig", "go.mod"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, go_mod_unified_output);

    Ok(())
}
