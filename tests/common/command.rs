use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.current_dir(dir)
        .env_remove("COLUMNS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--no-pager")
        .args(args);
    cmd
}

#[fixture]
pub fn go_mod_old() -> String {
    r#"module example.com/app

go 1.22

require (
	github.com/foo/bar v1.0.0
	golang.org/x/sys v0.1.0
)
"#
    .to_string()
}

#[fixture]
pub fn go_mod_new() -> String {
    r#"module example.com/app

go 1.23

require (
	github.com/foo/bar v2.0.0
	golang.org/x/sys v0.1.0
	golang.org/x/text v0.14.0
)
"#
    .to_string()
}

#[fixture]
pub fn go_mod_unified_output() -> String {
    r#"--- a/go.mod.orig
+++ b/go.mod
 module example.com/app

-go 1.22
+go 1.23

 require (
-    github.com/foo/bar v1.0.0
+    github.com/foo/bar v2.0.0
     golang.org/x/sys v0.1.0
+    golang.org/x/text v0.14.0
 )
"#
    .to_string()
}
