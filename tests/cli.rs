//! Process-level checks of the CLI contract: exit code 1 on failure and all
//! diagnostics on stdout. Only the paths that fail before any network access
//! are exercised here; everything past validation is covered by the library
//! tests.

use std::process::{Command, Output};

fn mover() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mover-dl"))
}

fn mix() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mix-dl"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn missing_arguments_exit_one_with_usage_on_stdout() {
    for mut cmd in [mover(), mix()] {
        let output = cmd.output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stdout = stdout_of(&output);
        assert!(stdout.contains("Usage"), "stdout: {stdout}");
    }
}

#[test]
fn foreign_host_is_rejected_with_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = mover()
        .arg("https://notmover.uz/watch/abc")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("ERROR: invalid input"), "stdout: {stdout}");
}

#[test]
fn relative_output_dir_is_rejected_with_exit_one() {
    let output = mover()
        .arg("https://mover.uz/watch/abc")
        .arg("relative/out")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("absolute path"), "stdout: {stdout}");
}

#[test]
fn mix_dl_validates_its_own_host() {
    let dir = tempfile::tempdir().unwrap();
    let output = mix()
        .arg("https://mover.uz/watch/abc")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("ERROR: invalid input"), "stdout: {stdout}");
    assert!(stdout.contains("mix.tj"), "stdout: {stdout}");
}
