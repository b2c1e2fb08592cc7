//! End-to-end tests driving the `minishell` binary over stdin.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_shell(input: &str, extra_args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minishell"))
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start minishell");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to feed input");
    child.wait_with_output().expect("failed to wait for minishell")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn runs_external_commands_with_arguments() {
    let output = run_shell("echo hello   world\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello world\n");
}

#[test]
fn exit_stops_reading_input() {
    let output = run_shell("echo before\nexit\necho after\n", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "before\n");
}

#[test]
fn exit_ignores_its_arguments() {
    let output = run_shell("exit 7\n", &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn end_of_input_is_success() {
    let output = run_shell("false\n", &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn unknown_command_is_reported_and_shell_continues() {
    let output = run_shell("no_such_command_4711 a b\necho still here\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Command no_such_command_4711 not found!\nstill here\n"
    );
}

#[test]
fn cd_changes_directory_for_later_commands() {
    let dir = TempDir::new().unwrap();
    let canonical = fs::canonicalize(dir.path()).unwrap();
    let output = run_shell(&format!("cd {}\npwd\n", canonical.display()), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", canonical.display()));
}

#[test]
fn cd_without_arguments_goes_home() {
    let home = TempDir::new().unwrap();
    let canonical = fs::canonicalize(home.path()).unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_minishell"))
        .env("HOME", &canonical)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"cd\npwd\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(stdout(&output), format!("{}\n", canonical.display()));
}

#[test]
fn cd_with_too_many_arguments_is_rejected() {
    let output = run_shell("cd /tmp /\npwd\n", &[]);
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(stderr(&output), "cd: Too many arguments\n");
    assert_eq!(stdout(&output), format!("{}\n", cwd.display()));
}

#[test]
fn script_option_reads_from_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("commands.txt");
    fs::write(&script, "echo from script\nexit\necho never\n").unwrap();

    let output = run_shell("echo from stdin\n", &["--script", script.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "from script\n");
}

#[test]
fn missing_script_is_an_error() {
    let output = run_shell("", &["--script", "/does/not/exist/commands.txt"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("can't open script"));
}

#[test]
fn long_arguments_are_truncated() {
    // Five slots keep four characters: enough for "echo" itself.
    let output = run_shell("echo abcdefgh\n", &["--max-arg-len", "5"]);
    assert_eq!(stdout(&output), "abcd\n");
}
