use std::fs::File;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn minsh(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minsh"))
        .current_dir("/")
        .env("NO_COLOR", "1")
        .env_remove("MINSH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn streams(output: &Output) -> (String, String) {
    (String::from_utf8_lossy(&output.stdout).into_owned(), String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn missing_program_reports_and_keeps_prompting() {
    let output = minsh("zzzz_not_a_real_command\nexit\n");
    let (out, err) = streams(&output);
    assert_eq!(out, "/>> />> ");
    assert!(err.contains("minsh: zzzz_not_a_real_command: No such file or directory"), "{err}");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn wrong_case_builtin_is_launched() {
    let output = minsh("Cd /\nexit\n");
    let (out, err) = streams(&output);
    assert_eq!(out, "/>> />> ");
    assert!(err.contains("minsh: Cd: No such file or directory"), "{err}");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = minsh("help");
    let (out, err) = streams(&output);
    assert!(out.starts_with("/>> minsh"), "{out}");
    assert!(err.is_empty(), "{err}");
    assert_eq!(output.status.code(), Some(0));

    let output = minsh("");
    assert_eq!(streams(&output).0, "/>> ");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn cd_moves_the_real_process() {
    let output = minsh("cd usr\ncd /nonexistent\nexit\n");
    let (out, err) = streams(&output);
    assert_eq!(out, "/>> /usr>> /usr>> ");
    assert!(err.contains("minsh: cd: /nonexistent: "), "{err}");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn children_write_to_inherited_streams() {
    let output = minsh("echo hello world\nsleep 0 &\nexit\n");
    let (out, _) = streams(&output);
    assert_eq!(out, "/>> hello world\n/>> />> ");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn unreadable_input_is_fatal_once() {
    let output = Command::new(env!("CARGO_BIN_EXE_minsh"))
        .current_dir("/")
        .env("NO_COLOR", "1")
        .env_remove("MINSH_LOG")
        .stdin(File::open("/").unwrap())
        .output()
        .unwrap();
    let (out, err) = streams(&output);
    assert_eq!(out, "/>> ");
    assert_eq!(err.matches("could not read input").count(), 1, "{err}");
    assert_eq!(err.lines().count(), 1, "{err}");
    assert_eq!(output.status.code(), Some(1));
}
