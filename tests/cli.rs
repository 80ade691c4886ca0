use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ezg(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ezg").unwrap();
    cmd.current_dir(cwd.path())
        .env_remove("EZG_BACKEND")
        .env_remove("EZG_CLIPBOARD_CMD")
        .env_remove("EZG_CLIPBOARD_ARGS")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "world").unwrap();
    dir
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let clip = dir.path().join("clip.txt");

    ezg(&dir)
        .args(["--clipboard-cmd", "tee", "--clipboard-arg"])
        .arg(&clip)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));

    assert!(!clip.exists());
}

#[test]
fn stdout_output_matches_template_exactly() {
    let dir = fixture();

    ezg(&dir)
        .args(["--stdout", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("a.txt\n```\nhello\n```\n\nb.txt\n```\nworld\n```\n\n");
}

#[test]
fn missing_file_fails_and_names_the_path() {
    let dir = fixture();

    ezg(&dir)
        .args(["--stdout", "a.txt", "nope.txt", "b.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn out_file_receives_the_text() {
    let dir = fixture();

    ezg(&dir)
        .args(["--out", "prompt.md", "b.txt", "a.txt"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("prompt.md")).unwrap(),
        "b.txt\n```\nworld\n```\n\na.txt\n```\nhello\n```\n\n"
    );
}

#[test]
fn unknown_clipboard_command_fails() {
    let dir = fixture();

    ezg(&dir)
        .args(["--clipboard-cmd", "ezg-no-such-clipboard-command", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ezg-no-such-clipboard-command"));
}

#[cfg(unix)]
#[test]
fn clipboard_command_gets_text_on_stdin() {
    let dir = fixture();
    let name = "it's $(odd) `name`.txt";
    fs::write(dir.path().join(name), "quoted 'content'").unwrap();
    let clip = dir.path().join("clip.txt");

    ezg(&dir)
        .args(["--clipboard-cmd", "tee", "--clipboard-arg"])
        .arg(&clip)
        .args(["a.txt", name])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Copied 2 file(s) to clipboard."));

    assert_eq!(
        fs::read_to_string(&clip).unwrap(),
        format!("a.txt\n```\nhello\n```\n\n{name}\n```\nquoted 'content'\n```\n\n")
    );
}

#[cfg(unix)]
#[test]
fn clipboard_is_untouched_when_a_file_fails() {
    let dir = fixture();
    let clip = dir.path().join("clip.txt");

    ezg(&dir)
        .args(["--clipboard-cmd", "tee", "--clipboard-arg"])
        .arg(&clip)
        .args(["a.txt", "missing.txt"])
        .assert()
        .failure();

    assert!(!clip.exists());
}

#[cfg(unix)]
#[test]
fn clipboard_command_can_come_from_the_environment() {
    let dir = fixture();
    let clip = dir.path().join("clip.txt");

    ezg(&dir)
        .env("EZG_CLIPBOARD_CMD", "tee")
        .env("EZG_CLIPBOARD_ARGS", &clip)
        .arg("a.txt")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&clip).unwrap(), "a.txt\n```\nhello\n```\n\n");
}

#[cfg(unix)]
#[test]
fn environment_clipboard_args_split_on_whitespace() {
    let dir = fixture();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    ezg(&dir)
        .env("EZG_CLIPBOARD_CMD", "tee")
        .env(
            "EZG_CLIPBOARD_ARGS",
            format!("  {}\t\t{}  ", first.display(), second.display()),
        )
        .arg("a.txt")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&first).unwrap(), "a.txt\n```\nhello\n```\n\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "a.txt\n```\nhello\n```\n\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
}

#[test]
fn clipboard_arg_without_command_is_rejected() {
    let dir = fixture();

    ezg(&dir)
        .args(["--clipboard-arg", "-b", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--clipboard-cmd"));
}

#[cfg(unix)]
#[test]
fn dotenv_configures_the_clipboard_command() {
    let dir = fixture();
    let clip = dir.path().join("clip.txt");
    fs::write(
        dir.path().join(".env"),
        format!("EZG_CLIPBOARD_CMD=tee\nEZG_CLIPBOARD_ARGS={}\n", clip.display()),
    )
    .unwrap();

    ezg(&dir).assert().code(1).stderr(predicate::str::contains("Usage:"));
    assert!(!clip.exists());

    ezg(&dir).arg("b.txt").assert().success();
    assert_eq!(fs::read_to_string(&clip).unwrap(), "b.txt\n```\nworld\n```\n\n");
}
