//! Tests of the built binary that never reach the parameter store

use assert_cmd::Command;
use predicates::prelude::*;
use std::env;

/// The binary with a minimal, reference-free environment
fn ssm_env() -> Command {
    let mut cmd = Command::cargo_bin("ssm-env").unwrap();
    cmd.env_clear();
    if let Some(path) = env::var_os("PATH") {
        cmd.env("PATH", path);
    }
    cmd
}

#[test]
fn test_help_lists_modes() {
    ssm_env()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--export"))
        .stdout(predicate::str::contains("--parameter-name").not());
}

#[test]
fn test_nothing_to_do_fails() {
    ssm_env()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "expected --name, --export or a command to run",
        ));
}

#[test]
fn test_name_and_export_are_exclusive() {
    ssm_env()
        .args(["--name", "/x", "--export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_program_fails() {
    ssm_env()
        .arg("ssm-env-no-such-program")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find program"));
}

#[test]
fn test_export_without_references_prints_nothing() {
    ssm_env()
        .env("PLAIN", "value")
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_reference_fails_before_lookup() {
    ssm_env()
        .env("SECRET", "ssm://host/secret")
        .arg("--export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SECRET"))
        .stderr(predicate::str::contains("host not allowed"));
}

#[cfg(unix)]
#[test]
fn test_plain_environment_is_passed_through() {
    ssm_env()
        .env("PLAIN", "value")
        .args(["sh", "-c", "printf %s \"$PLAIN\""])
        .assert()
        .success()
        .stdout("value");
}

#[cfg(unix)]
#[test]
fn test_exit_status_is_the_programs() {
    ssm_env()
        .args(["sh", "-c", "exit 3"])
        .assert()
        .code(3);
}

/// `env -i` builds the launcher's environment in argument order, which a
/// `Command` cannot do
#[cfg(target_os = "linux")]
fn environ_seen_through_ssm_env(entries: &[&[u8]]) -> Vec<u8> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new("env")
        .arg("-i")
        .args(entries.iter().map(|entry| OsStr::from_bytes(entry)))
        .arg(assert_cmd::cargo::cargo_bin("ssm-env"))
        .args(["cat", "/proc/self/environ"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    output.stdout
}

#[cfg(target_os = "linux")]
#[test]
fn test_child_environment_keeps_order() {
    let path = format!("PATH={}", env::var("PATH").unwrap());
    let environ = environ_seen_through_ssm_env(&[path.as_bytes(), b"ZZZ=1", b"AAA=2"]);

    let expected = format!("{path}\0ZZZ=1\0AAA=2\0");
    assert_eq!(String::from_utf8(environ).unwrap(), expected);
}

#[cfg(target_os = "linux")]
#[test]
fn test_child_environment_keeps_non_utf8_bytes() {
    let path = format!("PATH={}", env::var("PATH").unwrap());
    let environ = environ_seen_through_ssm_env(&[path.as_bytes(), b"RAW=a\xffb"]);

    let mut expected = path.into_bytes();
    expected.extend_from_slice(b"\0RAW=a\xffb\0");
    assert_eq!(environ, expected);
}
