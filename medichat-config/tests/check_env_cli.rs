//! End-to-end tests for the `check-env` binary. Each test runs the real
//! binary inside a scratch directory, the way `npm run check-env` would run
//! it from the project root.

use std::{fs, path::Path};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const URL_LINE: &str = "NEXT_PUBLIC_SUPABASE_URL=https://proj.supabase.co";
const KEY_LINE: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY=eyabc123def456";

fn project_with_env(contents: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    if let Some(contents) = contents {
        fs::write(dir.path().join(".env.local"), contents).expect("write env");
    }
    dir
}

fn check_env(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("check-env");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_file_exits_with_one() {
    let dir = project_with_env(None);
    check_env(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(".env.local file not found!"));
}

#[test]
fn valid_file_reports_success_without_warnings() {
    let dir = project_with_env(Some(&format!("{URL_LINE}\n{KEY_LINE}\n")));
    check_env(dir.path())
        .assert()
        .success()
        .stdout("[ok] .env.local format looks correct.\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn short_url_and_missing_key_fails_with_two() {
    let dir = project_with_env(Some("NEXT_PUBLIC_SUPABASE_URL=short\n"));
    let assert = check_env(dir.path()).assert().code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);

    assert!(
        stderr.contains("NEXT_PUBLIC_SUPABASE_URL seems too short or empty")
    );
    assert!(stderr.contains("Missing required variables in .env.local"));
    assert!(stderr.contains("   - Missing NEXT_PUBLIC_SUPABASE_ANON_KEY"));
    assert!(!stderr.contains("Missing NEXT_PUBLIC_SUPABASE_URL"));
}

#[test]
fn advisory_mode_keeps_exit_zero_on_missing_keys() {
    let dir = project_with_env(Some("NEXT_PUBLIC_SUPABASE_URL=short\n"));
    check_env(dir.path())
        .arg("--advisory")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Missing NEXT_PUBLIC_SUPABASE_ANON_KEY",
        ));
}

#[test]
fn short_key_without_prefix_warns_twice() {
    let dir = project_with_env(Some("NEXT_PUBLIC_SUPABASE_ANON_KEY=abc\n"));
    let assert = check_env(dir.path()).assert().code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);

    assert!(
        stderr.contains("NEXT_PUBLIC_SUPABASE_ANON_KEY seems too short or empty")
    );
    assert!(
        stderr.contains("NEXT_PUBLIC_SUPABASE_ANON_KEY does not start with \"ey\"")
    );
    assert_eq!(stderr.matches("[warn]").count(), 2);
}

#[test]
fn service_role_comment_adds_leak_warning_to_success() {
    let dir = project_with_env(Some(&format!(
        "{URL_LINE}\n# service_role key: xyz\n{KEY_LINE}\n"
    )));
    check_env(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("format looks correct"))
        .stderr(predicate::str::contains("service_role").and(
            predicate::str::contains("uses the \"anon\" key"),
        ));
}

#[test]
fn explicit_env_file_is_honoured() {
    let dir = project_with_env(None);
    let custom = dir.path().join("staging.env");
    fs::write(&custom, format!("{URL_LINE}\n{KEY_LINE}\n")).expect("write");

    check_env(dir.path())
        .arg("--env-file")
        .arg(&custom)
        .assert()
        .success()
        .stdout("[ok] staging.env format looks correct.\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = project_with_env(Some(&format!(
        "NEXT_PUBLIC_SUPABASE_URL=x\n# service_role\n{KEY_LINE}\nNEXT_PUBLIC_SUPABASE_ANON_KEY=abc\n"
    )));

    let first = check_env(dir.path()).output().expect("first run");
    let second = check_env(dir.path()).output().expect("second run");

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}
