//! Tests for verbosity and log configuration.

use crate::support::*;

#[test]
fn test_default_logs_info_without_debug() {
    let t = Test::with_descriptor("[]");

    let output = t.generate();
    assert_success(&output);
    assert_stderr_contains(&output, "processing repository configurations");
    assert_stderr_excludes(&output, "DEBUG");
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::with_descriptor("[]");

    let output = t.generate_with(&["--verbose"]);
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_contains(&output, "opening auth file");
}

#[test]
fn test_debug_env_enables_verbose() {
    let t = Test::with_descriptor("[]");

    let output = t
        .cmd()
        .env("DEBUG", "1")
        .arg("--output")
        .arg(t.auth_file())
        .arg(t.descriptor())
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_debug_env_zero_still_enables_verbose() {
    let t = Test::with_descriptor("[]");

    let output = t
        .cmd()
        .env("DEBUG", "0")
        .arg("--output")
        .arg(t.auth_file())
        .arg(t.descriptor())
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "opening auth file");
}

#[test]
fn test_log_env_var_overrides_level() {
    let t = Test::with_descriptor("[]");

    let output = t
        .cmd()
        .env("APT_AUTH_LOG", "off")
        .arg("--output")
        .arg(t.auth_file())
        .arg(t.descriptor())
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_excludes(&output, "processing repository configurations");
}

#[test]
fn test_json_log_format() {
    let t = Test::with_descriptor("[]");

    let output = t.generate_with(&["--log-format", "json"]);
    assert_success(&output);

    let first = stderr(&output)
        .lines()
        .next()
        .map(str::to_string)
        .expect("expected a log line");
    let parsed: serde_json::Value = serde_json::from_str(&first).expect("log line is JSON");
    assert!(parsed.get("level").is_some());
}
