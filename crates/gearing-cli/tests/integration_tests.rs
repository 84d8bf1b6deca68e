//! Integration tests for gearing-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from any user or local configuration.
fn gearing(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gearing").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GEARING_LOG")
        .env_remove("NO_COLOR")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("gearing.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gear inches"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_demo_prints_both_gears() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout("137.0909090909091\n64.44444444444444\n");
}

#[test]
fn test_demo_with_no_color_set_to_one() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .env("NO_COLOR", "1")
        .arg("demo")
        .assert()
        .code(0)
        .stdout("137.0909090909091\n64.44444444444444\n");
}

#[test]
fn test_empty_no_color_keeps_demo_working() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .env("NO_COLOR", "")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("64.44444444444444"));
}

#[test]
fn test_verbose_logs_each_result_on_stderr() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["-v", "demo"])
        .assert()
        .success()
        .stdout("137.0909090909091\n64.44444444444444\n")
        .stderr(predicate::str::contains("Gear inches computed"))
        .stderr(predicate::str::contains("command=\"demo\""));
}

#[test]
fn test_demo_survives_quiet() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["--quiet", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("137.0909090909091"));
}

#[test]
fn test_demo_json_lines() {
    let dir = TempDir::new().unwrap();
    let output = gearing(&dir)
        .args(["demo", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["chainring"], 52);
    assert_eq!(reports[1]["chainring"], 40);
    assert_eq!(reports[1]["cog"], 18);
    assert_eq!(reports[1]["wheel"]["diameter"], 29.0);
}

#[test]
fn test_inches_with_all_flags() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args([
            "inches",
            "--chainring",
            "52",
            "--cog",
            "11",
            "--rim",
            "26",
            "--tire",
            "1.5",
        ])
        .assert()
        .success()
        .stdout("137.0909090909091\n");
}

#[test]
fn test_inches_defaults_tooth_counts() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["inches", "--rim", "26", "--tire", "1.5"])
        .assert()
        .success()
        .stdout("64.44444444444444\n");
}

#[test]
fn test_inches_without_wheel_fails() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["inches", "--chainring", "52", "--cog", "11"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no wheel"))
        .stderr(predicate::str::contains("--rim"));
}

#[test]
fn test_inches_zero_cog_fails() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["inches", "--chainring", "10", "--cog", "0", "--rim", "26", "--tire", "1.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cog of 0 teeth"));
}

#[test]
fn test_inches_takes_wheel_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[gear]\nchainring = 52\ncog = 11\n\n[wheel]\nrim = 26\ntire = 1.5\n");
    gearing(&dir)
        .args(["inches", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("137.0909090909091\n");
}

#[test]
fn test_flags_override_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[gear]\nchainring = 52\ncog = 11\n");
    gearing(&dir)
        .args(["ratio", "--chainring", "34", "--cog", "17", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[gear]\nchainring = 52\ncog = 11\n");
    gearing(&dir)
        .env("GEARING_GEAR__CHAINRING", "22")
        .args(["ratio", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_ratio_defaults() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .arg("ratio")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2.222"));
}

#[test]
fn test_ratio_zero_cog_fails() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["ratio", "--cog", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot divide"));
}

#[test]
fn test_wheel_measurements() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["wheel", "--rim", "26", "--tire", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diameter: 29"))
        .stdout(predicate::str::contains("circumference: 91.10"));
}

#[test]
fn test_wheel_negative_tire_warns_but_computes() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["wheel", "--rim", "26", "--tire", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diameter: 24"))
        .stderr(predicate::str::contains("tire"));
}

#[test]
fn test_half_a_wheel_in_environment_blames_environment() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .env("GEARING_WHEEL__RIM", "622")
        .arg("ratio")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("GEARING_* environment"))
        .stderr(predicate::str::contains("wheel.tire"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["demo", "--config", "does-not-exist.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_init_local_then_config_get() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(dir.path().join(".gearing.toml").is_file());

    gearing(&dir)
        .args(["config", "get", "gear.chainring"])
        .assert()
        .success()
        .stdout("gear.chainring = 40\n");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".gearing.toml"), "[gear]\ncog = 21\n").unwrap();

    gearing(&dir)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    let contents = std::fs::read_to_string(dir.path().join(".gearing.toml")).unwrap();
    assert!(contents.contains("cog = 21"));
}

#[test]
fn test_config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["config", "get", "gear.teeth"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_path_uses_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    gearing(&dir)
        .args(["config", "path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("gearing.toml"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gearing"));
}

#[test]
fn test_no_subcommand_shows_help() {
    let dir = TempDir::new().unwrap();
    gearing(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
