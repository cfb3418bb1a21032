//! Black-box tests of the `adl` binary.

mod common;

use common::{TestContext, INVALID_AGENT, VALID_AGENT};
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_generate_creates_project() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    ctx.command()
        .args(["generate", "--no-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.go"))
        .stdout(predicate::str::contains(".adl-ignore"));

    assert!(ctx.path().join("go.mod").is_file());
    assert!(ctx.path().join("tools/get_weather.go").is_file());
    assert!(ctx.read(".adl-ignore").lines().any(|l| l == "tools/*"));
}

#[test]
fn test_second_run_skips_existing_files() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);
    ctx.command().arg("generate").assert().success();

    ctx.command()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (exists)"))
        .stdout(predicate::str::contains("0 created"));
}

#[test]
fn test_overwrite_respects_ignore_file() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);
    ctx.command().arg("generate").assert().success();

    std::fs::write(ctx.path().join("tools/get_weather.go"), "package tools\n").unwrap();
    std::fs::write(ctx.path().join("main.go"), "package main\n").unwrap();

    ctx.command()
        .args(["generate", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten"));

    assert_eq!(ctx.read("tools/get_weather.go"), "package tools\n");
    assert!(ctx.read("main.go").starts_with("// Generated by adl"));
}

#[test]
fn test_custom_file_and_output_dir() {
    let ctx = TestContext::new();
    std::fs::write(ctx.path().join("weather.yaml"), VALID_AGENT).unwrap();

    ctx.command()
        .args(["generate", "-f", "weather.yaml", "-o", "out"])
        .assert()
        .success();

    assert!(ctx.path().join("out/main.go").is_file());
}

#[test]
fn test_deployment_override() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    ctx.command()
        .args(["generate", "--deployment", "kubernetes"])
        .assert()
        .success();

    assert!(ctx.read("k8s/deployment.yaml").contains("weather-agent"));
}

#[test]
fn test_generate_json_report() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    let output = ctx
        .command()
        .args(["generate", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["language"], "go");
    assert_eq!(report["ignore_file_created"], true);
    assert!(report["files"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["path"] == "main.go" && f["status"] == "created"));
}

#[test]
fn test_quiet_generate_prints_nothing() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    ctx.command()
        .args(["-q", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_flag_overrides_rust_log() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    ctx.command()
        .env("RUST_LOG", "debug")
        .args(["-q", "generate", "-o", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("INFO").not());

    assert!(ctx.path().join("out/main.go").is_file());
}

#[test]
fn test_rust_log_applies_without_flags() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);

    ctx.command()
        .env("RUST_LOG", "debug")
        .args(["generate", "-o", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded ADL document"));
}

#[test]
fn test_sync_adds_missing_files_only() {
    let ctx = TestContext::new().with_agent(VALID_AGENT);
    ctx.command().arg("generate").assert().success();

    std::fs::remove_file(ctx.path().join("README.md")).unwrap();
    std::fs::write(ctx.path().join("main.go"), "package main\n").unwrap();

    ctx.command().arg("sync").assert().success();

    assert!(ctx.path().join("README.md").is_file());
    assert_eq!(ctx.read("main.go"), "package main\n");
}

#[test]
fn test_validate_valid_file() {
    TestContext::new()
        .with_agent(VALID_AGENT)
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent.yaml is valid"));
}

#[test]
fn test_validate_lists_every_violation() {
    TestContext::new()
        .with_agent(INVALID_AGENT)
        .command()
        .arg("validate")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("metadata.name is required"))
        .stdout(predicate::str::contains("spec.language must define exactly one"));
}

#[test]
fn test_validate_json_output() {
    let ctx = TestContext::new().with_agent(INVALID_AGENT);

    let output = ctx
        .command()
        .args(["validate", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["violations"][0]["field"], "metadata.name");
}

#[test]
fn test_generate_invalid_document_writes_nothing() {
    let ctx = TestContext::new().with_agent(INVALID_AGENT);

    ctx.command()
        .arg("generate")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("metadata.name is required"));

    assert!(!ctx.path().join(".adl-ignore").exists());
}

#[test]
fn test_missing_file_exit_code() {
    TestContext::new()
        .command()
        .arg("generate")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("ADL file not found"));
}

#[test]
fn test_malformed_yaml_exit_code() {
    TestContext::new()
        .with_agent("metadata:\n  name: [unclosed\n")
        .command()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hint:"));
}
