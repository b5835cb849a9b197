use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quay"))
}

const MANIFEST: &str = r#"
help_target = "acme.demo:help"

[[command]]
identifier = "acme.demo:cache:flush"
description = "Remove all cache entries"

[[command.parameter]]
name = "force"
type = "boolean"
optional = true

[[command]]
identifier = "acme.demo:user:create"
description = "Create a user account"

[[command.parameter]]
name = "username"

[[command.parameter]]
name = "roles"
type = "array"
optional = true

[[command]]
identifier = "acme.demo:site:export"
description = "Export a site package"

[[command.parameter]]
name = "siteKey"

[[command.parameter]]
name = "packageKey"

[[command.parameter]]
name = "format"
optional = true
"#;

fn write_manifest(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("quay.toml");
    std::fs::write(&path, MANIFEST).expect("write manifest");
    path
}

/// Golden test: verify exact output for a known command line
#[test]
fn e2e_golden_dispatch_output_exact() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "--manifest",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:user:create",
            "--username=jane",
            "--roles",
            "admin",
            "--roles",
            "editor",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "controller: acme.demo:user\n\
         command:    create\n\
         arguments:\n  \
           username = \"jane\"\n  \
           roles = [\"admin\", \"editor\"]\n",
        "Got:\n{}",
        stdout
    );
}

#[test]
fn e2e_dispatch_json_shape() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "--json",
            "acme.demo:user:create",
            "--username=jane",
            "--roles",
            "admin",
            "extra",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(value["controller_name"], "acme.demo:user");
    assert_eq!(value["command_name"], "create");
    assert_eq!(value["arguments"]["username"], "jane");
    assert_eq!(value["arguments"]["roles"][0], "admin");
    assert_eq!(value["exceeding_arguments"][0], "extra");
}

/// Quotes that survive the shell are resolved by the tokenizer, so a quoted
/// value keeps its spaces even though the words are re-joined before parsing
#[test]
fn e2e_dispatch_quoted_value_keeps_spaces() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:user:create",
            "--username='Jane Doe'",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("username = \"Jane Doe\""),
        "Got:\n{}",
        stdout
    );
}

#[test]
fn e2e_dispatch_case_insensitive_names_bind_declared_spelling() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "Acme.Demo:User:Create",
            "--USERNAME=jane",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("controller: acme.demo:user"), "Got:\n{}", stdout);
    assert!(stdout.contains("username = \"jane\""), "Got:\n{}", stdout);
}

#[test]
fn e2e_dispatch_positional_binding_and_exceeding() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:site:export",
            "main",
            "acme.pkg",
            "leftover",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("siteKey = \"main\""), "Got:\n{}", stdout);
    assert!(stdout.contains("packageKey = \"acme.pkg\""), "Got:\n{}", stdout);
    assert!(stdout.contains("exceeding:"), "Got:\n{}", stdout);
    assert!(stdout.contains("\"leftover\""), "Got:\n{}", stdout);
}

#[test]
fn e2e_dispatch_missing_required_argument_exits_nonzero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:user:create",
        ])
        .output()
        .expect("run quay");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Required argument \"username\" is missing"),
        "Got:\n{}",
        stderr
    );
}

#[test]
fn e2e_dispatch_argument_mixing_exits_nonzero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:site:export",
            "--siteKey=main",
            "acme.pkg",
        ])
        .output()
        .expect("run quay");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unexpected unnamed argument"),
        "Got:\n{}",
        stderr
    );
}

#[test]
fn e2e_dispatch_empty_line_builds_help_stub() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args(["-m", manifest.to_string_lossy().as_ref(), "dispatch", ""])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("controller: acme.demo:help"), "Got:\n{}", stdout);
    assert!(stdout.contains("command:    helpStub"), "Got:\n{}", stdout);
}

#[test]
fn e2e_dispatch_unresolved_identifier_builds_error_request() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args([
            "-m",
            manifest.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:cache:warmup",
        ])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("command:    error"), "Got:\n{}", stdout);
    assert!(
        stdout.contains("acme.demo:cache:warmup"),
        "Got:\n{}",
        stdout
    );
}

#[test]
fn e2e_dispatch_missing_manifest_exits_nonzero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("absent.toml");

    let output = bin()
        .args([
            "-m",
            missing.to_string_lossy().as_ref(),
            "dispatch",
            "acme.demo:cache:flush",
        ])
        .output()
        .expect("run quay");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read manifest"), "Got:\n{}", stderr);
}

#[test]
fn e2e_tokens_plain_output() {
    let output = bin()
        .args(["tokens", "--", "--force", "--username=jane", "extra"])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--force"), "Got:\n{}", stdout);
    assert!(stdout.contains("--username=\"jane\""), "Got:\n{}", stdout);
    assert!(stdout.contains("\"extra\""), "Got:\n{}", stdout);
}

#[test]
fn e2e_tokens_json_output() {
    let output = bin()
        .args(["tokens", "--json", "--", "--un-known=glued"])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(value[0]["LongOption"]["name"], "unKnown");
    assert_eq!(value[0]["LongOption"]["value"]["assigned"], "glued");
    assert_eq!(value[0]["LongOption"]["text"], "--un-known=glued");
}

#[test]
fn e2e_list_plain_output() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args(["-m", manifest.to_string_lossy().as_ref(), "list"])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("acme.demo:cache:flush"), "Got:\n{}", stdout);
    assert!(stdout.contains("Remove all cache entries"), "Got:\n{}", stdout);
    assert!(
        stdout.contains("--force (boolean, optional)"),
        "Got:\n{}",
        stdout
    );
    assert!(
        stdout.contains("--username (string, required)"),
        "Got:\n{}",
        stdout
    );
}

#[test]
fn e2e_list_json_output() {
    let temp_dir = TempDir::new().expect("temp dir");
    let manifest = write_manifest(&temp_dir);

    let output = bin()
        .args(["-m", manifest.to_string_lossy().as_ref(), "list", "--json"])
        .output()
        .expect("run quay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(value[0]["identifier"], "acme.demo:cache:flush");
    assert_eq!(value[0]["controller_name"], "acme.demo:cache");
    assert_eq!(value[1]["parameters"][0]["name"], "username");
}
