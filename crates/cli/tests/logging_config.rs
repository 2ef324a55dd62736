use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("propadd.log");

    // Create config with file logging
    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
level = "debug"
file = "{}"
"#,
        root.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let note = root.join("note.md");
    fs::write(&note, "body").unwrap();

    // Run a command that triggers logging
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("propadd"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["add", note.to_str().unwrap(), "--value", "[[X]]"])
        .assert()
        .success();

    // Verify log file exists
    assert!(log_file.exists(), "Log file should be created");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
level = "trace"
"#,
        root.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let note = root.join("note.md");
    fs::write(&note, "body").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("propadd"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["add", note.to_str().unwrap(), "--value", "[[X]]"])
        .assert()
        .success();

    // If it didn't crash, the level parsing worked.
}

#[test]
fn test_logging_split_levels() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("split.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
level = "info"
file_level = "debug"
file = "{}"
"#,
        root.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let note = root.join("note.md");
    fs::write(&note, "body").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("propadd"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["add", note.to_str().unwrap(), "--value", "[[X]]"])
        .assert()
        .success();

    assert!(log_file.exists());
}
