//! Configuration system tests
//!
//! Tests configuration loading, validation, and environment overrides

mod common;

use predicates::prelude::*;

use common::{invalid_config_fixture, valid_config_fixture, TestEnv};

// ─────────────────────────────────────────────────────────────────
// Valid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_minimal_config() {
    let env = TestEnv::new();
    let path = env.write_config(
        r#"
[session]

[logging]

[storage]
"#,
    );

    env.cmd()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_full_config() {
    let env = TestEnv::new();
    let path = env.write_config(
        r#"
[session]
default_persona = "security-officer"
state_file = "officer-session.json"

[logging]
level = "warn"
file = "/tmp/resurve-console.log"
max_file_size_mb = 50
max_files = 3
json_format = true

[storage]
data_dir = "/tmp/resurve/console"
"#,
    );

    env.cmd()
        .args(["config", "show", "--config"])
        .arg(&path)
        .env_remove("RESURVE_DATA_DIR")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_persona = \"security-officer\""))
        .stdout(predicate::str::contains("state_file = \"officer-session.json\""))
        .stdout(predicate::str::contains("json_format = true"))
        .stdout(predicate::str::contains("data_dir = \"/tmp/resurve/console\""));
}

#[test]
fn test_fixture_default_persona_applies() {
    TestEnv::new()
        .cmd()
        .args(["persona", "show", "--config"])
        .arg(valid_config_fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Supervisor (supervisor)"));
}

#[test]
fn test_config_via_env_var() {
    let env = TestEnv::new();
    let path = env.write_config("[session]\ndefault_persona = \"client\"\n");

    env.cmd()
        .args(["persona", "show"])
        .env("RESURVE_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Store Owner (client)"));
}

#[test]
fn test_persisted_selection_beats_default() {
    let env = TestEnv::new();
    let path = env.write_config("[session]\ndefault_persona = \"client\"\n");

    env.cmd()
        .args(["persona", "select", "supervisor", "--config"])
        .arg(&path)
        .assert()
        .success();

    env.cmd()
        .args(["persona", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(supervisor)"));
}

#[test]
fn test_absolute_state_file() {
    let env = TestEnv::new();
    let state = env.home().join("elsewhere").join("state.json");
    let path = env.write_config(&format!(
        "[session]\nstate_file = \"{}\"\n",
        state.display()
    ));

    env.cmd()
        .args(["persona", "select", "client", "--config"])
        .arg(&path)
        .assert()
        .success();

    assert!(state.exists());
    assert!(!env.state_file().exists());
}

// ─────────────────────────────────────────────────────────────────
// Invalid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_default_persona() {
    TestEnv::new()
        .cmd()
        .args(["config", "validate", "--config"])
        .arg(invalid_config_fixture())
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_invalid_log_level() {
    let env = TestEnv::new();
    let path = env.write_config("[logging]\nlevel = \"loud\"\n");

    env.cmd()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("Invalid log level"));
}

#[test]
fn test_empty_state_file() {
    let env = TestEnv::new();
    let path = env.write_config("[session]\nstate_file = \"\"\n");

    env.cmd()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("State file cannot be empty"));
}

#[test]
fn test_malformed_toml() {
    let env = TestEnv::new();
    let path = env.write_config("[session\ndefault_persona = ");

    env.cmd()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .code(10);
}

// ─────────────────────────────────────────────────────────────────
// Environment Override Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let env = TestEnv::new();
    let path = env.write_config("[session]\ndefault_persona = \"client\"\n");

    env.cmd()
        .args(["persona", "show", "--config"])
        .arg(&path)
        .env("RESURVE_DEFAULT_PERSONA", "security-officer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Officer (security-officer)"));
}

#[test]
fn test_invalid_env_persona_is_ignored() {
    TestEnv::new()
        .cmd()
        .args(["persona", "show"])
        .env("RESURVE_DEFAULT_PERSONA", "janitor")
        .assert()
        .success()
        .stdout(predicate::str::contains("(admin)"));
}

#[test]
fn test_invalid_env_log_level_fails() {
    TestEnv::new()
        .cmd()
        .args(["config", "validate"])
        .env("RESURVE_LOG_LEVEL", "chatty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}
