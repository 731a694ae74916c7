//! CLI integration tests
//!
//! Tests the command-line interface using assert_cmd

mod common;

use std::fs;

use predicates::prelude::*;

use common::TestEnv;

// ─────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    TestEnv::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("persona"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("nav"))
        .stdout(predicate::str::contains("cameras"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_command() {
    TestEnv::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("resurve"))
        .stdout(predicate::str::contains("Build Information"))
        .stdout(predicate::str::contains("Git Hash"))
        .stdout(predicate::str::contains("Target"));
}

#[test]
fn test_short_version_flag() {
    TestEnv::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("resurve"));
}

#[test]
fn test_unknown_command_fails() {
    TestEnv::new().cmd().arg("teleport").assert().failure();
}

// ─────────────────────────────────────────────────────────────────
// Persona Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_first_run_defaults_to_admin() {
    TestEnv::new()
        .cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator (admin)"))
        .stdout(predicate::str::contains("view_logs"));
}

#[test]
fn test_persona_list_marks_active() {
    TestEnv::new()
        .cmd()
        .args(["persona", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("security-officer"))
        .stdout(predicate::str::contains("Store Owner"))
        .stdout(predicate::str::contains("* admin"))
        .stdout(predicate::str::contains("+4 more"));
}

#[test]
fn test_select_persists_across_runs() {
    let env = TestEnv::new();

    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active persona: Store Owner (client)"));

    let state = fs::read_to_string(env.state_file()).unwrap();
    assert!(state.contains("\"currentPersona\": \"client\""));

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store Owner (client)"));
}

#[test]
fn test_select_rejects_non_canonical_id() {
    let env = TestEnv::new();

    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    env.cmd()
        .args(["persona", "select", "Super_Admin"])
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("Invalid persona selection 'Super_Admin'"));

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store Owner (client)"));
}

#[test]
fn test_non_canonical_stored_persona_falls_back_to_default() {
    let env = TestEnv::new();
    fs::create_dir_all(env.data_dir()).unwrap();
    fs::write(
        env.state_file(),
        r#"{"currentPersona": "  SECURITY_OFFICER "}"#,
    )
    .unwrap();

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator (admin)"));
}

#[test]
fn test_invalid_selection_keeps_previous_persona() {
    let env = TestEnv::new();

    env.cmd()
        .args(["persona", "select", "supervisor"])
        .assert()
        .success();

    env.cmd()
        .args(["persona", "select", "janitor"])
        .assert()
        .failure()
        .code(30)
        .stderr(predicate::str::contains("Invalid persona selection 'janitor'"))
        .stderr(predicate::str::contains("persona list"));

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supervisor (supervisor)"));
}

#[test]
fn test_corrupt_state_falls_back_to_default() {
    let env = TestEnv::new();
    fs::create_dir_all(env.data_dir()).unwrap();
    fs::write(env.state_file(), "{ not json").unwrap();

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator (admin)"));
}

#[test]
fn test_unknown_stored_persona_falls_back_to_default() {
    let env = TestEnv::new();
    fs::create_dir_all(env.data_dir()).unwrap();
    fs::write(env.state_file(), r#"{"currentPersona": "janitor"}"#).unwrap();

    env.cmd()
        .args(["persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(admin)"));
}

#[test]
fn test_unwritable_state_keeps_selection() {
    let env = TestEnv::new();
    // A directory where the state file should be makes every write fail.
    fs::create_dir_all(env.state_file()).unwrap();

    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active persona: Store Owner (client)"));
}

#[test]
fn test_has_permission() {
    let env = TestEnv::new();

    env.cmd()
        .args(["persona", "has-permission", "view_logs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("yes\n"));

    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    env.cmd()
        .args(["persona", "has-permission", "view_logs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("no\n"));

    env.cmd()
        .args(["persona", "has-permission", ""])
        .assert()
        .success()
        .stdout(predicate::str::diff("no\n"));
}

// ─────────────────────────────────────────────────────────────────
// Route Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_route_allowed_for_admin() {
    TestEnv::new()
        .cmd()
        .args(["route", "check", "/users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access granted: Users (/users)"));
}

#[test]
fn test_route_denied_for_client() {
    let env = TestEnv::new();
    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    env.cmd()
        .args(["route", "check", "/users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access Restricted"))
        .stdout(predicate::str::contains(
            "Your current role Store Owner does not have permission to access /users.",
        ))
        .stdout(predicate::str::contains("Reports"))
        .stdout(predicate::str::contains("[Go to Dashboard] -> /dashboard"));
}

#[test]
fn test_route_check_normalizes_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["persona", "select", "security-officer"])
        .assert()
        .success();

    env.cmd()
        .args(["route", "check", "/alerts/?tab=open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access granted: Alerts (/alerts)"));

    env.cmd()
        .args(["route", "check", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access granted: Dashboard (/dashboard)"));
}

#[test]
fn test_route_check_unknown_path_is_denied() {
    TestEnv::new()
        .cmd()
        .args(["route", "check", "/billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access Restricted"))
        .stdout(predicate::str::contains("/billing"));
}

#[test]
fn test_route_check_json() {
    let env = TestEnv::new();
    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    let output = env
        .cmd()
        .args(["route", "check", "/cameras", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["decision"], "denied");
    assert_eq!(json["requested"], "/cameras");
    assert_eq!(json["fallback"], "dashboard");
}

// ─────────────────────────────────────────────────────────────────
// Navigation and Camera Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_nav_lists_only_allowed_pages() {
    let env = TestEnv::new();
    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    env.cmd()
        .args(["nav", "--current", "/reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ReSurve - Security Monitoring [Client]"))
        .stdout(predicate::str::contains("> Reports"))
        .stdout(predicate::str::contains("Settings"))
        .stdout(predicate::str::contains("Users").not())
        .stdout(predicate::str::contains("Cameras").not());
}

#[test]
fn test_cameras_scoped_to_client() {
    let env = TestEnv::new();
    env.cmd()
        .args(["persona", "select", "client"])
        .assert()
        .success();

    env.cmd()
        .arg("cameras")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Camera Dashboard: View your store cameras and security reports",
        ))
        .stdout(predicate::str::contains("3 of 3 cameras (Your stores only)"))
        .stdout(predicate::str::contains("Server Room").not());
}

#[test]
fn test_cameras_status_filter() {
    TestEnv::new()
        .cmd()
        .args(["cameras", "--status", "maintenance"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Manage system users and monitor all security operations",
        ))
        .stdout(predicate::str::contains("1 of 6 cameras"))
        .stdout(predicate::str::contains("Loading Dock"));
}

#[test]
fn test_cameras_invalid_sort_fails() {
    TestEnv::new()
        .cmd()
        .args(["cameras", "--sort", "age"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort key"));
}

// ─────────────────────────────────────────────────────────────────
// Config Command Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_show_default() {
    TestEnv::new()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[session]"))
        .stdout(predicate::str::contains("default_persona = \"admin\""))
        .stdout(predicate::str::contains("[logging]"))
        .stdout(predicate::str::contains("[storage]"));
}

#[test]
fn test_config_show_env_override() {
    TestEnv::new()
        .cmd()
        .args(["config", "show"])
        .env("RESURVE_DEFAULT_PERSONA", "supervisor")
        .env("RESURVE_LOG_LEVEL", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_persona = \"supervisor\""))
        .stdout(predicate::str::contains("level = \"debug\""));
}

#[test]
fn test_config_validate_default() {
    TestEnv::new()
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_missing_file_fails() {
    TestEnv::new()
        .cmd()
        .args(["config", "validate", "--config", "/nonexistent/console.toml"])
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_init_creates_file() {
    let env = TestEnv::new();
    let path = env.home().join("init").join("console.toml");

    env.cmd()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[session]"));
    assert!(content.contains("default_persona"));

    env.cmd()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_config_init_refuses_overwrite() {
    let env = TestEnv::new();
    let path = env.write_config("[session]\n");

    env.cmd()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    env.cmd()
        .args(["config", "init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────
// Verbosity Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_quiet_flag_keeps_stdout() {
    TestEnv::new()
        .cmd()
        .args(["-q", "persona", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Administrator"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    TestEnv::new()
        .cmd()
        .args(["-vv", "persona", "has-permission", "view_logs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("yes\n"));
}
