//! Common test utilities and fixtures
//!
//! Every command runs against its own temporary data directory and home, so
//! persisted persona selections never leak between tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a path to a specific fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Config with `supervisor` as the default persona
pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

/// Config naming a persona that does not exist
pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// Isolated environment for running the `resurve` binary
pub struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join("data")
    }

    /// Where the session state ends up with default settings
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Write a config file into the temp home and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home.path().join("console.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// A `resurve` command with no config file and a private data dir
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("resurve").unwrap();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("RESURVE_DATA_DIR", self.data_dir())
            .env_remove("RESURVE_CONFIG")
            .env_remove("RESURVE_DEFAULT_PERSONA")
            .env_remove("RESURVE_STATE_FILE")
            .env_remove("RESURVE_LOG_LEVEL")
            .env_remove("RESURVE_LOG_FILE")
            .env_remove("RESURVE_LOG_JSON");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_exist() {
        assert!(valid_config_fixture().exists());
        assert!(invalid_config_fixture().exists());
    }

    #[test]
    fn test_env_paths_are_private() {
        let a = TestEnv::new();
        let b = TestEnv::new();
        assert_ne!(a.state_file(), b.state_file());
        assert!(a.state_file().starts_with(a.home()));
    }
}
