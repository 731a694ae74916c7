//! Configuration system for the ReSurve console
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (RESURVE_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::persona::PersonaId;

/// Main console configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Persona session settings
    pub session: SessionSettings,

    /// Logging configuration
    pub logging: LoggingSettings,

    /// Data storage paths
    pub storage: StorageSettings,
}

/// Persona session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Persona used when nothing valid has been persisted
    pub default_persona: PersonaId,

    /// Session state file; relative paths resolve against `storage.data_dir`
    pub state_file: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Optional log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Emit JSON formatted logs
    pub json_format: bool,
}

/// Storage path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Base data directory
    pub data_dir: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_persona: PersonaId::default(),
            state_file: "session.json".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            max_file_size_mb: 100,
            max_files: 5,
            json_format: false,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.resurve/console".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::find_config_file(config_path)? {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path).map_err(|e| Error::IoRead {
                path: path.clone(),
                source: e,
            })?;
            config = toml::from_str(&content).map_err(|e| {
                Error::config_parse(format!("{}: {}", path.display(), e.message()), Some(e))
            })?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        config.apply_env_overrides();
        config.expand_paths();
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            return if path.exists() {
                Ok(Some(path))
            } else {
                Err(Error::config_not_found(path))
            };
        }

        let search_paths = [
            Some(PathBuf::from("resurve.toml")),
            dirs::config_dir().map(|p| p.join("resurve").join("console.toml")),
            dirs::home_dir().map(|p| p.join(".resurve").join("console.toml")),
            Some(PathBuf::from("/etc/resurve/console.toml")),
        ];

        for path in search_paths.into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RESURVE_DEFAULT_PERSONA") {
            match val.parse() {
                Ok(id) => self.session.default_persona = id,
                Err(e) => debug!(error = %e, "Ignoring RESURVE_DEFAULT_PERSONA"),
            }
        }
        if let Ok(val) = std::env::var("RESURVE_STATE_FILE") {
            self.session.state_file = val;
        }

        if let Ok(val) = std::env::var("RESURVE_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("RESURVE_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("RESURVE_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("RESURVE_DATA_DIR") {
            self.storage.data_dir = val;
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        self.storage.data_dir = expand_path(&self.storage.data_dir);
        self.session.state_file = expand_path(&self.session.state_file);

        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.session.state_file.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "session.state_file",
                "State file cannot be empty",
            ));
        }

        if self.storage.data_dir.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "storage.data_dir",
                "Data directory cannot be empty",
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Get the data directory as a PathBuf
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }

    /// Resolved path of the session state file
    pub fn state_path(&self) -> PathBuf {
        let file = PathBuf::from(&self.session.state_file);
        if file.is_absolute() {
            file
        } else {
            self.data_dir().join(file)
        }
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or(std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".resurve")
                .join("console.toml")
        });

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(&config_path, generate_default_config()).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    info!(path = %config_path.display(), "Configuration file created");
    Ok(config_path)
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# ReSurve Console Configuration

[session]
# Persona used when no valid selection has been saved:
# security-officer, supervisor, client, admin, super-admin
default_persona = "admin"

# Session state file (relative paths resolve against storage.data_dir)
state_file = "session.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log file path (comment out to disable file logging)
# file = "~/.resurve/console/logs/console.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 100

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false

[storage]
# Base data directory
data_dir = "~/.resurve/console"
"#
    .to_string()
}
