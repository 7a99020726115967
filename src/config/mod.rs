use crate::constants::{DEFAULT_MIN_ROSTER_SIZE, DEFAULT_OUTPUT_DIR, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing persisted settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rosters with fewer players than this get a size warning.
    #[serde(default = "default_min_roster_size")]
    pub min_roster_size: usize,
    /// Directory exported CSV files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Keep last names such as "DeLuca" as entered instead of titlecasing them.
    #[serde(default = "default_preserve_mixed_case")]
    pub preserve_mixed_case_last_names: bool,
}

fn default_min_roster_size() -> usize {
    DEFAULT_MIN_ROSTER_SIZE
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_preserve_mixed_case() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_roster_size: default_min_roster_size(),
            output_dir: default_output_dir(),
            log_file_path: None,
            preserve_mixed_case_last_names: default_preserve_mixed_case(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `ROSTER_PREP_MIN_ROSTER_SIZE` - Override minimum roster size
    /// - `ROSTER_PREP_OUTPUT_DIR` - Override output directory
    /// - `ROSTER_PREP_LOG_FILE` - Override log file path
    pub fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path())
    }

    /// Same as [`Config::load`] but reads the file at `path`.
    pub fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(value) = std::env::var(env_vars::MIN_ROSTER_SIZE) {
            self.min_roster_size = value.trim().parse().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a non-negative integer, got '{value}'",
                    env_vars::MIN_ROSTER_SIZE
                ))
            })?;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self.min_roster_size, &self.output_dir, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Minimum Roster Size:");
        println!("{}", self.min_roster_size);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("────────────────────────────────────");
        println!("Preserve Mixed-Case Last Names:");
        println!("{}", self.preserve_mixed_case_last_names);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
