//! Configuration management for the staff directory.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Command-line flags in the binary override them.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

pub const DATA_FILE_VAR: &str = "STAFF_DIRECTORY_DATA_FILE";
pub const AUDIT_LOG_VAR: &str = "STAFF_DIRECTORY_AUDIT_LOG";
pub const SEED_SAMPLE_VAR: &str = "STAFF_DIRECTORY_SEED_SAMPLE";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_DATA_FILE: &str = "data/staffdirectory.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the staff directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON data file (default: `data/staffdirectory.json`)
    pub data_file: PathBuf,

    /// Audit trail file; `None` disables auditing
    pub audit_log: Option<PathBuf>,

    /// Seed the sample roster when the data file does not exist (default: true)
    pub seed_sample: bool,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `STAFF_DIRECTORY_DATA_FILE`: data file path
    /// - `STAFF_DIRECTORY_AUDIT_LOG`: audit trail path (unset: no audit)
    /// - `STAFF_DIRECTORY_SEED_SAMPLE`: `true`/`false`, seed sample data
    /// - `LOG_LEVEL`: trace, debug, info, warn, error or off
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();

        let data_file = match env::var(DATA_FILE_VAR) {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: DATA_FILE_VAR.to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val.trim()),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let audit_log = env::var(AUDIT_LOG_VAR)
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        let seed_sample = Self::parse_env_bool(SEED_SAMPLE_VAR, true)?;

        let log_level = env::var(LOG_LEVEL_VAR)
            .map(|val| val.trim().to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        Ok(Config {
            data_file,
            audit_log,
            seed_sample,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            audit_log: None,
            seed_sample: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in [DATA_FILE_VAR, AUDIT_LOG_VAR, SEED_SAMPLE_VAR, LOG_LEVEL_VAR] {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data/staffdirectory.json"));
        assert_eq!(config.audit_log, None);
        assert!(config.seed_sample);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();
        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(DATA_FILE_VAR, " /tmp/staff.json ");
        guard.set(AUDIT_LOG_VAR, "/tmp/audit.log");
        guard.set(SEED_SAMPLE_VAR, "No");
        guard.set(LOG_LEVEL_VAR, "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/staff.json"));
        assert_eq!(config.audit_log, Some(PathBuf::from("/tmp/audit.log")));
        assert!(!config.seed_sample);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_blank_audit_log_disables_audit() {
        let mut guard = EnvGuard::new();
        guard.set(AUDIT_LOG_VAR, "  ");
        assert_eq!(Config::from_env().unwrap().audit_log, None);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bool() {
        let mut guard = EnvGuard::new();
        guard.set(SEED_SAMPLE_VAR, "maybe");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, SEED_SAMPLE_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set(LOG_LEVEL_VAR, "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, LOG_LEVEL_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_data_file() {
        let mut guard = EnvGuard::new();
        guard.set(DATA_FILE_VAR, "");
        assert!(Config::from_env().is_err());
    }
}
