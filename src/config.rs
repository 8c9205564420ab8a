use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    /// JSON or TOML roster file; the built-in sample roster is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_attempts_per_record")]
    pub attempts_per_record: u32,
    #[serde(default = "default_min_score_hundredths")]
    pub min_score_hundredths: u32,
    #[serde(default = "default_max_score_hundredths")]
    pub max_score_hundredths: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            attempts_per_record: default_attempts_per_record(),
            min_score_hundredths: default_min_score_hundredths(),
            max_score_hundredths: default_max_score_hundredths(),
        }
    }
}

fn default_attempts_per_record() -> u32 { 10 }
fn default_min_score_hundredths() -> u32 { 5000 }
fn default_max_score_hundredths() -> u32 { 10000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FIO)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FIO__MATCHING__ATTEMPTS_PER_RECORD -> matching.attempts_per_record
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FIO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
