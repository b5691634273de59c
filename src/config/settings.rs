use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;
use crate::error::Error;
use crate::types::{OutputFormat, Result};

/// Environment variable naming an explicit configuration file
pub const CONFIG_FILE_ENV: &str = "CERTREQ_CONFIG";

/// Prefix of environment overrides, e.g. `CERTREQ__GENERAL__LOG_LEVEL`
pub const ENV_PREFIX: &str = "CERTREQ";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General configuration
    #[serde(default)]
    pub general: GeneralConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Manifest inspection configuration
    #[serde(default)]
    pub inspect: InspectConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Enable structured (JSON) logging
    pub structured_logging: bool,
}

/// Manifest inspection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectConfig {
    /// CertificateRequest manifest to read
    pub manifest_path: Option<PathBuf>,

    /// Output format (text, json)
    #[serde(default)]
    pub output: OutputFormat,
}

impl Settings {
    /// Load configuration from environment variables and configuration files
    pub fn load() -> Result<Self> {
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);
        Self::load_from(config_file.as_deref(), ENV_PREFIX)
    }

    /// Load configuration from an optional explicit file and environment
    /// variables carrying `env_prefix`
    pub fn load_from(config_file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // Add default values
        builder = builder.add_source(Config::try_from(&Self::default())?);

        // Add configuration from files
        match config_file {
            Some(path) => builder = builder.add_source(File::from(path)),
            None => builder = builder.add_source(File::with_name("config/default").required(false)),
        }

        // Add environment variables
        builder = builder.add_source(Environment::with_prefix(env_prefix).separator("__"));

        // Build and convert
        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Configured log level
    pub fn log_level(&self) -> Result<Level> {
        let level = self.general.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "Unknown log level '{}', expected one of {}",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Level::from_str(&level)
            .map_err(|e| Error::Config(format!("Invalid log level '{}': {}", level, e)))
    }

    /// Check if configuration is valid
    pub fn validate(&self) -> Result<()> {
        self.log_level()?;

        if let Some(path) = &self.inspect.manifest_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("Manifest path cannot be empty".into()));
            }
        }

        Ok(())
    }
}
