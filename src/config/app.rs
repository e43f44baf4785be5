//! Main application configuration
//!
//! This module defines the primary configuration structures for elo-lists,
//! including TOML file loading, environment variable overrides and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where ranking lists are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Directory holding one ranking list per file
    pub lists_dir: PathBuf,
}

/// Report rendering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-lists".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            lists_dir: PathBuf::from("list_rankings"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing sections use defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(dir) = env::var("LISTS_DIR") {
            config.input.lists_dir = PathBuf::from(dir);
        }
        if let Ok(format) = env::var("OUTPUT_FORMAT") {
            config.output.format = format
                .parse()
                .map_err(|_| anyhow!("Invalid OUTPUT_FORMAT value: {}", format))?;
        }

        // Rating settings
        if let Ok(rating) = env::var("DEFAULT_RATING") {
            config.rating.default_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_RATING value: {}", rating))?;
        }
        if let Ok(scale) = env::var("SCALE_FACTOR") {
            config.rating.scale_factor = scale
                .parse()
                .map_err(|_| anyhow!("Invalid SCALE_FACTOR value: {}", scale))?;
        }
        if let Ok(iters) = env::var("RR_ITERS") {
            config.rating.iterations = iters
                .parse()
                .map_err(|_| anyhow!("Invalid RR_ITERS value: {}", iters))?;
        }
        if let Ok(min) = env::var("MIN_AGGREGATE_RATING") {
            config.rating.min_aggregate_rating = min
                .parse()
                .map_err(|_| anyhow!("Invalid MIN_AGGREGATE_RATING value: {}", min))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.input.lists_dir.as_os_str().is_empty() {
        return Err(anyhow!("Lists directory cannot be empty"));
    }

    config.rating.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.input.lists_dir, PathBuf::from("list_rankings"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_lists_dir() {
        let mut config = AppConfig::default();
        config.input.lists_dir = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_rating_section_rejected() {
        let mut config = AppConfig::default();
        config.rating.scale_factor = -400.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
log_level = "debug"

[input]
lists_dir = "/tmp/lists"

[output]
format = "json"

[rating]
iterations = 10
min_aggregate_rating = 900.0

[[rating.k_factor_tiers]]
max_rating = 1500.0
k = 40.0
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.service.name, "elo-lists");
        assert_eq!(config.input.lists_dir, PathBuf::from("/tmp/lists"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.rating.iterations, 10);
        assert_eq!(config.rating.min_aggregate_rating, 900.0);
        assert_eq!(config.rating.default_rating, 1000.0);
        assert_eq!(config.rating.k_factor_tiers.len(), 1);
        assert_eq!(config.rating.k_factor_tiers[0].k, 40.0);
    }

    const ENV_VARS: [&str; 7] = [
        "LOG_LEVEL",
        "LISTS_DIR",
        "OUTPUT_FORMAT",
        "DEFAULT_RATING",
        "SCALE_FACTOR",
        "RR_ITERS",
        "MIN_AGGREGATE_RATING",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    // Single test so the process environment is never shared between threads
    #[test]
    fn test_from_env() {
        clear_env();

        env::set_var("RR_ITERS", "7");
        env::set_var("MIN_AGGREGATE_RATING", "900");
        env::set_var("LISTS_DIR", "/srv/lists");
        env::set_var("OUTPUT_FORMAT", "json");
        let config = AppConfig::from_env();

        env::set_var("RR_ITERS", "abc");
        let bad_iters = AppConfig::from_env();

        env::set_var("RR_ITERS", "7");
        env::set_var("SCALE_FACTOR", "-1");
        let bad_scale = AppConfig::from_env();

        clear_env();

        let config = config.unwrap();
        assert_eq!(config.rating.iterations, 7);
        assert_eq!(config.rating.min_aggregate_rating, 900.0);
        assert_eq!(config.input.lists_dir, PathBuf::from("/srv/lists"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.rating.default_rating, 1000.0);

        let err = bad_iters.unwrap_err();
        assert!(err.to_string().contains("RR_ITERS"));

        assert!(bad_scale.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        assert!(AppConfig::from_file(Path::new("/nonexistent/elo-lists.toml")).is_err());
    }
}
