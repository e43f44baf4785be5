//! Configuration management for elo-lists
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values for the rating pipeline.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{
    validate_config, AppConfig, InputSettings, OutputFormat, OutputSettings, ServiceSettings,
};
pub use rating::{KFactorTier, RatingConfig};
