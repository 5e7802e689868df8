use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::models::ScoringWeights;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ScoringSettings {
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_weight_sum"))]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub skill: f64,
    #[serde(default = "default_language_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub language: f64,
    #[serde(default = "default_accommodation_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub accommodation: f64,
    #[serde(default = "default_salary_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub salary: f64,
    #[serde(default = "default_location_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            language: default_language_weight(),
            accommodation: default_accommodation_weight(),
            salary: default_salary_weight(),
            location: default_location_weight(),
        }
    }
}

impl WeightsConfig {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            skill: self.skill,
            language: self.language,
            accommodation: self.accommodation,
            salary: self.salary,
            location: self.location,
        }
    }
}

fn default_skill_weight() -> f64 { 0.35 }
fn default_language_weight() -> f64 { 0.15 }
fn default_accommodation_weight() -> f64 { 0.15 }
fn default_salary_weight() -> f64 { 0.10 }
fn default_location_weight() -> f64 { 0.25 }

fn validate_weight_sum(weights: &WeightsConfig) -> Result<(), ValidationError> {
    let sum = weights.to_weights().sum();
    if (sum - 1.0).abs() > 1e-6 {
        let mut err = ValidationError::new("weight_sum");
        err.message = Some(format!("scoring weights must sum to 1.0, got {:.3}", sum).into());
        return Err(err);
    }
    Ok(())
}

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HELPER__), after reading `.env`
    pub fn load() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HELPER__SCORING__WEIGHTS__SKILL -> scoring.weights.skill
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        tracing::debug!("Loaded settings: {:?}", settings.scoring.weights);
        Ok(settings)
    }

    pub fn weights(&self) -> ScoringWeights {
        self.scoring.weights.to_weights()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("HELPER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
