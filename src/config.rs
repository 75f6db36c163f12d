use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub trainers: TrainerDataSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainerDataSettings {
    pub data_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_goal_weight")]
    pub goal_alignment: f64,
    #[serde(default = "default_style_weight")]
    pub style_compatibility: f64,
    #[serde(default = "default_personality_weight")]
    pub personality_fit: f64,
    #[serde(default = "default_schedule_weight")]
    pub schedule_match: f64,
    #[serde(default = "default_experience_weight")]
    pub experience_level: f64,
    #[serde(default = "default_budget_weight")]
    pub budget_fit: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            goal_alignment: default_goal_weight(),
            style_compatibility: default_style_weight(),
            personality_fit: default_personality_weight(),
            schedule_match: default_schedule_weight(),
            experience_level: default_experience_weight(),
            budget_fit: default_budget_weight(),
        }
    }
}

impl From<WeightsConfig> for MatchWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            goal_alignment: config.goal_alignment,
            style_compatibility: config.style_compatibility,
            personality_fit: config.personality_fit,
            schedule_match: config.schedule_match,
            experience_level: config.experience_level,
            budget_fit: config.budget_fit,
        }
    }
}

fn default_goal_weight() -> f64 { 0.25 }
fn default_style_weight() -> f64 { 0.20 }
fn default_personality_weight() -> f64 { 0.15 }
fn default_schedule_weight() -> f64 { 0.20 }
fn default_experience_weight() -> f64 { 0.10 }
fn default_budget_weight() -> f64 { 0.10 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FITMATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("trainers.data_path", "data/trainers.json")?
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITMATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
