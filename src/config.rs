use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://recruiting-datasets.s3.us-east-2.amazonaws.com/data_melp.json".to_string()
}
fn default_timeout_secs() -> u64 { 30 }

/// Search parameters the page would supply interactively
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// Center override; when absent the first locatable restaurant is used
    #[serde(default)]
    pub center_lat: Option<f64>,
    #[serde(default)]
    pub center_lng: Option<f64>,
    #[serde(default = "default_radius_m")]
    pub radius_m: f64,
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            center_lat: None,
            center_lng: None,
            radius_m: default_radius_m(),
            min_rating: default_min_rating(),
            max_rating: default_max_rating(),
            top_n: default_top_n(),
        }
    }
}

fn default_radius_m() -> f64 { 1000.0 }
fn default_min_rating() -> f64 { 4.0 }
fn default_max_rating() -> f64 { 5.0 }
fn default_top_n() -> usize { 5 }

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
    /// 4. Environment variables (prefixed with MELP_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MELP_SEARCH__RADIUS_M -> search.radius_m
            .add_source(
                Environment::with_prefix("MELP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MELP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
