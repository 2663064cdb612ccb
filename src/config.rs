use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Locations of the two JSON datasets loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_attractions_path")]
    pub attractions_path: String,
    #[serde(default = "default_bookings_path")]
    pub bookings_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            attractions_path: default_attractions_path(),
            bookings_path: default_bookings_path(),
        }
    }
}

fn default_attractions_path() -> String { "attractions.json".to_string() }
fn default_bookings_path() -> String { "bookings.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize { crate::core::DEFAULT_TOP_N }

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
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with RECOMMENDER__)
    /// 4. ATTRACTIONS_PATH / BOOKINGS_PATH
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECOMMENDER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings = apply_data_path_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("RECOMMENDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the plain ATTRACTIONS_PATH / BOOKINGS_PATH variables point at the datasets
fn apply_data_path_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("ATTRACTIONS_PATH") {
        builder = builder.set_override("data.attractions_path", path)?;
    }
    if let Ok(path) = env::var("BOOKINGS_PATH") {
        builder = builder.set_override("data.bookings_path", path)?;
    }

    builder.build()
}
