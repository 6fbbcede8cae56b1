//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("New_healthcare-dataset-stroke-data.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl ApiConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable (for development)
    #[default]
    Pretty,
    /// One JSON object per line (for production)
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since the subscriber is built from the result;
    /// call [`LoadedConfig::log`] once logging is up.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("stroke-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/stroke-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// First existing file that parses wins, then overrides apply
    fn load_first(paths: &[PathBuf], var: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut config = Config::default();
        let mut source = None;
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(loaded) => {
                    config = loaded;
                    source = Some(path.clone());
                    break;
                }
                Err(e) => warnings.push(e.to_string()),
            }
        }

        warnings.extend(config.apply_overrides(var));
        LoadedConfig {
            config,
            source,
            warnings,
        }
    }

    /// Returns a warning for each override that was ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(path) = var("STROKE_DASHBOARD_DATA_PATH") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Some(host) = var("STROKE_DASHBOARD_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("STROKE_DASHBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid STROKE_DASHBOARD_PORT '{}'", port)),
            }
        }

        if let Some(level) = var("STROKE_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("STROKE_DASHBOARD_LOG_FORMAT") {
            match format.parse::<LogFormat>() {
                Ok(f) => self.logging.format = f,
                Err(e) => warnings.push(format!("Ignoring STROKE_DASHBOARD_LOG_FORMAT: {}", e)),
            }
        }

        warnings
    }
}

/// Outcome of [`Config::load_default`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Files that failed to load and overrides that were ignored
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Report where the configuration came from
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Stroke Dashboard Configuration
#
# Environment variables override these settings:
# - STROKE_DASHBOARD_DATA_PATH
# - STROKE_DASHBOARD_HOST
# - STROKE_DASHBOARD_PORT
# - STROKE_DASHBOARD_LOG_LEVEL
# - STROKE_DASHBOARD_LOG_FORMAT

[dataset]
# CSV file loaded once at startup
path = "New_healthcare-dataset-stroke-data.csv"

[api]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
