//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::latency::{FixedDelay, SharedLatency};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment mode. Development auto-connects the mock wallet at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    pub fn auto_connect_wallet(&self) -> bool {
        matches!(self, Mode::Development)
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built client (`trunk build` output)
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("inflamm-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ui_dir: default_ui_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Artificial latency of each mock action
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_delay")]
    pub wallet_delay_ms: u64,

    #[serde(default = "default_delay")]
    pub health_delay_ms: u64,

    #[serde(default = "default_delay")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_delay")]
    pub symptom_delay_ms: u64,
}

fn default_delay() -> u64 {
    1000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            wallet_delay_ms: default_delay(),
            health_delay_ms: default_delay(),
            reply_delay_ms: default_delay(),
            symptom_delay_ms: default_delay(),
        }
    }
}

impl DemoConfig {
    /// All delays set to zero
    pub fn instant() -> Self {
        Self {
            wallet_delay_ms: 0,
            health_delay_ms: 0,
            reply_delay_ms: 0,
            symptom_delay_ms: 0,
        }
    }

    pub fn wallet_latency(&self) -> SharedLatency {
        FixedDelay::from_millis(self.wallet_delay_ms).shared()
    }

    pub fn health_latency(&self) -> SharedLatency {
        FixedDelay::from_millis(self.health_delay_ms).shared()
    }

    pub fn reply_latency(&self) -> SharedLatency {
        FixedDelay::from_millis(self.reply_delay_ms).shared()
    }

    pub fn symptom_latency(&self) -> SharedLatency {
        FixedDelay::from_millis(self.symptom_delay_ms).shared()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("inflamm").join("config.toml")),
            Some(PathBuf::from("/etc/inflamm/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("INFLAMM_MODE") {
            self.mode = mode.parse()?;
        }

        // Server overrides
        if let Some(host) = lookup("INFLAMM_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INFLAMM_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = lookup("INFLAMM_UI_DIR") {
            self.server.ui_dir = PathBuf::from(dir);
        }

        // Demo overrides
        if let Some(delay) = lookup("INFLAMM_REPLY_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.demo.reply_delay_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("INFLAMM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("INFLAMM_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid mode {0:?}, expected \"development\" or \"production\"")]
    InvalidMode(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# InflammAI Configuration
#
# Environment variables override these settings:
# - INFLAMM_MODE
# - INFLAMM_HOST
# - INFLAMM_PORT
# - INFLAMM_UI_DIR
# - INFLAMM_REPLY_DELAY_MS
# - INFLAMM_LOG_LEVEL
# - INFLAMM_LOG_FORMAT

# development auto-connects the mock wallet at startup
mode = "development"

[server]
# HTTP server host
host = "0.0.0.0"

# HTTP server port
port = 8084

# Built client app served at / and /demo
ui_dir = "inflamm-ui/dist"

[demo]
# Artificial latency of each mock action (ms)
wallet_delay_ms = 1000
health_delay_ms = 1000
reply_delay_ms = 1000
symptom_delay_ms = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.server.addr(), "0.0.0.0:8084");
        assert_eq!(config.server.ui_dir, PathBuf::from("inflamm-ui/dist"));
        assert_eq!(config.demo.reply_delay_ms, 1000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.demo.symptom_delay_ms, 1000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
mode = "production"

[demo]
reply_delay_ms = 0
"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Production);
        assert!(!config.mode.auto_connect_wallet());
        assert_eq!(config.demo.reply_delay_ms, 0);
        assert_eq!(config.demo.wallet_delay_ms, 1000);
        assert_eq!(config.server.port, 8084);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/inflamm.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"staging\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("INFLAMM_MODE", "prod"),
            ("INFLAMM_PORT", "9999"),
            ("INFLAMM_UI_DIR", "/srv/inflamm"),
            ("INFLAMM_REPLY_DELAY_MS", "250"),
            ("INFLAMM_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.ui_dir, PathBuf::from("/srv/inflamm"));
        assert_eq!(config.demo.reply_delay_ms, 250);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_mode_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "INFLAMM_MODE").then(|| "staging".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(_)));
    }
}
