use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
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
pub struct SessionSettings {
    /// Hard cap on concurrently live sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Sessions idle for longer than this are evicted.
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_idle_ttl_secs() -> u64 { 1_800 }

#[derive(Debug, Clone, Deserialize)]
pub struct SwipeSettings {
    /// Delay before the transient swipe direction resets to null.
    #[serde(default = "default_feedback_reset_ms")]
    pub feedback_reset_ms: u64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            feedback_reset_ms: default_feedback_reset_ms(),
        }
    }
}

fn default_feedback_reset_ms() -> u64 { 300 }

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
    /// 4. Environment variables (prefixed with COLLAB_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COLLAB_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("COLLAB")
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
                Environment::with_prefix("COLLAB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
