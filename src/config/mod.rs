//! Configuration management for catalogo.
//!
//! Configuration is read from `~/.config/catalogo/config.toml` unless a path
//! is given explicitly. If the default file doesn't exist, one with comments
//! is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://www.comandato.com/XMLData/atomfeed.xml";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
}

/// Where the catalog comes from and how hard to try fetching it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed URL
    pub url: String,

    /// Connection timeout in seconds (default: 30)
    pub connect_timeout_secs: u64,

    /// Timeout for each read from the connection in seconds (default: 60)
    pub read_timeout_secs: u64,

    /// Optional cap on a whole request in seconds (default: none, only the
    /// connect and read timeouts apply)
    pub request_timeout_secs: Option<u64>,

    /// Attempts before giving up on a timing-out feed (default: 3)
    pub max_attempts: u32,

    /// Backoff after attempt n is n times this many seconds (default: 2)
    pub backoff_step_secs: u64,

    /// User agent string to send
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            connect_timeout_secs: 30,
            read_timeout_secs: 60,
            request_timeout_secs: None,
            max_attempts: 3,
            backoff_step_secs: 2,
            user_agent: concat!("catalogo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn backoff_step(&self) -> Duration {
        Duration::from_secs(self.backoff_step_secs)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/catalogo/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("catalogo").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# catalogo configuration

[feed]
# Atom feed listing the catalog
url = "https://www.comandato.com/XMLData/atomfeed.xml"

# Seconds to wait for a connection
connect_timeout_secs = 30

# Seconds to wait on each read once connected
read_timeout_secs = 60

# Optional cap on a whole request, in seconds. Unset by default: only the
# connect and per-read timeouts above apply, with no overall limit.
# request_timeout_secs = 90

# A timing-out feed is tried this many times in total. Other HTTP
# failures are reported straight away.
max_attempts = 3

# Wait n * backoff_step_secs after the n-th timeout
backoff_step_secs = 2
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
