//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\vibe-display\config.toml
//! - macOS: ~/Library/Application Support/vibe-display/config.toml
//! - Linux: ~/.config/vibe-display/config.toml
//!
//! The config file is human-readable and editable. Command-line flags and
//! environment variables override whatever it contains.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::ClientCredentials;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pub/sub channel settings
    pub channel: ChannelConfig,

    /// Where the lookup tables live
    pub tables: TablesConfig,

    /// Catalog API credentials
    pub credentials: Credentials,

    /// Display behaviour
    pub display: DisplayConfig,
}

/// Pub/sub channel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Topic shared by the devices and the display
    pub name: String,

    /// Device whose music changes drive the display
    pub primary_device_id: i64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: "dbsu10_serendipity".to_string(),
            primary_device_id: 1,
        }
    }
}

/// Lookup table locations. A location starting with `http://` or
/// `https://` is fetched over HTTP, anything else is a file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub songs: String,
    pub vibes: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            songs: "db/songs.csv".to_string(),
            vibes: "db/vibes.csv".to_string(),
        }
    }
}

/// Catalog API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub tidal_client_id: Option<String>,
    pub tidal_client_secret: Option<String>,
    /// RapidAPI key for the Deezer search endpoint
    pub rapidapi_key: Option<String>,
}

impl Credentials {
    pub fn spotify(&self) -> Option<ClientCredentials> {
        ClientCredentials::from_parts(
            self.spotify_client_id.as_deref(),
            self.spotify_client_secret.as_deref(),
        )
    }

    pub fn tidal(&self) -> Option<ClientCredentials> {
        ClientCredentials::from_parts(
            self.tidal_client_id.as_deref(),
            self.tidal_client_secret.as_deref(),
        )
    }
}

/// Display behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Drop results from pipelines a newer music change has superseded.
    /// Off by default: whichever pipeline finishes last wins the screen.
    pub discard_superseded: bool,

    /// Show the scrolling banner line under the song panel
    pub show_banner: bool,
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vibe-display"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path, with the same fallbacks as [`load`].
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
