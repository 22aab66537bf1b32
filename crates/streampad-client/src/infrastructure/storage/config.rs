//! TOML-based configuration for the client.
//!
//! Reads and writes [`AppConfig`] at the platform-appropriate location:
//! - Windows:  `%APPDATA%\StreamPad\config.toml`
//! - Linux:    `~/.config/streampad/config.toml`
//! - macOS:    `~/Library/Application Support/StreamPad/config.toml`
//!
//! Every field carries a serde default so a missing file, or a file written
//! by an older build, still loads cleanly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use streampad_core::{ScaleError, StreamScale};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level client configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    /// Builds the mouse scaling factor from the surface and stream sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::ZeroDimension`] when the config contains a zero
    /// dimension.
    pub fn stream_scale(&self) -> Result<StreamScale, ScaleError> {
        StreamScale::new(
            self.surface.width,
            self.surface.height,
            self.stream.width,
            self.stream.height,
        )
    }
}

/// General client behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Remote stream parameters requested from the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamConfig {
    /// Stream width in pixels.
    #[serde(default = "default_stream_width")]
    pub width: u32,
    /// Stream height in pixels.
    #[serde(default = "default_stream_height")]
    pub height: u32,
    /// Target frame rate.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Target bitrate in kilobits per second.
    #[serde(default = "default_bitrate_kbps")]
    pub bitrate_kbps: u32,
}

/// Size of the local surface that input coordinates arrive in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceConfig {
    #[serde(default = "default_surface_width")]
    pub width: u32,
    #[serde(default = "default_surface_height")]
    pub height: u32,
}

/// Input capture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Whether to attach the privileged raw-input watcher (requires a
    /// platform backend and elevated permissions).
    #[serde(default)]
    pub raw_capture: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_stream_width() -> u32 {
    1920
}
fn default_stream_height() -> u32 {
    1080
}
fn default_fps() -> u32 {
    60
}
fn default_bitrate_kbps() -> u32 {
    10_000
}
fn default_surface_width() -> u32 {
    1280
}
fn default_surface_height() -> u32 {
    720
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            width: default_stream_width(),
            height: default_stream_height(),
            fps: default_fps(),
            bitrate_kbps: default_bitrate_kbps(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { raw_capture: false }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let dir = platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)?;
    Ok(dir.join("config.toml"))
}

/// Loads [`AppConfig`] from disk, returning the defaults if the file does
/// not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("StreamPad"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("streampad"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("StreamPad")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
