//! Configuration file support.
//!
//! Settings are stored as versioned JSON: in the user config directory on
//! native builds and in localStorage in the browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DESKTOP_BREAKPOINT, OVERLAY_TRANSITION};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Layout thresholds shared with the page stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Widths above this (logical px) render inline; at or below use the overlay
    #[serde(default = "default_desktop_breakpoint")]
    pub desktop_breakpoint: f64,

    /// Overlay CSS transition duration in milliseconds
    #[serde(default = "default_overlay_transition_ms")]
    pub overlay_transition_ms: u64,
}

fn default_desktop_breakpoint() -> f64 {
    DESKTOP_BREAKPOINT
}

fn default_overlay_transition_ms() -> u64 {
    OVERLAY_TRANSITION.as_millis() as u64
}

impl LayoutConfig {
    /// Overlay transition as a duration.
    pub fn overlay_transition(&self) -> Duration {
        Duration::from_millis(self.overlay_transition_ms)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: default_desktop_breakpoint(),
            overlay_transition_ms: default_overlay_transition_ms(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Layout thresholds
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_app_name() -> String {
    "Folio".to_string()
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            layout: LayoutConfig::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        let breakpoint = config.layout.desktop_breakpoint;
        if breakpoint.is_nan() || breakpoint <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(breakpoint));
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "folio-config.json"
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("folio").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("folio")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// LocalStorage key for WASM config.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "folio-config";

    /// Try to load configuration from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Load from the platform location, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let loaded = Self::load_from_default_path();
        #[cfg(target_arch = "wasm32")]
        let loaded = Self::load_from_local_storage();

        loaded.unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Breakpoint must be a positive width
    #[error("Invalid desktop breakpoint: {0}")]
    InvalidBreakpoint(f64),
}
