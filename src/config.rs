//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\upc-labeler\config.toml
//! - macOS: ~/Library/Application Support/upc-labeler/config.toml
//! - Linux: ~/.config/upc-labeler/config.toml
//!
//! The config file is human-readable and editable. Every setting has a
//! working default, so a missing or partial file is never an error.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print queue settings
    pub printer: PrinterConfig,

    /// Catalog lookup settings
    pub lookup: LookupConfig,

    /// Label rendering settings
    pub label: LabelConfig,
}

/// Print queue settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// CUPS queue name the labels are submitted to
    pub queue: String,

    /// Job title shown in the print queue
    pub job_title: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            queue: "Zebra_Technologies_ZTC_ZD410_203dpi_ZPL_printserver".to_string(),
            job_title: "Label".to_string(),
        }
    }
}

/// Catalog lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// UPCitemdb lookup endpoint
    pub endpoint: String,

    /// Request timeout in seconds for lookups and photo downloads
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.upcitemdb.com/prod/trial/lookup".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Label rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Label width in pixels
    pub width: u32,

    /// Horizontal padding inside the label
    pub padding: u32,

    /// Height reserved for the barcode (or placeholder) band
    pub band_height: u32,

    /// Explicit font file to use for label text (falls back to a
    /// system font scan when unset or unreadable)
    pub font_path: Option<PathBuf>,

    /// Directory the barcode and label images are written to.
    /// Files are overwritten on every scan.
    pub work_dir: PathBuf,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            width: 400,
            padding: 10,
            band_height: 200,
            font_path: None,
            work_dir: PathBuf::from("."),
        }
    }
}

impl LabelConfig {
    /// Base path for the barcode raster (the generator appends `.png`).
    pub fn barcode_base_path(&self) -> PathBuf {
        self.work_dir.join("barcode")
    }

    /// Path the composed label is written to.
    pub fn label_path(&self) -> PathBuf {
        self.work_dir.join("label.png")
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("upc-labeler"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
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

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    // Ensure directory exists
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

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
