//! Configuration for the portfolio viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Terminal"
    pub theme: String,

    /// Load certificate artwork only when scrolled into view.
    /// When false, everything loads at startup (correctness over performance).
    pub lazy_artwork: bool,

    /// Typewriter per-character delay in milliseconds
    pub typing_speed_ms: u64,

    /// Typewriter start delay in milliseconds
    pub typing_delay_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            lazy_artwork: true,
            typing_speed_ms: 150,
            typing_delay_ms: 1000,
            logging: LoggingConfig::default(),
        }
    }
}

/// File logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter: trace, debug, info, warn, error
    pub level: String,

    /// Whether to write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// File rotation cadence
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "folio.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (everything optional; absent keys keep defaults)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub lazy_artwork: Option<bool>,
    pub typing_speed_ms: Option<u64>,
    pub typing_delay_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// If config file exists but cannot be parsed. This is intentional -
    /// a broken config should fail fast with a clear error, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, delete the file and restart folio.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file_config(Self::load_file_config());

        // Theme: env > file > default
        if let Ok(theme) = std::env::var("FOLIO_THEME") {
            config.theme = theme;
        }

        // Lazy artwork toggle: env > file > default
        if let Ok(v) = std::env::var("FOLIO_LAZY_ARTWORK") {
            config.lazy_artwork = v != "0" && v.to_lowercase() != "false";
        }

        // Log directory: env > file > default
        if let Ok(dir) = std::env::var("FOLIO_LOG_DIR") {
            config.logging.file_dir = PathBuf::from(dir);
        }

        config
    }

    /// Merge a parsed config file over the defaults
    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        let defaults = Self::default();
        let file_logging = file.logging.unwrap_or_default();

        Self {
            theme: file.theme.unwrap_or(defaults.theme),
            lazy_artwork: file.lazy_artwork.unwrap_or(defaults.lazy_artwork),
            typing_speed_ms: file.typing_speed_ms.unwrap_or(defaults.typing_speed_ms),
            typing_delay_ms: file.typing_delay_ms.unwrap_or(defaults.typing_delay_ms),
            logging: LoggingConfig {
                level: file_logging.level.unwrap_or(defaults.logging.level),
                file_enabled: file_logging
                    .file_enabled
                    .unwrap_or(defaults.logging.file_enabled),
                file_dir: file_logging
                    .file_dir
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logging.file_dir),
                file_prefix: file_logging
                    .file_prefix
                    .unwrap_or(defaults.logging.file_prefix),
                file_rotation: file_logging
                    .file_rotation
                    .unwrap_or(defaults.logging.file_rotation),
            },
        }
    }

    /// Render the config as a commented TOML template.
    /// Single source of truth for `ensure_config_exists` and `config --reset`.
    pub fn to_toml(&self) -> String {
        let rotation = match self.logging.file_rotation {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        };

        format!(
            r#"# folio configuration
# Precedence: FOLIO_* environment variables > this file > built-in defaults

# Color theme: "Dark", "Light", "Terminal"
theme = "{theme}"

# Load certificate artwork only when it scrolls into view.
# Set to false to load everything at startup.
lazy_artwork = {lazy}

# Typewriter timing (milliseconds)
typing_speed_ms = {speed}
typing_delay_ms = {delay}

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides)
level = "{level}"
# Write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{rotation}"
"#,
            theme = self.theme,
            lazy = self.lazy_artwork,
            speed = self.typing_speed_ms,
            delay = self.typing_delay_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            rotation = rotation,
        )
    }
}
