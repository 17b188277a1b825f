//! cmplx-glsl configuration
//!
//! # Lookup order
//!
//! ```text
//! 1. --config PATH (must exist)
//! 2. $XDG_CONFIG_HOME/cmplx-glsl/config.toml
//! 3. $HOME/.config/cmplx-glsl/config.toml
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cmplx_glsl::util::config::load_config;
//!
//! let config = load_config(None).unwrap();
//! ```

use crate::frontend::parser::PrecedenceMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "cmplx-glsl";

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Compiler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompilerConfig {
    /// Operator precedence table
    #[serde(default)]
    pub precedence: PrecedenceMode,
}

/// Error rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Colored output
    #[serde(default = "default_true")]
    pub colors: bool,
    /// Echo the formula with a caret under the error
    #[serde(default = "default_true")]
    pub show_source: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            colors: true,
            show_source: true,
        }
    }
}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// History file path; no history is kept when unset
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_history_size() -> usize {
    1000
}

fn default_prompt() -> String {
    "glsl> ".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            history_file: None,
            prompt: default_prompt(),
        }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join(APP_DIR));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join(APP_DIR));
    }

    // Windows
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join(APP_DIR));
    }

    None
}

/// Get the user config file path
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load configuration
///
/// An explicit path must exist; the user config file is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load configuration from a file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Save configuration, creating parent directories
pub fn save_config(
    config: &Config,
    path: &Path,
) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(io_error)?;
    Ok(())
}

/// Save configuration to the user config file
pub fn save_user_config(config: &Config) -> Result<(), ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config(config, &path)
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Cannot determine config directory")]
    NoConfigDir,
}
