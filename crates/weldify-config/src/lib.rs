//! Configuration management for Weldify.
//!
//! Parses `weldify.toml` with serde and discovers the file in the current
//! directory or any parent. CLI flags are applied on top via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` (error if unset) and `${VAR:-default}`.
//! Expanded fields:
//! - `assistant.api_key`
//! - `assistant.model`
//! - `assistant.base_url`
//! - `storage.data_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "weldify.toml";

/// Data directory used when the config does not name one.
const DEFAULT_DATA_DIR: &str = ".weldify";

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the assistant API key.
    pub api_key: Option<String>,
    /// Override the assistant model.
    pub model: Option<String>,
    /// Override the data directory.
    pub data_dir: Option<PathBuf>,
    /// Override the currency prefix.
    pub currency: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Assistant configuration.
    pub assistant: AssistantConfig,
    /// Storage configuration (path as written in TOML).
    storage: StorageConfigRaw,
    /// Calculator defaults.
    pub calculators: CalculatorsConfig,

    /// Resolved storage configuration (set after loading).
    #[serde(skip)]
    pub storage_resolved: StorageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Text generation service settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// API key; empty disables the assistant.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Service base URL.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl AssistantConfig {
    /// API key, if one is configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: "${GEMINI_API_KEY:-}".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StorageConfigRaw {
    data_dir: Option<String>,
}

/// Resolved storage configuration with an absolute data directory.
#[derive(Debug, Default)]
pub struct StorageConfig {
    /// Directory holding the `<key>.json` data files.
    pub data_dir: PathBuf,
}

/// Calculator defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CalculatorsConfig {
    /// Currency prefix for money figures.
    pub currency: String,
    /// Material density (g/cm³) used when none is given.
    pub default_density: f64,
    /// Deposition efficiency (%) used when none is given.
    pub default_efficiency: f64,
}

impl Default for CalculatorsConfig {
    fn default() -> Self {
        Self {
            currency: "€".to_owned(),
            default_density: 7.85,
            default_efficiency: 85.0,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `assistant.api_key`).
        field: String,
        /// Error message (e.g. `${GEMINI_API_KEY} not set`).
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `weldify.toml` in the current directory and its parents, falling
    /// back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            let mut config = Self::default_with_cwd();
            config.expand_env_vars()?;
            config
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_key) = &settings.api_key {
            self.assistant.api_key.clone_from(api_key);
        }
        if let Some(model) = &settings.model {
            self.assistant.model.clone_from(model);
        }
        if let Some(data_dir) = &settings.data_dir {
            self.storage_resolved.data_dir.clone_from(data_dir);
        }
        if let Some(currency) = &settings.currency {
            self.calculators.currency.clone_from(currency);
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            assistant: AssistantConfig::default(),
            storage: StorageConfigRaw::default(),
            calculators: CalculatorsConfig::default(),
            storage_resolved: StorageConfig {
                data_dir: base.join(DEFAULT_DATA_DIR),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_assistant()?;
        self.validate_calculators()?;
        Ok(())
    }

    fn validate_assistant(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.assistant.model, "assistant.model")?;
        require_non_empty(&self.assistant.base_url, "assistant.base_url")?;
        require_http_url(&self.assistant.base_url, "assistant.base_url")?;
        if self.assistant.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "assistant.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_calculators(&self) -> Result<(), ConfigError> {
        let calc = &self.calculators;
        require_non_empty(&calc.currency, "calculators.currency")?;

        if !(calc.default_density.is_finite() && calc.default_density > 0.0) {
            return Err(ConfigError::Validation(
                "calculators.default_density must be greater than 0".to_owned(),
            ));
        }
        if !(calc.default_efficiency > 0.0 && calc.default_efficiency <= 100.0) {
            return Err(ConfigError::Validation(
                "calculators.default_efficiency must be greater than 0 and at most 100"
                    .to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let assistant = &mut self.assistant;
        assistant.api_key = expand::expand_env(&assistant.api_key, "assistant.api_key")?;
        assistant.model = expand::expand_env(&assistant.model, "assistant.model")?;
        assistant.base_url = expand::expand_env(&assistant.base_url, "assistant.base_url")?;

        if let Some(ref data_dir) = self.storage.data_dir {
            self.storage.data_dir = Some(expand::expand_env(data_dir, "storage.data_dir")?);
        }

        Ok(())
    }

    /// Resolve the data directory against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let data_dir = self.storage.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR);
        self.storage_resolved = StorageConfig {
            data_dir: config_dir.join(data_dir),
        };
    }
}
