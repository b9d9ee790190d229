//! Configuration management for Blockwise.
//!
//! Parses `blockwise.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `render.root_class`
//! - `render.pointer`

mod expand;

use std::path::{Path, PathBuf};

use blockwise_renderer::{BlockRenderer, ClassNames, TextEscaping};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override root container class.
    pub root_class: Option<String>,
    /// Override text escaping.
    pub escape_text: Option<bool>,
    /// Override whether class attributes are emitted.
    pub classes_enabled: Option<bool>,
    /// Override JSON pointer to the blocks array.
    pub pointer: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blockwise.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Per-element class overrides. Missing keys keep their defaults.
    pub classes: ClassNames,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Class attached to a wrapping `<div>`.
    pub root_class: Option<String>,
    /// HTML-escape text payloads instead of trusting them.
    pub escape_text: bool,
    /// Emit class attributes. `false` strips every class.
    pub classes: bool,
    /// JSON pointer selecting the blocks array inside the input
    /// (e.g. `/data/attributes/content`).
    pub pointer: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root_class: None,
            escape_text: false,
            classes: true,
            pointer: None,
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
        /// Config field path (e.g., "`render.root_class`").
        field: String,
        /// Error message (e.g., "${`THEME`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blockwise.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take precedence
    /// over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Build a renderer from this configuration.
    #[must_use]
    pub fn renderer(&self) -> BlockRenderer {
        let classes = if self.render.classes {
            self.classes.clone()
        } else {
            ClassNames::none()
        };
        let escaping = if self.render.escape_text {
            TextEscaping::Escape
        } else {
            TextEscaping::Trusted
        };

        let renderer = BlockRenderer::new()
            .with_class_names(classes)
            .with_text_escaping(escaping);
        match &self.render.root_class {
            Some(class) => renderer.with_root_class(class.clone()),
            None => renderer,
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root_class) = &settings.root_class {
            self.render.root_class = Some(root_class.clone());
        }
        if let Some(escape_text) = settings.escape_text {
            self.render.escape_text = escape_text;
        }
        if let Some(classes_enabled) = settings.classes_enabled {
            self.render.classes = classes_enabled;
        }
        if let Some(pointer) = &settings.pointer {
            self.render.pointer = Some(pointer.clone());
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pointer) = &self.render.pointer
            && !pointer.is_empty()
            && !pointer.starts_with('/')
        {
            return Err(ConfigError::Validation(
                "render.pointer must be empty or start with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref class) = self.render.root_class {
            self.render.root_class = Some(expand::expand_env(class, "render.root_class")?);
        }
        if let Some(ref pointer) = self.render.pointer {
            self.render.pointer = Some(expand::expand_env(pointer, "render.pointer")?);
        }
        Ok(())
    }
}
