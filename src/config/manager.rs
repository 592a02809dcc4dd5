use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{
    Client, Model, TranslateOptions, validate_language, validate_source_language,
};

/// Default settings in the `[gtrans]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language (`auto` to detect).
    pub source: Option<String>,
    /// Default target language.
    pub target: Option<String>,
    /// Default response model.
    pub model: Option<Model>,
    /// Default client identity.
    pub client: Option<Client>,
    /// Translation endpoint override.
    pub base_url: Option<String>,
    /// Text-to-speech endpoint override.
    pub audio_url: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtrans/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtrans: DefaultsConfig,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    pub model: Option<Model>,
    pub client: Option<Client>,
    pub base_url: Option<String>,
}

/// Resolves translation options by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if a resolved language code is not supported.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<TranslateOptions> {
    let defaults = &config_file.gtrans;
    let mut resolved = TranslateOptions::new();

    if let Some(source) = options.source.as_ref().or(defaults.source.as_ref()) {
        validate_source_language(source)?;
        resolved = resolved.with_source(source);
    }

    if let Some(target) = options.target.as_ref().or(defaults.target.as_ref()) {
        validate_language(target)?;
        resolved = resolved.with_target(target);
    }

    if let Some(model) = options.model.or(defaults.model) {
        resolved = resolved.with_model(model);
    }

    if let Some(client) = options.client.or(defaults.client) {
        resolved = resolved.with_client(client);
    }

    if let Some(base_url) = options.base_url.as_ref().or(defaults.base_url.as_ref()) {
        resolved = resolved.with_base_url(base_url);
    }

    if let Some(audio_url) = &defaults.audio_url {
        resolved = resolved.with_audio_url(audio_url);
    }

    Ok(resolved)
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtrans/config.toml`
    /// or `~/.config/gtrans/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
