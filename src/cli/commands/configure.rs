//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{InquireError, Select, Text};

use crate::config::{ConfigFile, ConfigManager, DefaultsConfig};
use crate::translation::{
    AUTO, Client, DEFAULT_BASE_URL, Model, SUPPORTED_LANGUAGES, TranslateOptions,
};
use crate::status;
use crate::ui::Style;

/// Runs the configure command to edit default settings.
///
/// Allows the user to interactively set the default languages, model, client and endpoint.
/// Escape or Ctrl+C at any prompt leaves the config file untouched.
pub fn run_configure() -> Result<()> {
    match run_configure_inner() {
        Err(e) if is_prompt_cancelled(&e) => {
            println!();
            status!("Configuration unchanged.");
            Ok(())
        }
        result => result,
    }
}

fn is_prompt_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

/// Prints the config file location and the current defaults.
pub fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    println!(
        "{} {}\n",
        Style::label("Config file:"),
        Style::secondary(manager.config_path().display())
    );
    print_current_defaults(&config);
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let current = &config.gtrans;
    let source = select_language("Default source language:", true, current.source.as_deref())?;
    let target = select_language("Default target language:", false, current.target.as_deref())?;

    if source == target {
        bail!("Source and target languages cannot be the same.");
    }

    let model = select_model(current.model)?;
    let client = select_client(current.client)?;
    let base_url = input_base_url(current.base_url.as_deref())?;

    config.gtrans = DefaultsConfig {
        source: Some(source),
        target: Some(target),
        model: Some(model),
        client: Some(client),
        base_url,
        audio_url: current.audio_url.clone(),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let defaults = &config.gtrans;
    let builtin = TranslateOptions::default();

    println!("{}", Style::header("Current defaults"));
    print_setting("source", defaults.source.as_deref(), builtin.source());
    print_setting("target", defaults.target.as_deref(), builtin.target());
    print_setting(
        "model",
        defaults.model.map(Model::as_str),
        builtin.model().as_str(),
    );
    print_setting(
        "client",
        defaults.client.map(Client::as_str),
        builtin.client().as_str(),
    );
    print_setting("base_url", defaults.base_url.as_deref(), builtin.base_url());
    print_setting("audio_url", defaults.audio_url.as_deref(), builtin.audio_url());
    println!();
}

fn print_setting(key: &str, value: Option<&str>, builtin: &str) {
    let shown = value.map_or_else(
        || Style::secondary(format!("{builtin} (built-in)")),
        Style::value,
    );
    println!("  {}  {}", Style::label(format!("{key:<9}")), shown);
}

fn select_language(prompt: &str, allow_auto: bool, default: Option<&str>) -> Result<String> {
    // Build options with format "code - Name"
    let mut codes: Vec<(&str, &str)> = Vec::with_capacity(SUPPORTED_LANGUAGES.len() + 1);
    if allow_auto {
        codes.push((AUTO, "Detect language"));
    }
    codes.extend_from_slice(SUPPORTED_LANGUAGES);

    let options: Vec<String> = codes
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let fallback = if allow_auto { AUTO } else { "en" };
    let default = default.unwrap_or(fallback);
    let default_index = codes
        .iter()
        .position(|(code, _)| *code == default)
        .unwrap_or(0);

    let selection = Select::new(prompt, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn select_model(default: Option<Model>) -> Result<Model> {
    let models = vec![Model::T, Model::Single];
    let default_index = default
        .and_then(|d| models.iter().position(|m| *m == d))
        .unwrap_or(0);

    let selection = Select::new("Default model:", models)
        .with_starting_cursor(default_index)
        .with_help_message("'single' returns more response data")
        .prompt()?;

    Ok(selection)
}

fn select_client(default: Option<Client>) -> Result<Client> {
    let clients = vec![Client::Gtx, Client::DictChromeEx];
    let default_index = default
        .and_then(|d| clients.iter().position(|c| *c == d))
        .unwrap_or(0);

    let selection = Select::new("Default client:", clients)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn input_base_url(default: Option<&str>) -> Result<Option<String>> {
    let url = Text::new("Translation endpoint:")
        .with_default(default.unwrap_or(DEFAULT_BASE_URL))
        .with_help_message("e.g. https://translate.googleapis.com/translate_a/")
        .prompt()?;

    let url = url.trim();
    if url.is_empty() || url == DEFAULT_BASE_URL {
        return Ok(None);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!("Endpoint must start with http:// or https://");
    }

    Ok(Some(url.to_string()))
}
