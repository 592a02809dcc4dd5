//! Subcommand implementations.

use anyhow::Result;

use crate::cli::TranslationArgs;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::TranslateOptions;

/// Audio command handler.
pub mod audio;

/// Configure command handler.
pub mod configure;

/// Translation command handler.
pub mod translate;

/// Merges CLI flags with the config file into translation options.
fn load_options(args: &TranslationArgs) -> Result<TranslateOptions> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let options = ResolveOptions {
        source: args.from.clone(),
        target: args.to.clone(),
        model: args.model,
        client: args.client,
        base_url: args.url.clone(),
    };

    resolve_config(&options, &config_file)
}
