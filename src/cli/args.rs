use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::translation::{Client, Model};

#[derive(Parser, Debug)]
#[command(name = "gtrans")]
#[command(about = "Translate text with the Google Translate web endpoint")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    #[command(flatten)]
    pub translation: TranslationArgs,

    /// Print the response body without normalizing it
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,

    /// Print the normalized result as JSON ({"lang": ..., "text": ...})
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Translation options; unset values fall back to the config file, then to defaults.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TranslationArgs {
    /// Source language code, or "auto" to detect
    #[arg(short = 's', long = "from", global = true)]
    pub from: Option<String>,

    /// Target language code (e.g., en, ja, zh-CN)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Response model requested from the endpoint
    #[arg(short = 'm', long, value_enum, global = true)]
    pub model: Option<Model>,

    /// Client identity presented to the endpoint
    #[arg(short = 'c', long, value_enum, global = true)]
    pub client: Option<Client>,

    /// Translation endpoint base URL
    #[arg(long = "url", global = true)]
    pub url: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Suppress status output and the progress spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get text-to-speech audio for the translated (or original) text
    Audio {
        /// File with the text to pronounce (reads from stdin if not provided)
        file: Option<String>,

        /// Pronounce the original text instead of its translation (requires --from)
        #[arg(long)]
        original: bool,

        /// Download the audio to this file instead of printing its URL
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}
