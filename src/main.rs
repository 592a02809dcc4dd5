use anyhow::Result;
use clap::Parser;

use gtrans::cli::commands::{audio, configure, translate};
use gtrans::cli::{Args, Command};
use gtrans::input::InputSource;
use gtrans::output::{self, OutputConfig};
use gtrans::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.output.quiet,
        no_color: args.output.no_color || OutputConfig::default().no_color,
        verbose: args.output.verbose,
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_configuration()?;
            } else {
                configure::run_configure()?;
            }
        }
        Some(Command::Audio {
            file,
            original,
            output,
        }) => {
            let options = audio::AudioOptions {
                input: InputSource::from_path(file.as_deref()),
                translation: args.translation,
                original,
                output,
            };
            audio::run_audio(options).await?;
        }
        None => {
            let format = if args.raw {
                translate::OutputFormat::Raw
            } else if args.json {
                translate::OutputFormat::Json
            } else {
                translate::OutputFormat::Text
            };

            let options = translate::TranslateOptions {
                input: InputSource::from_path(args.file.as_deref()),
                translation: args.translation,
                format,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
