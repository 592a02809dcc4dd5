use anyhow::{Result, bail};
use std::path::Path;

use super::load_options;
use crate::cli::TranslationArgs;
use crate::fs::atomic_write;
use crate::input::{InputReader, InputSource};
use crate::status;
use crate::translation::{AudioMode, Translator};
use crate::ui::{Spinner, Style};

pub struct AudioOptions {
    pub input: InputSource,
    pub translation: TranslationArgs,
    pub original: bool,
    /// Download destination; the URL is printed when unset.
    pub output: Option<String>,
}

pub async fn run_audio(options: AudioOptions) -> Result<()> {
    let translate_options = load_options(&options.translation)?;
    let source_text = InputReader::read(&options.input)?;

    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let mode = if options.original {
        AudioMode::Original
    } else {
        AudioMode::Translated
    };
    let translator = Translator::new(translate_options);

    let Some(output) = options.output else {
        let spinner = Spinner::new("Building audio URL...");
        let url = translator.audio_url(&source_text, mode).await;
        spinner.stop();
        println!("{}", url?);
        return Ok(());
    };

    let spinner = Spinner::new("Downloading audio...");
    let audio = translator.audio(&source_text, mode).await;
    spinner.stop();
    let audio = audio?;

    let path = Path::new(&output);
    atomic_write(path, &audio)?;

    status!(
        "{} Saved {} bytes to {}",
        Style::success("✓"),
        audio.len(),
        Style::secondary(path.display())
    );

    Ok(())
}
