use anyhow::{Result, bail};

use super::load_options;
use crate::cli::TranslationArgs;
use crate::input::{InputReader, InputSource};
use crate::translation::{Translation, Translator};
use crate::ui::Spinner;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Translated text only.
    #[default]
    Text,
    /// Normalized `{lang, text}` as JSON.
    Json,
    /// Response body exactly as decoded.
    Raw,
}

pub struct TranslateOptions {
    pub input: InputSource,
    pub translation: TranslationArgs,
    pub format: OutputFormat,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let translate_options = load_options(&options.translation)?;
    let source_text = InputReader::read(&options.input)?;

    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let translator = Translator::new(translate_options);
    let raw = options.format == OutputFormat::Raw;

    let spinner = Spinner::new("Translating...");
    let result = translator.translate_with(&source_text, raw).await;
    spinner.stop();

    println!("{}", render(result?, options.format)?);
    Ok(())
}

fn render(translation: Translation, format: OutputFormat) -> Result<String> {
    let rendered = match (translation, format) {
        (Translation::Raw(body), _) => serde_json::to_string(&body)?,
        (Translation::Normalized(data), OutputFormat::Json) => serde_json::to_string(&data)?,
        (Translation::Normalized(data), _) => data.text,
    };
    Ok(rendered)
}
