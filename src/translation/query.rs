//! Query-string construction for the translation and text-to-speech endpoints.

use reqwest::Url;

use super::options::TranslateOptions;
use crate::error::{Result, TranslatorError};

/// Client identity the text-to-speech endpoint expects.
pub const AUDIO_CLIENT: &str = "tw-ob";

/// Which text an audio request should pronounce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioMode {
    /// Pronounce the translated text in the target language.
    #[default]
    Translated,
    /// Pronounce the original text in the source language.
    /// Requires an explicit source language.
    Original,
}

/// Ordered query parameters.
///
/// Insertion order is preserved so the rendered URL is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of `key` in place, or appends it when missing.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `base?<params>` with form encoding.
    pub fn to_url(&self, base: &str) -> Result<Url> {
        Url::parse_with_params(base, self.iter())
            .map_err(|e| TranslatorError::configuration(format!("Invalid URL '{base}': {e}")))
    }
}

/// Builds the query for a translation request.
///
/// All preconditions are checked here, where the text and the options are first
/// known together: the text must be non-empty and the source and target
/// languages must differ.
pub fn build_query(text: &str, options: &TranslateOptions) -> Result<QueryParams> {
    if text.is_empty() {
        return Err(TranslatorError::configuration("Text cannot be empty."));
    }
    if options.source() == options.target() {
        return Err(TranslatorError::configuration(
            "Source and target languages cannot be the same.",
        ));
    }

    Ok(QueryParams {
        pairs: vec![
            ("q", text.to_string()),
            ("sl", options.source().to_string()),
            ("tl", options.target().to_string()),
            ("client", options.client().as_str().to_string()),
            ("dt", "t".to_string()),
            ("ie", "UTF-8".to_string()),
            ("oe", "UTF-8".to_string()),
        ],
    })
}

/// Builds the query for a text-to-speech request.
///
/// In [`AudioMode::Translated`] the `q` value still holds the original text;
/// the caller replaces it with the translation once it is known.
pub fn build_audio_query(
    text: &str,
    options: &TranslateOptions,
    mode: AudioMode,
) -> Result<QueryParams> {
    let mut params = build_query(text, options)?;
    params.set("client", AUDIO_CLIENT);

    if mode == AudioMode::Original {
        if options.is_auto_source() {
            return Err(TranslatorError::configuration(
                "Source language cannot be auto.",
            ));
        }
        params.set("tl", options.source());
    }

    Ok(params)
}
