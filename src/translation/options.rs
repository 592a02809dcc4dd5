//! Request options shared by every call made through a [`Translator`](super::Translator).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default translation endpoint. The model name is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://clients5.google.com/translate_a/";

/// Default text-to-speech endpoint.
pub const DEFAULT_AUDIO_URL: &str = "https://translate.google.com/translate_tts";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Source language value that asks the endpoint to detect the language.
pub const AUTO: &str = "auto";

/// Response shape requested from the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Compact array response.
    #[default]
    T,
    /// Verbose response carrying detection metadata.
    Single,
}

impl Model {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::T => "t",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller identity presented to the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Client {
    #[default]
    #[serde(rename = "gtx")]
    #[value(name = "gtx")]
    Gtx,
    #[serde(rename = "dict-chrome-ex")]
    #[value(name = "dict-chrome-ex")]
    DictChromeEx,
}

impl Client {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gtx => "gtx",
            Self::DictChromeEx => "dict-chrome-ex",
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable translation options.
///
/// Unset fields fall back to their defaults: `source = "auto"`, `target = "en"`,
/// `model = t`, `client = gtx` and the public Google endpoints.
///
/// ```
/// use gtrans::translation::{Model, TranslateOptions};
///
/// let options = TranslateOptions::new()
///     .with_source("en")
///     .with_target("ja")
///     .with_model(Model::Single);
/// assert_eq!(options.target(), "ja");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    source: String,
    target: String,
    model: Model,
    client: Client,
    base_url: String,
    audio_url: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            source: AUTO.to_string(),
            target: "en".to_string(),
            model: Model::default(),
            client: Client::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            audio_url: DEFAULT_AUDIO_URL.to_string(),
        }
    }
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub const fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub const fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Overrides the translation endpoint, e.g.
    /// `https://translate.googleapis.com/translate_a/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_audio_url(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = audio_url.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub const fn model(&self) -> Model {
        self.model
    }

    pub const fn client(&self) -> Client {
        self.client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn audio_url(&self) -> &str {
        &self.audio_url
    }

    /// Returns `true` when the source language is left to detection.
    pub fn is_auto_source(&self) -> bool {
        self.source == AUTO
    }

    /// Full translation endpoint: the base URL followed by the model name.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TranslateOptions::default();
        assert_eq!(options.source(), "auto");
        assert_eq!(options.target(), "en");
        assert_eq!(options.model(), Model::T);
        assert_eq!(options.client(), Client::Gtx);
        assert_eq!(options.base_url(), DEFAULT_BASE_URL);
        assert_eq!(options.audio_url(), DEFAULT_AUDIO_URL);
        assert!(options.is_auto_source());
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let options = TranslateOptions::new()
            .with_target("zh-CN")
            .with_client(Client::DictChromeEx);
        assert_eq!(options.source(), "auto");
        assert_eq!(options.target(), "zh-CN");
        assert_eq!(options.client().as_str(), "dict-chrome-ex");
        assert_eq!(options.model(), Model::T);
    }

    #[test]
    fn test_endpoint_appends_model() {
        let options = TranslateOptions::new().with_model(Model::Single);
        assert_eq!(
            options.endpoint(),
            "https://clients5.google.com/translate_a/single"
        );

        let options = TranslateOptions::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(options.endpoint(), "http://127.0.0.1:8080/t");
    }

    #[test]
    fn test_model_and_client_serde_names() {
        assert_eq!(serde_json::to_string(&Model::Single).ok(), Some("\"single\"".into()));
        assert_eq!(
            serde_json::to_string(&Client::DictChromeEx).ok(),
            Some("\"dict-chrome-ex\"".into())
        );
    }
}
