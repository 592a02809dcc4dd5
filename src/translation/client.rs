use bytes::Bytes;
use reqwest::{Client, Url, header};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::normalize::{ResponseData, Translation, normalize};
use super::options::{TranslateOptions, USER_AGENT};
use super::query::{AudioMode, build_audio_query, build_query};
use crate::error::{Result, TranslatorError};

/// Client for the Google Translate web endpoint.
///
/// Holds immutable options and a connection pool; text is supplied per call.
/// Calls are independent and may run concurrently on a shared reference.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client,
    options: TranslateOptions,
    timeout: Option<Duration>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            client: Client::new(),
            options,
            timeout: None,
        }
    }

    /// Uses a caller-provided `reqwest::Client`, e.g. one with a proxy configured.
    pub const fn with_http_client(client: Client, options: TranslateOptions) -> Self {
        Self {
            client,
            options,
            timeout: None,
        }
    }

    /// Applies a timeout to each outgoing request. Unset by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub const fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translates `text` and normalizes the response into `{lang, text}`.
    pub async fn translate(&self, text: &str) -> Result<ResponseData> {
        let body = self.fetch_json(text).await?;
        normalize(&body, &self.options)
    }

    /// Translates `text` and returns the decoded body untouched.
    pub async fn translate_raw(&self, text: &str) -> Result<Value> {
        self.fetch_json(text).await
    }

    /// Translates `text`, normalizing the body unless `raw` is set.
    pub async fn translate_with(&self, text: &str, raw: bool) -> Result<Translation> {
        let body = self.fetch_json(text).await?;
        if raw {
            return Ok(Translation::Raw(body));
        }
        normalize(&body, &self.options).map(Translation::Normalized)
    }

    /// Builds the text-to-speech URL without fetching it.
    ///
    /// [`AudioMode::Original`] needs no network access. [`AudioMode::Translated`]
    /// performs one translation request to obtain the text to pronounce.
    pub async fn audio_url(&self, text: &str, mode: AudioMode) -> Result<Url> {
        let mut params = build_audio_query(text, &self.options, mode)?;

        if mode == AudioMode::Translated {
            let translated = self.translate(text).await?;
            params.set("q", translated.text);
        }

        params.to_url(self.options.audio_url())
    }

    /// Builds the text-to-speech URL and downloads the audio payload.
    pub async fn audio(&self, text: &str, mode: AudioMode) -> Result<Bytes> {
        let url = self.audio_url(text, mode).await?;
        let response = self.get(url).await?;
        Ok(response.bytes().await?)
    }

    async fn fetch_json(&self, text: &str) -> Result<Value> {
        let url = build_query(text, &self.options)?.to_url(&self.options.endpoint())?;
        let response = self.get(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        debug!(%url, "sending request");

        let mut request = self.client.get(url).header(header::USER_AGENT, USER_AGENT);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            TranslatorError::transport(format!("Failed to connect to endpoint: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %response.url(), "endpoint returned a non-success status");
            return Err(TranslatorError::status(status));
        }

        debug!(%status, "received response");
        Ok(response)
    }
}
