//! Error types returned by the translation client.

use thiserror::Error;

/// Coarse classification of a [`TranslatorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied arguments violate a precondition.
    Configuration,
    /// The endpoint could not be reached, answered with a non-success status,
    /// or returned a body that is not valid JSON.
    Transport,
    /// The decoded body does not have the shape expected for the model.
    ResponseShape,
}

/// Errors produced while building, sending or normalizing a translation request.
///
/// Every variant is terminal: nothing is retried and no partial result is returned.
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// Raised before any network I/O when the inputs are unusable.
    #[error("TranslatorAPIError: {0}")]
    Configuration(String),

    /// Raised when the HTTP exchange fails.
    #[error("ResponseError: {message}")]
    Transport {
        message: String,
        /// HTTP status code, when the server answered at all.
        status: Option<u16>,
    },

    /// Raised when the body cannot be navigated along the expected field paths.
    #[error("ResponseShapeError: {0}")]
    ResponseShape(String),
}

impl TranslatorError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Builds a transport error from a non-success HTTP status.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Transport {
            message: format!(
                "Failed to get Response: {}",
                status.canonical_reason().unwrap_or("Unknown status")
            ),
            status: Some(status.as_u16()),
        }
    }

    pub fn response_shape(message: impl Into<String>) -> Self {
        Self::ResponseShape(message.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::ResponseShape(_) => ErrorKind::ResponseShape,
        }
    }
}

impl From<reqwest::Error> for TranslatorError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

impl From<serde_json::Error> for TranslatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("Failed to decode response body as JSON: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
