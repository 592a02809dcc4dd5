//! # gtrans - Google Translate client
//!
//! A small async client for the unofficial Google Translate web endpoint.
//! The endpoint answers with positional JSON arrays whose layout depends on the
//! requested model; [`Translator`](translation::Translator) turns them into a
//! stable `{lang, text}` pair, or hands back the raw body on request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gtrans::translation::{TranslateOptions, Translator};
//!
//! # async fn run() -> gtrans::error::Result<()> {
//! let translator = Translator::new(TranslateOptions::new().with_target("en"));
//! let result = translator.translate("你好").await?;
//! assert_eq!(result.lang, "zh-CN");
//! assert_eq!(result.text, "Hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Command line
//!
//! ```bash
//! # Translate a file, or stdin when no file is given
//! gtrans --to en notes.txt
//! echo "Bonjour" | gtrans --json
//!
//! # Text-to-speech
//! echo "Hello" | gtrans audio --to ja -o hello.mp3
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/gtrans/config.toml`:
//!
//! ```toml
//! [gtrans]
//! source = "auto"
//! target = "ja"
//! model = "single"
//! client = "gtx"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Error types for the translation client.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client, request building and response normalization.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{ErrorKind, TranslatorError};
pub use translation::{ResponseData, TranslateOptions, Translator};
