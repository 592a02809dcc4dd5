//! Maps the model-specific JSON bodies onto [`ResponseData`].
//!
//! The endpoint answers with positional nested arrays whose layout depends on
//! the requested model:
//!
//! - `t` with an auto-detected source: `[["<text>", "<lang>"]]`
//! - `t` with an explicit source: `["<text>"]`
//! - `single`: `[[["<text>", "<original>", ...], ...], null, "<lang>", ..., [["<lang>"], ..., ["<lang>"]]]`
//!
//! In the `single` layout the detected language sits at index 2, or inside the
//! detection block at index 8 depending on whether the source was detected,
//! given, or given and corrected. The candidates are tried in that order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::options::{Model, TranslateOptions};
use crate::error::{Result, TranslatorError};

/// Normalized translation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Language of the source text, detected or echoed from the request.
    pub lang: String,
    /// Translated text.
    pub text: String,
}

/// Either a normalized result or the decoded body as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    Normalized(ResponseData),
    Raw(Value),
}

const T_AUTO_TEXT: &str = "/0/0";
const T_AUTO_LANG: &str = "/0/1";
const T_EXPLICIT_TEXT: &str = "/0";
const SINGLE_TEXT: &str = "/0/0/0";
/// Detected-language locations in a `single` body, in lookup order.
const SINGLE_LANG: [&str; 3] = ["/2", "/8/0/0", "/8/3/0"];

/// Extracts `{lang, text}` from a decoded body produced by `options.model()`.
pub fn normalize(body: &Value, options: &TranslateOptions) -> Result<ResponseData> {
    match options.model() {
        Model::T if options.is_auto_source() => Ok(ResponseData {
            lang: string_at(body, T_AUTO_LANG)?,
            text: string_at(body, T_AUTO_TEXT)?,
        }),
        Model::T => Ok(ResponseData {
            lang: options.source().to_string(),
            text: string_at(body, T_EXPLICIT_TEXT)?,
        }),
        Model::Single => Ok(ResponseData {
            lang: first_string_of(body, &SINGLE_LANG)?,
            text: string_at(body, SINGLE_TEXT)?,
        }),
    }
}

/// Looks up `pointer`, treating JSON `null` the same as a missing index.
fn present<'a>(body: &'a Value, pointer: &str) -> Option<&'a Value> {
    body.pointer(pointer).filter(|v| !v.is_null())
}

fn as_string(value: &Value, pointer: &str) -> Result<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        TranslatorError::response_shape(format!(
            "expected a string at {pointer}, found {}",
            json_type(value)
        ))
    })
}

fn string_at(body: &Value, pointer: &str) -> Result<String> {
    let value = present(body, pointer).ok_or_else(|| {
        TranslatorError::response_shape(format!("missing field at {pointer}"))
    })?;
    as_string(value, pointer)
}

fn first_string_of(body: &Value, pointers: &[&str]) -> Result<String> {
    for pointer in pointers {
        if let Some(value) = present(body, pointer) {
            return as_string(value, pointer);
        }
    }
    Err(TranslatorError::response_shape(format!(
        "no language field at any of {}",
        pointers.join(", ")
    )))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn single() -> TranslateOptions {
        TranslateOptions::new().with_model(Model::Single)
    }

    #[test]
    fn test_t_auto_reads_text_and_detected_language() {
        let body = json!([["Hello", "zh-CN"]]);
        let data = normalize(&body, &TranslateOptions::default()).unwrap();
        assert_eq!(
            data,
            ResponseData {
                lang: "zh-CN".into(),
                text: "Hello".into()
            }
        );
    }

    #[test]
    fn test_t_auto_ignores_trailing_entries() {
        let body = json!([["Hello", "zh-CN"], ["World", "zh-CN"]]);
        let data = normalize(&body, &TranslateOptions::default()).unwrap();
        assert_eq!(data.text, "Hello");
        assert_eq!(data.lang, "zh-CN");
    }

    #[test]
    fn test_t_explicit_source_echoes_language() {
        let body = json!(["你好世界"]);
        let options = TranslateOptions::new().with_source("en").with_target("zh-CN");
        let data = normalize(&body, &options).unwrap();
        assert_eq!(data.lang, "en");
        assert_eq!(data.text, "你好世界");
    }

    #[test]
    fn test_t_auto_with_flat_body_is_shape_error() {
        let err = normalize(&json!(["Hello"]), &TranslateOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseShape);
    }

    #[test]
    fn test_t_explicit_with_nested_body_is_shape_error() {
        let options = TranslateOptions::new().with_source("en").with_target("ja");
        let err = normalize(&json!([["Hello", "en"]]), &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseShape);
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_single_prefers_top_level_language() {
        let body = json!([
            [["Hello", "你好", null, null, 10]],
            null,
            "zh-CN",
            null,
            null,
            null,
            null,
            [],
            [["ja"], null, [1.0], ["ja"]]
        ]);
        let data = normalize(&body, &single()).unwrap();
        assert_eq!(data.lang, "zh-CN");
        assert_eq!(data.text, "Hello");
    }

    #[test]
    fn test_single_falls_back_to_detection_block() {
        let body = json!([
            [["Hello", "你好"]],
            null,
            null,
            null,
            null,
            null,
            null,
            [],
            [["zh-CN"], null, [0.9], ["zh-TW"]]
        ]);
        let data = normalize(&body, &single()).unwrap();
        assert_eq!(data.lang, "zh-CN");
    }

    #[test]
    fn test_single_falls_back_to_last_detection_entry() {
        let body = json!([
            [["Hello", "你好"]],
            null,
            null,
            null,
            null,
            null,
            null,
            [],
            [[], null, [0.9], ["zh-TW"]]
        ]);
        let data = normalize(&body, &single()).unwrap();
        assert_eq!(data.lang, "zh-TW");
    }

    #[test]
    fn test_single_short_body_without_language_is_shape_error() {
        let err = normalize(&json!([[["Hello"]]]), &single()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseShape);
        assert!(err.to_string().contains("/8/3/0"));
    }

    #[test]
    fn test_single_missing_text_is_shape_error() {
        let err = normalize(&json!([[], null, "en"]), &single()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseShape);
        assert!(err.to_string().contains("/0/0/0"));
    }

    #[test]
    fn test_non_array_body_is_shape_error() {
        let err = normalize(&json!({"error": "nope"}), &TranslateOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseShape);
    }
}
