mod client;
mod language;
mod normalize;
mod options;
mod query;

pub use client::Translator;
pub use language::{
    SUPPORTED_LANGUAGES, print_languages, validate_language, validate_source_language,
};
pub use normalize::{ResponseData, Translation, normalize};
pub use options::{
    AUTO, Client, DEFAULT_AUDIO_URL, DEFAULT_BASE_URL, Model, TranslateOptions, USER_AGENT,
};
pub use query::{AUDIO_CLIENT, AudioMode, QueryParams, build_audio_query, build_query};
