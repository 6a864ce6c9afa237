use crate::error::{Error, Result};

/// Mistral audio transcription endpoint.
pub const API_URL: &str = "https://api.mistral.ai/v1/audio/transcriptions";

/// Model used when none is given.
pub const DEFAULT_MODEL: &str = "voxtral-mini-latest";

/// Language code used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Built-in API key. `None` means no key is compiled in and the user is prompted.
pub const DEFAULT_API_KEY: Option<&str> = None;

/// Content type sent for every upload, whatever the file's real format.
pub const UPLOAD_MIME: &str = "audio/mpeg";

/// Resolve the API key: explicit value, then the built-in default, then `prompt`.
///
/// `prompt` runs at most once and only when neither of the first two tiers
/// holds a non-empty key. Its answer is trimmed; an empty answer is
/// [`Error::MissingApiKey`].
pub fn resolve_api_key<F>(explicit: Option<&str>, default: Option<&str>, prompt: F) -> Result<String>
where
    F: FnOnce() -> std::io::Result<String>,
{
    let explicit = explicit.filter(|k| !k.is_empty());
    if let Some(key) = explicit.or(default.filter(|k| !k.is_empty())) {
        return Ok(key.to_string());
    }

    let answer = prompt()?;
    let key = answer.trim();
    if key.is_empty() {
        return Err(Error::MissingApiKey);
    }
    Ok(key.to_string())
}

/// Builder for transcription options.
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub model: String,
    pub language: String,
    /// Ask for segment-level timestamps.
    pub timestamps: bool,
    pub endpoint: String,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timestamps: false,
            endpoint: API_URL.to_string(),
        }
    }
}

impl TranscribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: &str) -> Result<Self> {
        if model.trim().is_empty() {
            return Err(Error::InvalidOption("model must not be empty".into()));
        }
        self.model = model.to_string();
        Ok(self)
    }

    pub fn language(mut self, lang: &str) -> Result<Self> {
        if lang.trim().is_empty() {
            return Err(Error::InvalidOption("language must not be empty".into()));
        }
        self.language = lang.to_string();
        Ok(self)
    }

    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Point requests somewhere other than the Mistral API (e.g. a local mock).
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_explicit_key_skips_prompt() {
        let prompted = Cell::new(false);
        let key = resolve_api_key(Some("explicit"), Some("builtin"), || {
            prompted.set(true);
            Ok("typed".into())
        })
        .unwrap();
        assert_eq!(key, "explicit");
        assert!(!prompted.get());
    }

    #[test]
    fn test_explicit_key_wins_without_default() {
        let key = resolve_api_key(Some("explicit"), None, || panic!("prompted")).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn test_default_key_used_when_no_explicit() {
        let key = resolve_api_key(None, Some("builtin"), || panic!("prompted")).unwrap();
        assert_eq!(key, "builtin");
    }

    #[test]
    fn test_empty_explicit_falls_through() {
        let key = resolve_api_key(Some(""), Some("builtin"), || panic!("prompted")).unwrap();
        assert_eq!(key, "builtin");
    }

    #[test]
    fn test_empty_explicit_and_default_prompts() {
        let prompted = Cell::new(false);
        let key = resolve_api_key(Some(""), Some(""), || {
            prompted.set(true);
            Ok("typed".into())
        })
        .unwrap();
        assert_eq!(key, "typed");
        assert!(prompted.get());
    }

    #[test]
    fn test_prompt_answer_trimmed() {
        let key = resolve_api_key(None, None, || Ok("  typed-key \n".into())).unwrap();
        assert_eq!(key, "typed-key");
    }

    #[test]
    fn test_empty_prompt_answer_rejected() {
        let result = resolve_api_key(None, None, || Ok("   \n".into()));
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_prompt_io_error_propagates() {
        let result = resolve_api_key(None, None, || {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        });
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_builtin_key_unset() {
        assert!(DEFAULT_API_KEY.is_none());
    }

    #[test]
    fn test_options_defaults() {
        let opts = TranscribeOptions::default();
        assert_eq!(opts.model, "voxtral-mini-latest");
        assert_eq!(opts.language, "en");
        assert!(!opts.timestamps);
        assert_eq!(opts.endpoint, API_URL);
    }

    #[test]
    fn test_options_builder() {
        let opts = TranscribeOptions::new()
            .model("voxtral-small-latest")
            .unwrap()
            .language("de")
            .unwrap()
            .timestamps(true)
            .endpoint("http://localhost:9999/v1/audio/transcriptions");
        assert_eq!(opts.model, "voxtral-small-latest");
        assert_eq!(opts.language, "de");
        assert!(opts.timestamps);
        assert_eq!(opts.endpoint, "http://localhost:9999/v1/audio/transcriptions");
    }

    #[test]
    fn test_options_reject_empty_model() {
        let result = TranscribeOptions::new().model("  ");
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_options_reject_empty_language() {
        let result = TranscribeOptions::new().language("");
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }
}
