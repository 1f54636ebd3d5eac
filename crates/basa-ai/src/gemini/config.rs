//! Gemini API client configuration.

use crate::AiError;

/// Value shipped in sample configs instead of a real key. Treated exactly
/// like a missing credential.
pub const PLACEHOLDER_API_KEY: &str = "REPLACE_WITH_YOUR_GEMINI_API_KEY";

pub(crate) const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: 500,
            temperature: 0.4,
            timeout_secs: 60,
        }
    }

    /// Create config from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) => Ok(Self::new(key)),
            Err(_) => Err(AiError::Configuration(
                "Gemini API not configured. Set GEMINI_API_KEY.".into(),
            )),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Reject credentials that cannot possibly authenticate: empty, the
    /// shipped placeholder, or bytes that are invalid in an HTTP header.
    pub(crate) fn validate_api_key(&self) -> Result<(), AiError> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(AiError::Configuration(
                "Gemini API key is missing or still the placeholder. \
                 Set GEMINI_API_KEY to a real key."
                    .into(),
            ));
        }
        if !self.api_key.bytes().all(|b| (0x21..=0x7e).contains(&b)) {
            return Err(AiError::Configuration(
                "Gemini API key contains bytes that are not valid in a header value".into(),
            ));
        }
        Ok(())
    }
}
