//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, ChatTurn};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    /// Validate the credential and model, then build the HTTP client with
    /// the configured per-request timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        config.validate_api_key()?;
        if config.model.trim().is_empty() {
            return Err(AiError::Configuration("model identifier is empty".into()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, history: &[ChatTurn]) -> serde_json::Value {
        let contents: Vec<_> = history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response into the concatenated candidate text.
    ///
    /// An answer with no text parts parses to an empty string; the caller
    /// decides what an empty reply means.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::Parse("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut text = String::new();
        for part in &parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::PLACEHOLDER_API_KEY;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key")).unwrap()
    }

    #[test]
    fn new_rejects_placeholder_credential() {
        let err = GeminiClient::new(GeminiConfig::new(PLACEHOLDER_API_KEY)).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn new_rejects_blank_model() {
        let err = GeminiClient::new(GeminiConfig::new("test-key").with_model("  ")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn api_url_targets_generate_content() {
        assert_eq!(
            client().api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_carries_roles_and_generation_config() {
        let history = vec![
            ChatTurn::user("apa arti kulo?"),
            ChatTurn::model("Artinya: saya (halus)."),
            ChatTurn::user("matur nuwun"),
        ];
        let body = client().build_request_body(&history);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "apa arti kulo?");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "matur nuwun");

        assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(body["generationConfig"]["temperature"], 0.4);
    }

    #[test]
    fn parse_concatenates_text_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Sugeng " }, { "text": "enjing." }]
                }
            }]
        });
        assert_eq!(client().parse_response(json).unwrap(), "Sugeng enjing.");
    }

    #[test]
    fn parse_without_candidates_fails() {
        let err = client()
            .parse_response(serde_json::json!({ "error": "boom" }))
            .unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));

        let err = client()
            .parse_response(serde_json::json!({ "candidates": [] }))
            .unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));
    }

    #[test]
    fn parse_without_text_parts_is_empty() {
        let json = serde_json::json!({
            "candidates": [{ "content": {} }]
        });
        assert_eq!(client().parse_response(json).unwrap(), "");
    }
}
