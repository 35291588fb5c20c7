use serde::Deserialize;
use tracing::info;

use crate::error::AiError;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Client for the text-generation service. Blocking; the app layer runs
/// it on a blocking task.
pub struct GenAiClient {
    api_key: String,
    model: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenAiClient {
    /// A blank API key is a configuration error, reported before any
    /// network traffic.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AiError::MissingConfig);
        }
        let model = model.into();
        let model = if model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model
        };
        Ok(Self {
            api_key,
            model,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different service base URL (tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send one prompt, return the concatenated response text. An answer
    /// with no text is an error so the caller never overwrites the
    /// formulation with an empty string.
    pub fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        info!(model = %self.model, "requesting clinical formulation");
        let mut response = ureq::post(&url)
            .header("x-goog-api-key", &self.api_key)
            .send_json(&body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => AiError::Status(code),
                other => AiError::Http(other),
            })?;

        let parsed: GenerateContentResponse = response.body_mut().read_json()?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }
}
