//! Gemini text-generation client.
//!
//! Calls the `generateContent` REST endpoint of the Generative Language API
//! once per prompt and returns the concatenated text of the first candidate.
//! The API key travels in the `x-goog-api-key` header so it never shows up
//! in request URLs or in transport error messages.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::ItineraryError;

/// Prompt text in, free-form model text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether the credentials needed to call the service are present.
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> Result<String, ItineraryError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        let model_path = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };

        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model_path
        )
    }
}

fn status_error(status: StatusCode, payload: &str) -> ItineraryError {
    let message = match status {
        StatusCode::TOO_MANY_REQUESTS => "rate limited by Gemini API (429)".to_string(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("Gemini API key rejected ({})", status.as_u16())
        }
        _ => {
            let detail = serde_json::from_str::<ApiErrorEnvelope>(payload)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| payload.trim().to_string());
            format!("Gemini API error ({}): {}", status.as_u16(), detail)
        }
    };

    ItineraryError::Upstream(message)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ItineraryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ItineraryError::NotConfigured)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        log::debug!("Sending generateContent request to model {}", self.model);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ItineraryError::Upstream(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| ItineraryError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &payload));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload).map_err(|e| {
            ItineraryError::Upstream(format!("failed to decode Gemini response: {}", e))
        })?;

        parsed.into_text().ok_or_else(|| {
            ItineraryError::Upstream("Gemini returned no text candidates".to_string())
        })
    }
}
