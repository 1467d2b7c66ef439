//! Stateless client for the provider's `generateContent` endpoint.

use log::info;

use crate::conversion::error::ConversionError;
use crate::conversion::prompt;
use crate::conversion::types::{
    Content, ConversionRequest, ConversionResult, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Conversion service backed by a Gemini-style REST endpoint.
///
/// Holds no per-call state; each `convert` is one outbound request with no
/// retry and no persistence. Cloning is cheap (the underlying reqwest
/// client is reference-counted), which lets the UI hand a copy to each
/// spawned call.
#[derive(Debug, Clone)]
pub struct GeminiService {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiService {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads provider configuration from the environment. `GEMINI_API_KEY`
    /// is required; `GEMINI_API_BASE` and `GEMINI_MODEL` override the public
    /// endpoint and default model.
    pub fn from_env() -> Result<Self, ConversionError> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| ConversionError::MissingApiKey)?;
        let base_url =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, &base_url, model))
    }

    /// Converts one curl command into Python `requests` code.
    ///
    /// Timeout and retry behavior are deliberately left to the HTTP client
    /// and provider defaults.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content::user(prompt::build_prompt(&request.curl_command))],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        info!("requesting conversion from {}", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConversionError::Provider {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        let completion: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ConversionError::InvalidPayload(e.to_string()))?;
        let text = completion
            .first_text()
            .ok_or(ConversionError::EmptyCompletion)?;
        validate_payload(text)
    }
}

/// Structurally validates the model's completion text.
///
/// The completion must be a JSON object with a single `pythonCode` string
/// field. Models occasionally wrap the object in a markdown code fence even
/// when asked for raw JSON, so one optional fence is stripped first.
pub fn validate_payload(text: &str) -> Result<ConversionResult, ConversionError> {
    let text = strip_code_fence(text.trim());
    serde_json::from_str(text).map_err(|e| ConversionError::InvalidPayload(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
