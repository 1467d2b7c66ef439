use serde::{Deserialize, Serialize};

/// One user submission. Immutable, built per convert action, discarded once
/// the call completes.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub curl_command: String,
}

/// The validated outcome of a conversion. Only produced when the provider's
/// completion deserializes into exactly this shape; anything else is an
/// error, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionResult {
    #[serde(rename = "pythonCode")]
    pub python_code: String,
}

// Wire types for the `generateContent` REST endpoint. Only the fields this
// app touches are modeled.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// First non-empty text part across candidates, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.as_str())
            .find(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_picks_first_non_empty_part() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": ""}, {"text": "hello"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("hello"));
    }

    #[test]
    fn first_text_is_none_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn first_text_is_none_when_content_missing() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn request_serializes_with_camel_case_config() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("convert this".to_string())],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "convert this");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }
}
