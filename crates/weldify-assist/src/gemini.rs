//! Gemini `generateContent` REST client.
//!
//! Sync client; one blocking request per prompt, no retries.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ureq::Agent;

use crate::error::AssistError;
use crate::generator::TextGenerator;

/// Gemini REST API client.
pub struct GeminiClient {
    agent: Agent,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client.
    ///
    /// # Arguments
    /// * `base_url` - service root, e.g. `https://generativelanguage.googleapis.com`
    /// * `model` - model name, e.g. `gemini-2.5-flash`
    /// * `api_key` - API key sent with every request
    /// * `timeout` - whole-request timeout
    #[must_use]
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// Endpoint URL without the key.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let endpoint = self.endpoint();
        let url = format!("{endpoint}?key={}", self.api_key);
        let body = serde_json::to_vec(&GenerateRequest::new(prompt))?;

        info!("Requesting completion from {endpoint}");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&body[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(AssistError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let reply: GenerateResponse = body_reader.read_json()?;
        let text = reply.into_text()?;
        debug!("Received {} bytes of generated text", text.len());
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
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
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, AssistError> {
        let Some(first) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => AssistError::Blocked(reason),
                None => AssistError::EmptyResponse,
            });
        };

        let text: String = first
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(AssistError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::new("How hot?")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "How hot?"}]}]})
        );
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/",
            "gemini-2.5-flash",
            "secret",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_text_parts_concatenated() {
        let reply = parse(
            r####"{"candidates":[{"content":{"role":"model","parts":[{"text":"### Tips\n"},{"text":"* Clean the joint"}]},"finishReason":"STOP"},{"content":{"parts":[{"text":"ignored"}]}}]}"####,
        );
        assert_eq!(reply.into_text().unwrap(), "### Tips\n* Clean the joint");
    }

    #[test]
    fn test_no_candidates_is_empty_response() {
        let err = parse(r#"{"candidates":[]}"#).into_text().unwrap_err();
        assert!(matches!(err, AssistError::EmptyResponse));

        let err = parse("{}").into_text().unwrap_err();
        assert!(matches!(err, AssistError::EmptyResponse));
    }

    #[test]
    fn test_candidate_without_text() {
        let err = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)
            .into_text()
            .unwrap_err();
        assert!(matches!(err, AssistError::EmptyResponse));
    }

    #[test]
    fn test_blocked_prompt() {
        let err = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .into_text()
            .unwrap_err();
        assert_eq!(err.to_string(), "prompt blocked: SAFETY");
    }
}
