//! Text-generation provider client.
//!
//! All provider access goes through the [`NarrativeProvider`] trait so the
//! narrative service can be exercised against scripted doubles; the only
//! production implementation is [`GeminiClient`], a thin wrapper over the
//! Gemini `generateContent` REST call.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Upstream call failed: transport error, timeout, or non-success status.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Single-shot text completion.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Run the prompt. `Ok(None)` means the provider answered but produced
    /// no usable text; the caller decides what to substitute.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client with a bounded request timeout. The timeout covers the
    /// whole call; interactive callers should keep it at or below 30s.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl NarrativeProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            BASE_URL, self.model
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling provider");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(extract_text(parsed))
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the first candidate's text parts. `None` when the response
/// carries no candidate, no content, or only empty text.
fn extract_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn extracts_single_part_text() {
        let resp = parse(
            r###"{"candidates":[{"content":{"parts":[{"text":"## 事件经过\n正文"}]}}]}"###,
        );
        assert_eq!(extract_text(resp).as_deref(), Some("## 事件经过\n正文"));
    }

    #[test]
    fn concatenates_multiple_parts() {
        let resp = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"前半"},{"text":"后半"}]}}]}"#,
        );
        assert_eq!(extract_text(resp).as_deref(), Some("前半后半"));
    }

    #[test]
    fn missing_candidates_yields_none() {
        assert!(extract_text(parse(r#"{}"#)).is_none());
        assert!(extract_text(parse(r#"{"candidates":[]}"#)).is_none());
    }

    #[test]
    fn candidate_without_content_yields_none() {
        let resp = parse(r#"{"candidates":[{}]}"#);
        assert!(extract_text(resp).is_none());
    }

    #[test]
    fn empty_text_parts_yield_none() {
        let resp = parse(r#"{"candidates":[{"content":{"parts":[{"text":""},{}]}}]}"#);
        assert!(extract_text(resp).is_none());
    }

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "prompt text" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt text");
    }
}
