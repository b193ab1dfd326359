//! Google Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Generator;
use crate::{
    config::GenerationConfig,
    error::{PlannerError, Result},
};

/// HTTP timeout for a single generation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

impl GeminiClient {
    /// Creates a client from the generation configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::MissingCredential` when no API key is set and
    /// `PlannerError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(PlannerError::MissingCredential)?
            .to_string();

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PlannerError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint URL for a model, without the API key.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = self.endpoint(model);
        debug!("POST {url} ({} prompt bytes)", prompt.len());

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                PlannerError::service(model, format!("network error: {}", e.without_url()))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| {
                PlannerError::service(model, format!("network error: {}", e.without_url()))
            })?;

        if !status.is_success() {
            return Err(PlannerError::service(
                model,
                format!("[{}] {}", status, text.trim()),
            ));
        }

        reply_text(model, &text)
    }
}

/// Concatenates the text parts of the first candidate in a response body.
fn reply_text(model: &str, body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        PlannerError::service(model, format!("unexpected response body: {e}"))
    })?;

    if let Some(usage) = &response.usage_metadata {
        info!(
            "{model} usage: prompt {:?} tokens, reply {:?} tokens",
            usage.prompt_token_count, usage.candidates_token_count
        );
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(PlannerError::service(model, "response contained no text"));
    }
    Ok(text)
}
