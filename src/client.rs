use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{ApiSettings, GenerationSettings};

/// Seam between the plan pipeline and the generative-text service.
#[async_trait]
pub trait GenerativeClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub type DynGenerativeClient = dyn GenerativeClient + Send + Sync;

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    user_agent: String,
}

impl GeminiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            user_agent: settings.user_agent.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        tracing::debug!(%url, model = %self.model, "sending generateContent request");
        tracing::trace!(request = ?request, "generateContent payload");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to generateContent endpoint")?;

        let status = response.status();
        tracing::debug!(%status, "generateContent responded");

        match status {
            reqwest::StatusCode::OK => {
                let body = response
                    .json::<GenerateContentResponse>()
                    .await
                    .context("Failed to parse generateContent response JSON")?;
                tracing::trace!(response = ?body, "generateContent body");
                Ok(body)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!(
                    "Rate limit exceeded. Please wait a moment and try again. (API response: {})",
                    error_text
                ))
            }
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(anyhow!(
                "Invalid API key. Please check your Gemini API key configuration."
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
            | reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Service is temporarily unavailable. Please try again later."
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API request failed with status {}: {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt.
    pub fn from_prompt(prompt: impl Into<String>, settings: &GenerationSettings) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: Some(GenerationConfig::from(settings)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl From<&GenerationSettings> for GenerationConfig {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_k: settings.top_k,
            top_p: settings.top_p,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, or "" when absent.
    pub fn first_text(&self) -> &str {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn settings(base_url: String) -> ApiSettings {
        ApiSettings {
            api_key: "test-key".to_string(),
            base_url,
            model: "gemini-pro".to_string(),
            timeout_secs: 5,
            user_agent: "fitcoach/test".to_string(),
        }
    }

    #[test]
    fn request_serializes_generation_config_in_camel_case() {
        let request = GenerateContentRequest::from_prompt("hello", &GenerationSettings::default());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert!(value["contents"][0].get("role").is_none());
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn first_text_handles_missing_candidates() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_text(), "");

        let no_parts: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(no_parts.first_text(), "");
    }

    #[tokio::test]
    async fn generate_content_posts_to_model_endpoint() {
        let server = MockServer::start_async().await;

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-pro:generateContent")
                    .query_param("key", "test-key")
                    .header("User-Agent", "fitcoach/test");

                then.status(200).json_body(json!({
                    "candidates": [
                        {
                            "content": { "role": "model", "parts": [{ "text": "{\"ok\":true}" }] },
                            "finishReason": "STOP"
                        }
                    ]
                }));
            })
            .await;

        let client = GeminiClient::new(&settings(server.url("/v1beta/"))).unwrap();
        let response = client
            .generate_content(GenerateContentRequest::from_prompt(
                "plan please",
                &GenerationSettings::default(),
            ))
            .await
            .unwrap();

        assert_eq!(response.first_text(), "{\"ok\":true}");
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_content_maps_error_statuses() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1beta/models/gemini-pro:generateContent");
                then.status(403).body("forbidden");
            })
            .await;

        let client = GeminiClient::new(&settings(server.url("/v1beta"))).unwrap();
        let err = client
            .generate_content(GenerateContentRequest::from_prompt(
                "plan please",
                &GenerationSettings::default(),
            ))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn generate_content_reports_unexpected_status() {
        let server = MockServer::start_async().await;

        let _mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1beta/models/gemini-pro:generateContent");
                then.status(418).body("teapot");
            })
            .await;

        let client = GeminiClient::new(&settings(server.url("/v1beta"))).unwrap();
        let err = client
            .generate_content(GenerateContentRequest::from_prompt(
                "plan please",
                &GenerationSettings::default(),
            ))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("418"));
        assert!(message.contains("teapot"));
    }
}
