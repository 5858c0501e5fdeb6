use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Instant;
use tracing::{debug, warn};

use super::error::{OpenAIError, Result};
use super::types::{ChatRequest, ChatResponseRaw};
use crate::core::config::OpenAIConfig;

/// Model used to draft complaint emails
pub const COMPLAINT_MODEL: &str = "gpt-4o-mini";

/// Turns a prompt into natural-language text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the text of the first completion choice.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// OpenAI Chat Completions client.
///
/// Built once at startup and shared across requests.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIClient {
    pub fn new(config: &OpenAIConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OpenAIError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: COMPLAINT_MODEL.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<String> {
        let start = Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!("HTTP {}: {}", status.as_u16(), error_text)));
        }

        let chat_response: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Api("No response from OpenAI".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            total_tokens = chat_response.usage.as_ref().map(|u| u.total_tokens),
            "OpenAI chat completion"
        );

        Ok(content)
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.chat_completion(ChatRequest::single_turn(&self.model, prompt))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::spawn_stub_server;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn config(base_url: String, timeout: Duration) -> OpenAIConfig {
        OpenAIConfig {
            api_key: "sk-test".to_string(),
            base_url,
            timeout,
        }
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&seen);
        let router = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = Arc::clone(&captured);
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *captured.lock().unwrap() = Some((auth, body));
                    Json(json!({
                        "choices": [
                            {"message": {"role": "assistant", "content": "Subject: Potholes\n\nDear Municipal Commissioner,"}},
                            {"message": {"role": "assistant", "content": "ignored second choice"}}
                        ],
                        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
                    }))
                }
            }),
        );
        let base_url = spawn_stub_server(router).await;
        let client = OpenAIClient::new(&config(base_url, Duration::from_secs(5))).unwrap();

        let text = client.generate("Draft this").await.unwrap();

        assert_eq!(text, "Subject: Potholes\n\nDear Municipal Commissioner,");
        let (auth, body) = seen.lock().unwrap().take().unwrap();
        assert_eq!(auth, "Bearer sk-test");
        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "Draft this"}]
            })
        );
    }

    #[tokio::test]
    async fn test_generate_maps_error_status() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
        );
        let base_url = spawn_stub_server(router).await;
        let client = OpenAIClient::new(&config(base_url, Duration::from_secs(5))).unwrap();

        let err = client.generate("Draft this").await.unwrap_err();

        assert!(matches!(err, OpenAIError::Api(ref m) if m.contains("429")));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_choices() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base_url = spawn_stub_server(router).await;
        let client = OpenAIClient::new(&config(base_url, Duration::from_secs(5))).unwrap();

        let err = client.generate("Draft this").await.unwrap_err();

        assert!(matches!(err, OpenAIError::Api(_)));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
        let base_url = spawn_stub_server(router).await;
        let client = OpenAIClient::new(&config(base_url, Duration::from_secs(5))).unwrap();

        let err = client.generate("Draft this").await.unwrap_err();

        assert!(matches!(err, OpenAIError::Parse(_)));
    }

    #[tokio::test]
    async fn test_generate_times_out() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({"choices": []}))
            }),
        );
        let base_url = spawn_stub_server(router).await;
        let client = OpenAIClient::new(&config(base_url, Duration::from_millis(100))).unwrap();

        let err = client.generate("Draft this").await.unwrap_err();

        assert!(matches!(err, OpenAIError::Network(_)));
    }
}
