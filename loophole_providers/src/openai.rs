use async_trait::async_trait;
use loophole_core::{InterpretError, InterpretRequest, Interpretation, Interpreter};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use crate::retry::{RetryPolicy, retry_with_backoff};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Client for the OpenAI Responses API.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    retry: RetryPolicy,
}

impl OpenAiProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, InterpretError> {
        info!("Creating OpenAiProvider");
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InterpretError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            retry: RetryPolicy::default(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Send one request and return the model's text output.
    async fn try_send(&self, body: &Value) -> Result<String, InterpretError> {
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| InterpretError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InterpretError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|e| InterpretError::Transport(format!("unreadable response body: {e}")))?;

        Ok(output_text(&payload))
    }
}

/// The model's text: `output_text` when present, otherwise every
/// `output[].content[].text` joined by newlines.
fn output_text(payload: &Value) -> String {
    if let Some(text) = payload["output_text"].as_str().filter(|t| !t.is_empty()) {
        return text.to_string();
    }

    payload["output"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|item| item["content"].as_array())
        .flatten()
        .filter_map(|content| content["text"].as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl Interpreter for OpenAiProvider {
    async fn interpret(
        &self,
        request: &InterpretRequest,
    ) -> Result<Interpretation, InterpretError> {
        request.validate()?;

        let body = json!({
            "model": self.model,
            "instructions": request.instructions(),
            "input": request.text,
        });

        info!(
            "Sending request to OpenAI Responses API: model={}, chars={}",
            self.model,
            request.text.chars().count()
        );

        let text = retry_with_backoff(
            || self.try_send(&body),
            &self.retry,
            InterpretError::is_retryable,
        )
        .await?;

        debug!("Received {} chars of model output", text.len());
        Interpretation::parse(&text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_text_prefers_top_level_field() {
        let payload = json!({
            "output_text": "{\"a\":1}",
            "output": [{"content": [{"text": "ignored"}]}]
        });
        assert_eq!(output_text(&payload), "{\"a\":1}");
    }

    #[test]
    fn test_output_text_joins_content_parts() {
        let payload = json!({
            "output": [
                {"type": "reasoning"},
                {"content": [{"type": "output_text", "text": "{\"summary\":"}, {"type": "refusal"}]},
                {"content": [{"text": "\"x\"}"}]}
            ]
        });
        assert_eq!(output_text(&payload), "{\"summary\":\n\"x\"}");
    }

    #[test]
    fn test_output_text_missing() {
        assert_eq!(output_text(&json!({})), "");
        assert_eq!(output_text(&json!({"output": "nope"})), "");
    }

    #[test]
    fn test_empty_output_is_invalid() {
        let result = Interpretation::parse(&output_text(&json!({})));
        assert!(result.is_err_and(|e| e.http_status() == 502));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_builder_trims_base_url() {
        let provider = OpenAiProvider::new("key".into(), Duration::from_secs(5))
            .expect("client should build")
            .with_base_url("http://localhost:8080/v1/".into())
            .with_model("gpt-test".into());
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
        assert_eq!(provider.model(), "gpt-test");
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn test_blank_text_never_hits_network() {
        let provider = OpenAiProvider::new("key".into(), Duration::from_secs(1))
            .expect("client should build")
            .with_base_url("http://127.0.0.1:9".into())
            .with_retry(RetryPolicy::none());
        let result = provider.interpret(&InterpretRequest::new("\n ")).await;
        assert!(matches!(result, Err(InterpretError::MissingText)));
    }
}
