use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::types::{ChatRequest, ChatResponse, Message};
use crate::config::{ApiConfig, RequestConfig};
use crate::debate::reply::Reply;
use crate::error::{CompletionError, CompletionResult};

/// The completion service collaborator.
///
/// Accepts a model identifier and a conversation and returns a reply
/// already validated against the schema. The debate driver only ever
/// talks to this trait, so tests can substitute a scripted mock.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Request one schema-conforming reply for the given conversation
    async fn reply(&self, model: &str, messages: &[Message]) -> CompletionResult<Reply>;
}

/// OpenAI-compatible chat-completions client
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    request_config: RequestConfig,
}

impl OpenAiClient {
    /// Create a new client
    pub fn new(config: &ApiConfig, request_config: RequestConfig) -> CompletionResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(CompletionError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_config,
        })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a single request (internal)
    async fn execute_request(&self, url: &str, request: &ChatRequest) -> CompletionResult<Reply> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    CompletionError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        let content = chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| CompletionError::InvalidResponse {
                message: "Response carried no completion choice".to_string(),
            })?;

        let reply: Reply =
            serde_json::from_str(content).map_err(|e| CompletionError::InvalidResponse {
                message: format!("Completion is not a valid reply: {}", e),
            })?;

        // A schema-invalid reply counts as a failed attempt and is
        // re-requested like any other failure.
        reply.validate()?;

        Ok(reply)
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn reply(&self, model: &str, messages: &[Message]) -> CompletionResult<Reply> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest::for_reply(model, messages.to_vec());

        let mut last_error = None;
        let mut retries = 0;

        while retries <= self.request_config.max_retries {
            if retries > 0 {
                let delay = Duration::from_millis(
                    self.request_config.retry_delay_ms * (2_u64.pow(retries - 1)),
                );
                warn!(
                    model = %model,
                    retry = retries,
                    delay_ms = delay.as_millis(),
                    "Retrying completion request"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();

            match self.execute_request(&url, &request).await {
                Ok(reply) => {
                    let latency = start.elapsed();
                    info!(
                        model = %model,
                        latency_ms = latency.as_millis(),
                        forfeiting = reply.to_forfeit_debate,
                        "Completion succeeded"
                    );
                    return Ok(reply);
                }
                Err(e) => {
                    let latency = start.elapsed();
                    error!(
                        model = %model,
                        error = %e,
                        latency_ms = latency.as_millis(),
                        retry = retries,
                        "Completion request failed"
                    );
                    last_error = Some(e);
                    retries += 1;
                }
            }
        }

        Err(CompletionError::Unavailable {
            message: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string()),
            retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig {
            api_key: "test_key".to_string(),
            base_url: "https://api.openai.com/v1/".to_string(),
        };

        let request_config = RequestConfig::default();

        let client = OpenAiClient::new(&config, request_config);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.openai.com/v1");
    }
}
