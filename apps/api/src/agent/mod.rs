//! Chat agent client — the single point of entry for all AI calls.
//!
//! No other module may talk to the AI service directly; the matcher's summary
//! and rating generation both go through [`ChatAgent`]. The trait seam exists
//! so handler tests can substitute a canned agent with no network access.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const AGENT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const AGENT_API_VERSION: &str = "2023-06-01";
/// The model used for all agent calls. Hardcoded to prevent accidental drift
/// between summary and rating generation.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Agent returned empty content")]
    EmptyContent,
}

/// Token usage reported by one agent call. Consumed by cost accounting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// The text reply of one agent call plus its token usage.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: String,
    pub usage: Usage,
}

/// Backend-agnostic chat agent. Carried in `AppState` as `Arc<dyn ChatAgent>`.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Sends one system + user prompt pair and returns the text reply.
    async fn complete(&self, system: &str, prompt: &str) -> Result<ChatReply, AgentError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AgentMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AgentMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AgentResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AgentResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP client
// ────────────────────────────────────────────────────────────────────────────

/// The production [`ChatAgent`]: wraps the messages API with retry logic.
/// Retries on 429 (rate limit) and 5xx with exponential backoff (1s, 2s, 4s).
#[derive(Clone)]
pub struct AgentClient {
    client: Client,
    api_key: String,
}

impl AgentClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl ChatAgent for AgentClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<ChatReply, AgentError> {
        let request_body = AgentRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AgentMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<AgentError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Agent call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(AGENT_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", AGENT_API_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AgentError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Agent API returned {}: {}", status, body);
                last_error = Some(AgentError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(AgentError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let agent_response: AgentResponse = response.json().await?;

            debug!(
                "Agent call succeeded: input_tokens={}, output_tokens={}",
                agent_response.usage.input_tokens, agent_response.usage.output_tokens
            );

            let content = agent_response
                .text()
                .ok_or(AgentError::EmptyContent)?
                .to_string();

            return Ok(ChatReply {
                content,
                usage: agent_response.usage,
            });
        }

        Err(last_error.unwrap_or(AgentError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: AgentResponse = serde_json::from_str(
            r#"{
                "content": [
                    {"type": "thinking", "text": null},
                    {"type": "text", "text": "8"}
                ],
                "usage": {"input_tokens": 120, "output_tokens": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("8"));
        assert_eq!(response.usage.input_tokens, 120);
    }

    #[test]
    fn test_response_without_text_block_is_none() {
        let response: AgentResponse = serde_json::from_str(
            r#"{"content": [], "usage": {"input_tokens": 0, "output_tokens": 0}}"#,
        )
        .unwrap();
        assert_eq!(response.text(), None);
    }
}
