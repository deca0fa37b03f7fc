use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "qwen/qwen3-14b:free";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);
pub const DEFAULT_APP_URL: &str = "https://scripto.lovable.dev";
pub const DEFAULT_APP_TITLE: &str = "SCRIPTO";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model provider request timed out")]
    Timeout,
    #[error("model provider unreachable: {0}")]
    Transport(String),
    #[error("model provider returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },
    #[error("malformed model provider response: {0}")]
    MalformedResponse(String),
    #[error("model provider API key is not configured")]
    NotConfigured,
}

/// One system + user chat-completion round trip.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Sent as `HTTP-Referer` for provider attribution.
    pub app_url: String,
    /// Sent as `X-Title`.
    pub app_title: String,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout: DEFAULT_TIMEOUT,
            app_url: DEFAULT_APP_URL.into(),
            app_title: DEFAULT_APP_TITLE.into(),
        }
    }
}

impl fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("app_url", &self.app_url)
            .field("app_title", &self.app_title)
            .finish()
    }
}

/// OpenAI-compatible chat-completions client for OpenRouter.
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Strip the API key from any text that may reach a caller or a log line.
    fn scrub(&self, text: &str) -> String {
        scrub_secret(text, &self.config.api_key)
    }

    fn request_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Transport(self.scrub(&err.to_string()))
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenRouterClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        debug!(model = %self.config.model, "Sending chat completion request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.app_url)
            .header("X-Title", &self.config.app_title)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": system },
                    { "role": "user", "content": user },
                ],
            }))
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;
        let data: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = data["error"]["message"].as_str().map(|m| self.scrub(m));
            warn!(
                "Model provider returned {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(LlmError::Status { status: status.as_u16(), message });
        }

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| LlmError::MalformedResponse("missing choices[0].message.content".into()))
    }
}

pub fn scrub_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    text.replace(secret, "[redacted]")
}
