use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, warn};

use scripto_fallback::Synthesizer;
use scripto_types::api::{GenerateContentRequest, GenerateContentResponse};
use scripto_types::{GenerationRequest, GenerationResult, Notification};

use crate::error::ClientError;
use crate::http::{check, join};
use crate::notify::Notifier;
use crate::session::SessionStore;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Why the remote path produced nothing usable. Always recovered by the
/// fallback synthesizer.
#[derive(Debug, Error)]
pub enum RemoteGenerationError {
    #[error("generation request failed: {0}")]
    Transport(String),
    #[error("generation endpoint returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("generation endpoint returned no text")]
    Empty,
}

/// The remote half of generation: one request, one answer.
#[async_trait]
pub trait GenerationEndpoint: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, RemoteGenerationError>;
}

/// Calls `POST /generate-content`, attaching the session token when there
/// is one.
pub struct HttpGenerationEndpoint {
    http: reqwest::Client,
    base_url: String,
    session: Option<Arc<SessionStore>>,
}

impl HttpGenerationEndpoint {
    pub fn new(base_url: impl Into<String>, session: Option<Arc<SessionStore>>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url, session))
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Option<Arc<SessionStore>>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }
}

#[async_trait]
impl GenerationEndpoint for HttpGenerationEndpoint {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, RemoteGenerationError> {
        let mut builder = self
            .http
            .post(join(&self.base_url, "/generate-content"))
            .json(request);
        if let Some(token) = self.session.as_ref().and_then(|s| s.token()) {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RemoteGenerationError::Transport(e.to_string()))?;
        let response = check(response).await.map_err(|f| RemoteGenerationError::Status {
            status: f.status.as_u16(),
            message: f.message,
        })?;
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RemoteGenerationError::Transport(e.to_string()))?;

        Ok(body.generated_content)
    }
}

/// Generation Request Client: remote first, local synthesizer on any
/// remote failure.
pub struct GenerationClient<R = StdRng> {
    endpoint: Arc<dyn GenerationEndpoint>,
    synthesizer: Mutex<Synthesizer<R>>,
    notifier: Arc<dyn Notifier>,
}

impl GenerationClient<StdRng> {
    pub fn new(endpoint: Arc<dyn GenerationEndpoint>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_synthesizer(endpoint, Synthesizer::from_os_rng(), notifier)
    }
}

impl<R: Rng + Send> GenerationClient<R> {
    pub fn with_synthesizer(
        endpoint: Arc<dyn GenerationEndpoint>,
        synthesizer: Synthesizer<R>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            endpoint,
            synthesizer: Mutex::new(synthesizer),
            notifier,
        }
    }

    /// Only an invalid request is an error; remote failures resolve to
    /// fallback content.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ClientError> {
        request.validate()?;

        let wire = GenerateContentRequest::from(request);
        debug!("Requesting {} content", wire.content_type);

        let failure = match self.endpoint.generate(&wire).await {
            Ok(text) if !text.trim().is_empty() => return Ok(GenerationResult::remote(text)),
            Ok(_) => RemoteGenerationError::Empty,
            Err(e) => e,
        };
        warn!("Remote generation failed, using fallback content: {}", failure);

        let text = self
            .synthesizer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .synthesize(request);

        self.notifier.notify(Notification::info(
            "Using demo content",
            format!(
                "The AI service is unavailable, so this {} was generated locally.",
                request.content_type.label().to_lowercase()
            ),
        ));
        Ok(GenerationResult::fallback(text))
    }
}
