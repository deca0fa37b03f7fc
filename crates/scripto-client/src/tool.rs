use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing::debug;

use scripto_types::{GenerationRequest, GenerationResult, SavedContent, ValidationError};

use crate::animator::{Animator, DisplaySlot, Frame};
use crate::error::ClientError;
use crate::generate::GenerationClient;
use crate::persistence::ContentLibrary;

/// The result currently held by the tool, possibly edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentResult {
    pub request: GenerationRequest,
    pub result: GenerationResult,
}

#[derive(Default)]
struct ToolState {
    last_request: Option<GenerationRequest>,
    current: Option<CurrentResult>,
}

/// One content tool screen: generate, reveal, edit and save.
///
/// Each `generate` call takes a new request token. Only the newest token's
/// result is kept and revealed; older ones resolve to `Ok(None)`.
pub struct ContentTool<R = StdRng> {
    client: GenerationClient<R>,
    library: Arc<ContentLibrary>,
    animator: Animator,
    slot: DisplaySlot,
    latest: AtomicU64,
    saving: AtomicBool,
    state: Mutex<ToolState>,
}

impl<R: Rng + Send> ContentTool<R> {
    pub fn new(client: GenerationClient<R>, library: Arc<ContentLibrary>, animator: Animator) -> Self {
        Self {
            client,
            library,
            animator,
            slot: DisplaySlot::new(),
            latest: AtomicU64::new(0),
            saving: AtomicBool::new(false),
            state: Mutex::new(ToolState::default()),
        }
    }

    pub async fn generate(&self, request: GenerationRequest) -> Result<Option<GenerationResult>, ClientError> {
        request.validate()?;

        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.animator.cancel();
        self.state().last_request = Some(request.clone());

        let result = self.client.generate(&request).await?;

        let mut state = self.state();
        if self.latest.load(Ordering::SeqCst) != token {
            debug!(token, "Discarding superseded generation result");
            return Ok(None);
        }
        state.current = Some(CurrentResult {
            request,
            result: result.clone(),
        });
        let display = self.slot.claim();
        self.animator.reveal(&self.slot, display, result.text.clone());

        Ok(Some(result))
    }

    /// Run the last submitted request again ("Generate More").
    pub async fn regenerate(&self) -> Result<Option<GenerationResult>, ClientError> {
        let request = self
            .state()
            .last_request
            .clone()
            .ok_or(ValidationError::EmptyTopic)?;
        self.generate(request).await
    }

    /// Replace the current result's text before saving.
    pub fn edit(&self, text: impl Into<String>) -> Result<(), ClientError> {
        let text = text.into();
        let mut state = self.state();
        let current = state.current.as_mut().ok_or(ValidationError::NothingToSave)?;
        current.result.text = text.clone();

        self.animator.cancel();
        let display = self.slot.claim();
        self.slot.write(display, &text, true);
        Ok(())
    }

    /// Save the current result. A blank title falls back to the topic.
    pub async fn save(&self, title: &str) -> Result<SavedContent, ClientError> {
        let current = self
            .current()
            .filter(|c| !c.result.text.trim().is_empty())
            .ok_or(ValidationError::NothingToSave)?;

        let _guard = SaveGuard::acquire(&self.saving).ok_or(ClientError::SaveInProgress)?;

        let title = match title.trim() {
            "" => current.request.topic.trim(),
            t => t,
        };
        self.library
            .save(
                title,
                &current.result.text,
                current.request.content_type,
                current.request.platform(),
            )
            .await
    }

    pub fn current(&self) -> Option<CurrentResult> {
        self.state().current.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    pub fn display(&self) -> watch::Receiver<Frame> {
        self.slot.subscribe()
    }

    /// Resolve once the current reveal has written its final frame.
    pub async fn wait_for_reveal(&self) -> Option<String> {
        self.current()?;
        let mut rx = self.slot.subscribe();
        let frame = rx.wait_for(|frame| frame.complete).await.ok()?;
        Some(frame.text.clone())
    }

    fn state(&self) -> MutexGuard<'_, ToolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the in-flight save flag; released on drop.
struct SaveGuard<'a>(&'a AtomicBool);

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
