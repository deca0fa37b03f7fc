use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_CHUNK_CHARS: usize = 3;
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// What the display currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Owner of this frame; writes carrying any other token are dropped.
    pub token: u64,
    pub text: String,
    pub complete: bool,
}

/// The on-screen text slot. Cloning shares the same slot.
#[derive(Debug, Clone)]
pub struct DisplaySlot {
    tx: Arc<watch::Sender<Frame>>,
}

impl DisplaySlot {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Frame::default());
        Self { tx: Arc::new(tx) }
    }

    /// Take ownership of the slot and blank it. Every earlier token stops
    /// being able to write.
    pub fn claim(&self) -> u64 {
        let mut token = 0;
        self.tx.send_modify(|frame| {
            frame.token += 1;
            frame.text.clear();
            frame.complete = false;
            token = frame.token;
        });
        token
    }

    /// Replace the text if `token` still owns the slot. Returns whether the
    /// write landed.
    pub fn write(&self, token: u64, text: &str, complete: bool) -> bool {
        self.tx.send_if_modified(|frame| {
            if frame.token != token {
                return false;
            }
            frame.text.clear();
            frame.text.push_str(text);
            frame.complete = complete;
            true
        })
    }

    pub fn current(&self) -> Frame {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.tx.subscribe()
    }
}

impl Default for DisplaySlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation Animator: reveals an already complete string a few
/// characters per tick.
pub struct Animator {
    chunk_chars: usize,
    tick: Duration,
    running: Mutex<Option<CancellationToken>>,
}

impl Animator {
    pub fn new(chunk_chars: usize, tick: Duration) -> Self {
        Self {
            chunk_chars: chunk_chars.max(1),
            tick,
            running: Mutex::new(None),
        }
    }

    /// Start revealing `text` into `slot` under `token`, cancelling any
    /// reveal already running. The task resolves to `true` once the full
    /// text has been written.
    pub fn reveal(&self, slot: &DisplaySlot, token: u64, text: impl Into<String>) -> JoinHandle<bool> {
        let cancel = CancellationToken::new();
        if let Some(previous) = self.swap_running(Some(cancel.clone())) {
            previous.cancel();
        }

        let slot = slot.clone();
        let text = text.into();
        let chunk_chars = self.chunk_chars;
        let tick = self.tick;

        tokio::spawn(async move {
            for end in chunk_ends(&text, chunk_chars) {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(token, "Reveal cancelled");
                        return false;
                    }
                    _ = tokio::time::sleep(tick) => {}
                }
                let partial = text.get(..end).unwrap_or(&text);
                if !slot.write(token, partial, false) {
                    return false;
                }
            }
            if cancel.is_cancelled() {
                return false;
            }
            slot.write(token, &text, true)
        })
    }

    /// Stop the running reveal, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.swap_running(None) {
            previous.cancel();
        }
    }

    fn swap_running(&self, next: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *running, next)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CHARS, DEFAULT_TICK)
    }
}

/// Byte offsets of each partial frame, always on char boundaries. The full
/// length is not included; the final frame is written separately.
fn chunk_ends(text: &str, chunk_chars: usize) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .skip(chunk_chars)
        .step_by(chunk_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_ends_respect_char_boundaries() {
        let text = "héllo wörld 🐶!";
        for chunk in 1..5 {
            for end in chunk_ends(text, chunk) {
                assert!(text.is_char_boundary(end));
            }
        }
        assert_eq!(chunk_ends("abcdefg", 3), vec![3, 6]);
        assert!(chunk_ends("ab", 3).is_empty());
        assert!(chunk_ends("", 3).is_empty());
    }

    #[tokio::test]
    async fn reveal_ends_on_the_exact_text() {
        let slot = DisplaySlot::new();
        let animator = Animator::new(2, Duration::from_millis(1));
        let text = "Dog lover bio 🐾 with emoji";

        let token = slot.claim();
        assert!(animator.reveal(&slot, token, text).await.unwrap());

        let frame = slot.current();
        assert_eq!(frame.text, text);
        assert!(frame.complete);
    }

    #[tokio::test]
    async fn frames_grow_monotonically() {
        let slot = DisplaySlot::new();
        let mut rx = slot.subscribe();
        let animator = Animator::new(3, Duration::from_millis(1));
        let text = "The quick brown fox jumps over the lazy dog";

        let token = slot.claim();
        let handle = animator.reveal(&slot, token, text);

        let mut seen = Vec::new();
        loop {
            rx.changed().await.unwrap();
            let frame = rx.borrow_and_update().clone();
            assert!(text.starts_with(&frame.text));
            seen.push(frame.text.len());
            if frame.complete {
                break;
            }
        }
        assert!(handle.await.unwrap());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), text.len());
    }

    #[tokio::test]
    async fn newer_reveal_wins_without_interleaving() {
        let slot = DisplaySlot::new();
        let mut rx = slot.subscribe();
        let animator = Animator::new(1, Duration::from_millis(2));
        let old = "old result that takes a long time to type out completely";
        let new = "new result";

        let old_token = slot.claim();
        let old_task = animator.reveal(&slot, old_token, old);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let new_token = slot.claim();
        let new_task = animator.reveal(&slot, new_token, new);

        loop {
            rx.changed().await.unwrap();
            let frame = rx.borrow_and_update().clone();
            if frame.token == new_token {
                assert!(new.starts_with(&frame.text), "interleaved frame: {:?}", frame.text);
                if frame.complete {
                    break;
                }
            }
        }

        assert!(!old_task.await.unwrap());
        assert!(new_task.await.unwrap());
        assert_eq!(slot.current().text, new);
    }

    #[test]
    fn stale_token_cannot_write() {
        let slot = DisplaySlot::new();
        let first = slot.claim();
        let second = slot.claim();

        assert!(!slot.write(first, "stale", true));
        assert!(slot.write(second, "fresh", true));
        assert_eq!(slot.current().text, "fresh");
    }
}
