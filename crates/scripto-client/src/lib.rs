//! Client side of the SCRIPTO pipeline: generation with local fallback,
//! the typing-effect animator, saved-content persistence and sessions.
//!
//! A UI binds to [`ContentTool`] (current result and display frames),
//! [`ContentLibrary`] (saved items) and a [`Notifier`] subscription.

pub mod animator;
pub mod error;
pub mod generate;
mod http;
pub mod notify;
pub mod persistence;
pub mod profile;
pub mod session;
pub mod tool;

pub use animator::{Animator, DisplaySlot, Frame};
pub use error::ClientError;
pub use generate::{GenerationClient, GenerationEndpoint, HttpGenerationEndpoint, RemoteGenerationError};
pub use notify::{ChannelNotifier, Notifier};
pub use persistence::{ContentLibrary, ContentStore, HttpContentStore};
pub use profile::ProfileClient;
pub use session::{Session, SessionStore};
pub use tool::ContentTool;
