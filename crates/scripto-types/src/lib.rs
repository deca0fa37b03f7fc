//! Types shared by the SCRIPTO server, database and client crates.

pub mod api;
pub mod models;
pub mod notifications;

pub use models::{
    ContentType, GenerationRequest, GenerationResult, Profile, SavedContent, SourceType,
    UnknownContentType, ValidationError,
};
pub use notifications::{Notification, NotificationLevel};
