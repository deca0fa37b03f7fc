//! HTTP surface of SCRIPTO: the generation endpoint, session issuing,
//! saved-content and profile CRUD, and the router that ties them together.

pub mod auth;
pub mod content;
pub mod error;
pub mod generate;
pub mod llm;
pub mod middleware;
pub mod profile;
pub mod prompts;
pub mod routes;

pub use auth::{AppState, AppStateInner};
pub use error::ApiError;
pub use llm::{ChatCompletion, LlmError, OpenRouterClient, OpenRouterConfig};
pub use routes::router;
