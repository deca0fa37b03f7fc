use thiserror::Error;

use scripto_types::ValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("you must be signed in to do that")]
    Auth,
    #[error("{0}")]
    NotFound(String),
    #[error("could not reach saved content: {0}")]
    Persistence(String),
    #[error("a save is already in progress")]
    SaveInProgress,
    /// The server refused a non-persistence request, e.g. a taken username.
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
