use std::sync::Arc;

use reqwest::StatusCode;

use scripto_types::Profile;
use scripto_types::api::UpdateProfileRequest;

use crate::error::ClientError;
use crate::http::{Failure, check, join};
use crate::session::SessionStore;

/// Reads and edits the signed-in user's profile.
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub async fn fetch(&self) -> Result<Profile, ClientError> {
        let token = self.session.token().ok_or(ClientError::Auth)?;
        let response = self
            .http
            .get(join(&self.base_url, "/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response).await.map_err(profile_error)?.json().await?)
    }

    pub async fn update(&self, changes: &UpdateProfileRequest) -> Result<Profile, ClientError> {
        let token = self.session.token().ok_or(ClientError::Auth)?;
        let response = self
            .http
            .put(join(&self.base_url, "/profile"))
            .bearer_auth(token)
            .json(changes)
            .send()
            .await?;
        Ok(check(response).await.map_err(profile_error)?.json().await?)
    }
}

fn profile_error(failure: Failure) -> ClientError {
    match failure.status {
        StatusCode::UNAUTHORIZED => ClientError::Auth,
        StatusCode::NOT_FOUND => ClientError::NotFound(failure.message),
        status => ClientError::Rejected {
            status: status.as_u16(),
            message: failure.message,
        },
    }
}
