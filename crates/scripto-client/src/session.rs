use reqwest::StatusCode;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

use scripto_types::api::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use crate::error::ClientError;
use crate::http::{Failure, check, join};

/// An authenticated session as issued by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

/// Holds the current session and broadcasts sign-in/sign-out changes.
pub struct SessionStore {
    http: reqwest::Client,
    base_url: String,
    tx: watch::Sender<Option<Session>>,
}

impl SessionStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            http,
            base_url: base_url.into(),
            tx,
        }
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let response = self
            .http
            .post(join(&self.base_url, "/auth/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let body: LoginResponse = check(response).await.map_err(auth_error)?.json().await?;

        let session = Session {
            user_id: body.user_id,
            username: body.username,
            token: body.token,
        };
        info!("Signed in as {}", session.username);
        self.set_session(session.clone());
        Ok(session)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let response = self
            .http
            .post(join(&self.base_url, "/auth/register"))
            .json(&RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let body: RegisterResponse = check(response).await.map_err(auth_error)?.json().await?;

        let session = Session {
            user_id: body.user_id,
            username: username.to_string(),
            token: body.token,
        };
        info!("Registered {}", session.username);
        self.set_session(session.clone());
        Ok(session)
    }

    /// Install a session obtained elsewhere, e.g. restored from disk.
    pub fn set_session(&self, session: Session) {
        self.tx.send_replace(Some(session));
    }

    pub fn get_session(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Receiver that observes every sign-in and sign-out.
    pub fn on_auth_state_change(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    pub fn sign_out(&self) {
        if self.tx.send_replace(None).is_some() {
            info!("Signed out");
        }
    }
}

fn auth_error(failure: Failure) -> ClientError {
    match failure.status {
        StatusCode::UNAUTHORIZED => ClientError::Auth,
        status => ClientError::Rejected {
            status: status.as_u16(),
            message: failure.message,
        },
    }
}
