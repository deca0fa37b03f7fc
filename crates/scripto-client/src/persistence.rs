use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{info, warn};
use uuid::Uuid;

use scripto_types::api::SaveContentRequest;
use scripto_types::{ContentType, Notification, SavedContent, ValidationError};

use crate::error::ClientError;
use crate::http::{Failure, check, join};
use crate::notify::Notifier;
use crate::session::SessionStore;

/// Row storage for saved content, always scoped by the caller's token.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn insert(&self, token: &str, request: &SaveContentRequest) -> Result<SavedContent, ClientError>;
    async fn list(&self, token: &str) -> Result<Vec<SavedContent>, ClientError>;
    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ClientError>;
}

/// `ContentStore` backed by the `/content` routes.
pub struct HttpContentStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

fn store_error(failure: Failure) -> ClientError {
    match failure.status {
        StatusCode::UNAUTHORIZED => ClientError::Auth,
        StatusCode::NOT_FOUND => ClientError::NotFound(failure.message),
        _ => ClientError::Persistence(failure.message),
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Persistence(err.to_string())
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn insert(&self, token: &str, request: &SaveContentRequest) -> Result<SavedContent, ClientError> {
        let response = self
            .http
            .post(join(&self.base_url, "/content"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        check(response)
            .await
            .map_err(store_error)?
            .json()
            .await
            .map_err(transport_error)
    }

    async fn list(&self, token: &str) -> Result<Vec<SavedContent>, ClientError> {
        let response = self
            .http
            .get(join(&self.base_url, "/content"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        check(response)
            .await
            .map_err(store_error)?
            .json()
            .await
            .map_err(transport_error)
    }

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(join(&self.base_url, &format!("/content/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        check(response).await.map_err(store_error)?;
        Ok(())
    }
}

/// Persistence Adapter: the signed-in user's saved items plus a local
/// cache a UI can render from.
pub struct ContentLibrary {
    store: Arc<dyn ContentStore>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    items: Mutex<Vec<SavedContent>>,
}

impl ContentLibrary {
    pub fn new(store: Arc<dyn ContentStore>, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            session,
            notifier,
            items: Mutex::new(Vec::new()),
        }
    }

    /// Cached items, newest first.
    pub fn items(&self) -> Vec<SavedContent> {
        self.cache().clone()
    }

    pub async fn save(
        &self,
        title: &str,
        content: &str,
        content_type: ContentType,
        platform: Option<&str>,
    ) -> Result<SavedContent, ClientError> {
        let token = self.require_session("Could not save content")?;
        if content.trim().is_empty() {
            return Err(ValidationError::NothingToSave.into());
        }

        let request = SaveContentRequest {
            title: title.trim().to_string(),
            content: content.to_string(),
            content_type: content_type.as_str().to_string(),
            platform: platform.map(str::to_string),
        };

        match self.store.insert(&token, &request).await {
            Ok(saved) => {
                info!("Saved content {}", saved.id);
                self.cache().insert(0, saved.clone());
                self.notifier.notify(Notification::success(
                    "Content saved",
                    "Your content has been saved to your library.",
                ));
                Ok(saved)
            }
            Err(e) => {
                warn!("Saving content failed: {}", e);
                self.notifier.notify(Notification::error("Could not save content", e.to_string()));
                Err(e)
            }
        }
    }

    /// Reload the cache from the store.
    pub async fn list(&self) -> Result<Vec<SavedContent>, ClientError> {
        let token = self.require_session("Could not load your content")?;

        match self.store.list(&token).await {
            Ok(items) => {
                *self.cache() = items.clone();
                Ok(items)
            }
            Err(e) => {
                warn!("Loading content failed: {}", e);
                self.notifier.notify(Notification::error("Could not load your content", e.to_string()));
                Err(e)
            }
        }
    }

    /// Remove the item from the cache first; put it back if the store
    /// refuses.
    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let token = self.require_session("Could not delete content")?;

        let removed = {
            let mut items = self.cache();
            items
                .iter()
                .position(|item| item.id == id)
                .map(|index| (index, items.remove(index)))
        };

        match self.store.delete(&token, id).await {
            Ok(()) => {
                info!("Deleted content {}", id);
                self.notifier.notify(Notification::success(
                    "Content deleted",
                    "The item has been removed from your library.",
                ));
                Ok(())
            }
            Err(e) => {
                if let Some((index, item)) = removed {
                    let mut items = self.cache();
                    let index = index.min(items.len());
                    items.insert(index, item);
                }
                warn!("Deleting content {} failed: {}", id, e);
                self.notifier.notify(Notification::error("Could not delete content", e.to_string()));
                Err(e)
            }
        }
    }

    fn require_session(&self, title: &str) -> Result<String, ClientError> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => {
                self.notifier.notify(Notification::error(title, ClientError::Auth.to_string()));
                Err(ClientError::Auth)
            }
        }
    }

    fn cache(&self) -> MutexGuard<'_, Vec<SavedContent>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
