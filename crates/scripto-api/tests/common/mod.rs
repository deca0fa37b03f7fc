#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use scripto_api::auth::create_token;
use scripto_api::{AppState, AppStateInner, ChatCompletion, LlmError};
use scripto_db::Database;

pub const JWT_SECRET: &str = "test-secret-for-integration";

/// Scripted provider that records every call.
pub struct StubLlm {
    reply: Result<String, fn() -> LlmError>,
    pub calls: AtomicUsize,
    pub system_prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            system_prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: fn() -> LlmError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
            system_prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatCompletion for StubLlm {
    async fn complete(&self, system: &str, _user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.system_prompts.lock().unwrap().push(system.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

pub fn state_with(llm: Option<Arc<dyn ChatCompletion>>) -> AppState {
    Arc::new(AppStateInner {
        db: Database::open_in_memory().unwrap(),
        jwt_secret: JWT_SECRET.into(),
        llm,
    })
}

/// Insert a user directly and mint a token for it.
pub fn seed_user(state: &AppState, username: &str) -> (Uuid, String) {
    let id = Uuid::new_v4();
    assert!(state.db.create_user(&id.to_string(), username, "unused-hash").unwrap());
    let token = create_token(JWT_SECRET, id, username).unwrap();
    (id, token)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse { status, headers, body }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "https://app.example")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "https://app.example");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Serve a fake chat-completions provider on an ephemeral port and return
/// its base URL. Requests must carry `Bearer {api_key}` and the app title.
pub async fn spawn_provider(
    api_key: &'static str,
    status: StatusCode,
    body: Value,
    delay: Duration,
) -> String {
    let handler = move |headers: HeaderMap| {
        let body = body.clone();
        async move {
            tokio::time::sleep(delay).await;
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                == Some(format!("Bearer {api_key}").as_str());
            let titled = headers.get("x-title").and_then(|v| v.to_str().ok()) == Some("SCRIPTO");
            if !authorized || !titled {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": { "message": "missing provider headers" } })),
                );
            }
            (status, Json(body))
        }
    };

    let app = Router::new().route("/api/v1/chat/completions", post(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}
