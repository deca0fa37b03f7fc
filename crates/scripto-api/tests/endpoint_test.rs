/// Integration tests for `POST /generate-content`, driven through the full
/// router with either a scripted provider or a fake HTTP provider.
mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;

use scripto_api::{ChatCompletion, LlmError, OpenRouterClient, OpenRouterConfig, router};

use common::{StubLlm, empty_request, json_request, seed_user, send, spawn_provider, state_with};

const API_KEY: &str = "sk-or-test-key-123";

fn real_client(base_url: String, timeout: Duration) -> Arc<dyn ChatCompletion> {
    let mut config = OpenRouterConfig::new(API_KEY);
    config.base_url = base_url;
    config.timeout = timeout;
    Arc::new(OpenRouterClient::new(config).unwrap())
}

#[tokio::test]
async fn bio_request_returns_provider_text() {
    let stub = StubLlm::replying("Dog lover bio");
    let state = state_with(Some(stub.clone()));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request(
            "POST",
            "/generate-content",
            Some(&token),
            &json!({ "prompt": "dogs", "type": "bio", "platform": "instagram" }),
        ),
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!({ "generatedContent": "Dog lover bio" }));
    assert_eq!(stub.call_count(), 1);
    let prompts = stub.system_prompts.lock().unwrap();
    assert!(prompts[0].contains("bio writer for instagram"));
}

#[tokio::test]
async fn real_adapter_parses_provider_success() {
    let base = spawn_provider(
        API_KEY,
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "Dog lover bio" } }] }),
        Duration::ZERO,
    )
    .await;
    let state = state_with(Some(real_client(base, Duration::from_secs(5))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request(
            "POST",
            "/generate-content",
            Some(&token),
            &json!({ "prompt": "dogs", "type": "bio", "platform": "instagram" }),
        ),
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["generatedContent"], "Dog lover bio");
}

#[tokio::test]
async fn provider_rate_limit_becomes_500_with_message() {
    let base = spawn_provider(
        API_KEY,
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Rate limit exceeded" } }),
        Duration::ZERO,
    )
    .await;
    let state = state_with(Some(real_client(base, Duration::from_secs(5))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request(
            "POST",
            "/generate-content",
            Some(&token),
            &json!({ "prompt": "dogs", "type": "bio", "platform": "instagram" }),
        ),
    )
    .await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body["error"], "Rate limit exceeded");
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn provider_error_without_message_uses_generic_text() {
    let base = spawn_provider(API_KEY, StatusCode::BAD_GATEWAY, json!({}), Duration::ZERO).await;
    let state = state_with(Some(real_client(base, Duration::from_secs(5))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "caption" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body["error"], "Failed to generate content");
}

#[tokio::test]
async fn malformed_provider_body_is_500() {
    let base = spawn_provider(API_KEY, StatusCode::OK, json!({ "choices": [] }), Duration::ZERO).await;
    let state = state_with(Some(real_client(base, Duration::from_secs(5))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "script" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!resp.body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn provider_error_message_never_echoes_api_key() {
    let base = spawn_provider(
        API_KEY,
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": format!("Invalid key {API_KEY}") } }),
        Duration::ZERO,
    )
    .await;
    let state = state_with(Some(real_client(base, Duration::from_secs(5))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "bio" })),
    )
    .await;

    let error = resp.body["error"].as_str().unwrap();
    assert!(!error.contains(API_KEY), "leaked key in {error}");
    assert!(error.contains("[redacted]"));
}

#[tokio::test]
async fn slow_provider_times_out_with_504() {
    let base = spawn_provider(
        API_KEY,
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "too late" } }] }),
        Duration::from_secs(3),
    )
    .await;
    let state = state_with(Some(real_client(base, Duration::from_millis(200))));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "bio" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(resp.body["error"], "Content generation timed out");
}

#[tokio::test]
async fn missing_api_key_is_503_without_detail() {
    let state = state_with(None);
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "bio" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.body["error"], "Content generation is not configured");
}

#[tokio::test]
async fn missing_token_is_401_with_cors_headers() {
    let stub = StubLlm::replying("unused");
    let app = router(state_with(Some(stub.clone())));

    let resp = send(
        &app,
        json_request("POST", "/generate-content", None, &json!({ "prompt": "dogs", "type": "bio" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert!(resp.body["error"].is_string());
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        resp.headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn empty_prompt_is_rejected_before_provider_call() {
    let stub = StubLlm::replying("unused");
    let state = state_with(Some(stub.clone()));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "   ", "type": "bio" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string());
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn unknown_type_and_bad_json_are_400() {
    let stub = StubLlm::replying("unused");
    let state = state_with(Some(stub.clone()));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "poem" })),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body["error"].is_string());

    let raw = Request::builder()
        .method("POST")
        .uri("/generate-content")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = send(&app, raw).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn preflight_is_empty_200_with_cors_headers() {
    let app = router(state_with(None));

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/generate-content")
        .header(header::ORIGIN, "https://app.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type")
        .body(Body::empty())
        .unwrap();
    let resp = send(&app, req).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_null());
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let allowed = resp.headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    for name in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed.contains(name), "{name} missing from {allowed}");
    }
}

#[tokio::test]
async fn bare_options_without_token_is_200() {
    let app = router(state_with(None));
    let resp = send(&app, empty_request("OPTIONS", "/content", None)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn ideas_use_the_generic_instruction() {
    let stub = StubLlm::failing(|| LlmError::Timeout);
    let state = state_with(Some(stub.clone()));
    let (_, token) = seed_user(&state, "creator");
    let app = router(state);

    let resp = send(
        &app,
        json_request("POST", "/generate-content", Some(&token), &json!({ "prompt": "dogs", "type": "ideas" })),
    )
    .await;

    assert_eq!(resp.status, StatusCode::GATEWAY_TIMEOUT);
    let prompts = stub.system_prompts.lock().unwrap();
    assert_eq!(prompts[0], scripto_api::prompts::GENERIC_INSTRUCTION);
}
