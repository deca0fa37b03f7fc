use axum::{
    Json, Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{self, AppState};
use crate::content;
use crate::generate;
use crate::middleware::require_auth;
use crate::profile;

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

const ALLOWED_HEADERS_VALUE: &str = "authorization, x-client-info, apikey, content-type";

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register).options(generate::preflight))
        .route("/auth/login", post(auth::login).options(generate::preflight))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route(
            "/generate-content",
            post(generate::generate_content).options(generate::preflight),
        )
        .route(
            "/content",
            get(content::list_content)
                .post(content::save_content)
                .options(generate::preflight),
        )
        .route(
            "/content/{id}",
            delete(content::delete_content).options(generate::preflight),
        )
        .route(
            "/profile",
            get(profile::get_profile)
                .put(profile::update_profile)
                .options(generate::preflight),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Permissive CORS: any origin, no credentials
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
        .allow_credentials(false);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        // CorsLayer only lists allowed headers on preflights
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS_VALUE),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
