use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ContentType, GenerationRequest};

// -- JWT Claims --

/// Session token claims. Issued by the auth handlers, checked by the
/// request middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

// -- Generation --

/// Body of `POST /generate-content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub prompt: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(req: &GenerationRequest) -> Self {
        Self {
            prompt: req.topic.trim().to_string(),
            content_type: req.content_type,
            platform: req.platform().map(str::to_string),
            duration: req.duration().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(rename = "generatedContent")]
    pub generated_content: String,
}

/// Error body used by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// -- Saved content --

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveContentRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub platform: Option<String>,
}

// -- Profiles --

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_matches_endpoint_shape() {
        let req: GenerateContentRequest = serde_json::from_str(
            r#"{"prompt":"dogs","type":"bio","platform":"instagram"}"#,
        )
        .unwrap();
        assert_eq!(req.prompt, "dogs");
        assert_eq!(req.content_type, ContentType::Bio);
        assert_eq!(req.platform.as_deref(), Some("instagram"));
        assert!(req.duration.is_none());
    }

    #[test]
    fn generate_request_from_domain_trims_and_drops_blanks() {
        let domain = GenerationRequest::new("  dogs  ", ContentType::Script)
            .with_platform("")
            .with_duration("10")
            .with_audience("dog owners");
        let wire = GenerateContentRequest::from(&domain);
        assert_eq!(wire.prompt, "dogs");
        assert!(wire.platform.is_none());
        assert_eq!(wire.duration.as_deref(), Some("10"));

        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["type"], "script");
        assert!(json.get("platform").is_none());
    }

    #[test]
    fn generate_response_is_camel_case() {
        let body = serde_json::to_string(&GenerateContentResponse {
            generated_content: "Dog lover bio".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"generatedContent":"Dog lover bio"}"#);
    }
}
