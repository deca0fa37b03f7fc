use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- Content types --

/// The generator family a request targets. Selects both the remote system
/// instruction and the fallback template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Script,
    Caption,
    Hashtags,
    Bio,
    Ideas,
    Inspiration,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        Self::Script,
        Self::Caption,
        Self::Hashtags,
        Self::Bio,
        Self::Ideas,
        Self::Inspiration,
    ];

    /// Wire name, as stored in the `type` column of `user_content`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Caption => "caption",
            Self::Hashtags => "hashtags",
            Self::Bio => "bio",
            Self::Ideas => "ideas",
            Self::Inspiration => "inspiration",
        }
    }

    /// Human-facing label used in saved-content titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Script => "Script",
            Self::Caption => "Caption",
            Self::Hashtags => "Hashtags",
            Self::Bio => "Bio",
            Self::Ideas => "Ideas",
            Self::Inspiration => "Inspiration",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type '{0}'")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

// -- Requests --

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a topic is required to generate content")]
    EmptyTopic,
    #[error("there is no generated content to save")]
    NothingToSave,
}

/// A single generation request built from one tool submission.
///
/// `category` and `format` only feed the ideas/inspiration templates;
/// `duration` (minutes) only feeds scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub platform: Option<String>,
    pub duration: Option<String>,
    pub audience: Option<String>,
    pub category: Option<String>,
    pub format: Option<String>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            topic: topic.into(),
            content_type,
            platform: None,
            duration: None,
            audience: None,
            category: None,
            format: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Rejects empty and whitespace-only topics.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        Ok(())
    }

    /// Platform with surrounding whitespace removed; `None` when blank.
    pub fn platform(&self) -> Option<&str> {
        non_blank(self.platform.as_deref())
    }

    pub fn duration(&self) -> Option<&str> {
        non_blank(self.duration.as_deref())
    }

    pub fn audience(&self) -> Option<&str> {
        non_blank(self.audience.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    pub fn format(&self) -> Option<&str> {
        non_blank(self.format.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// -- Results --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub source: SourceType,
}

impl GenerationResult {
    pub fn remote(text: impl Into<String>) -> Self {
        Self { text: text.into(), source: SourceType::Remote }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self { text: text.into(), source: SourceType::Fallback }
    }
}

// -- Persisted records --

/// A user-owned row of `user_content`. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedContent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub platform: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parses_case_insensitively() {
        assert_eq!("Script".parse::<ContentType>().unwrap(), ContentType::Script);
        assert_eq!(" HASHTAGS ".parse::<ContentType>().unwrap(), ContentType::Hashtags);
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn content_type_serializes_lowercase() {
        let json = serde_json::to_string(&ContentType::Inspiration).unwrap();
        assert_eq!(json, "\"inspiration\"");
    }

    #[test]
    fn blank_topics_are_rejected() {
        for topic in ["", "   ", "\t\n"] {
            let req = GenerationRequest::new(topic, ContentType::Bio);
            assert_eq!(req.validate(), Err(ValidationError::EmptyTopic));
        }
        assert!(GenerationRequest::new("dogs", ContentType::Bio).validate().is_ok());
    }

    #[test]
    fn blank_optionals_read_as_none() {
        let req = GenerationRequest::new("dogs", ContentType::Script)
            .with_platform("  ")
            .with_duration(" 10 ");
        assert_eq!(req.platform(), None);
        assert_eq!(req.duration(), Some("10"));
    }

    #[test]
    fn saved_content_uses_type_on_the_wire() {
        let row = SavedContent {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            title: "Fitness Hashtags".into(),
            content: "#Fitness".into(),
            content_type: "hashtags".into(),
            platform: None,
            created_at: DateTime::default(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], "hashtags");
        assert!(value.get("content_type").is_none());
    }
}
