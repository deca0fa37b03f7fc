use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use scripto_api::OpenRouterConfig;

/// Placeholder JWT secrets that MUST NOT be used.
pub const PLACEHOLDER_SECRETS: &[&str] = &[
    "change-me-to-a-random-string",
    "dev-secret-change-me",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCRIPTO_JWT_SECRET is unset or still a placeholder")]
    InsecureJwtSecret,
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings, read once at startup.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub jwt_secret: String,
    /// `None` when `OPENROUTER_API_KEY` is absent.
    pub llm: Option<OpenRouterConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let jwt_secret = lookup("SCRIPTO_JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            return Err(ConfigError::InsecureJwtSecret);
        }

        let port = var("SCRIPTO_PORT", "3000");
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            name: "SCRIPTO_PORT",
            value: port,
        })?;

        let llm = match lookup("OPENROUTER_API_KEY").filter(|key| !key.trim().is_empty()) {
            Some(api_key) => {
                let timeout = var("SCRIPTO_LLM_TIMEOUT_SECS", "45");
                let timeout: u64 = timeout.parse().map_err(|_| ConfigError::Invalid {
                    name: "SCRIPTO_LLM_TIMEOUT_SECS",
                    value: timeout,
                })?;

                let mut config = OpenRouterConfig::new(api_key);
                config.timeout = Duration::from_secs(timeout);
                if let Some(base_url) = lookup("SCRIPTO_LLM_BASE_URL") {
                    config.base_url = base_url;
                }
                if let Some(model) = lookup("SCRIPTO_LLM_MODEL") {
                    config.model = model;
                }
                if let Some(app_url) = lookup("SCRIPTO_APP_URL") {
                    config.app_url = app_url;
                }
                if let Some(app_title) = lookup("SCRIPTO_APP_TITLE") {
                    config.app_title = app_title;
                }
                Some(config)
            }
            None => None,
        };

        Ok(Self {
            host: var("SCRIPTO_HOST", "0.0.0.0"),
            port,
            db_path: var("SCRIPTO_DB_PATH", "scripto.db").into(),
            jwt_secret,
            llm,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            name: "SCRIPTO_HOST",
            value: raw,
        })
    }
}
