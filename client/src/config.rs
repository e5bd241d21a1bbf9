use crate::error::{ApiError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.radiumchat.com/v1";

pub const API_KEY_ENV: &str = "RADIUM_API_KEY";
pub const BASE_URL_ENV: &str = "RADIUM_BASE_URL";

/// Credentials and endpoint for one client. Immutable once built.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::Config("API key must not be empty".to_string()));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads `RADIUM_API_KEY` and, when set, `RADIUM_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ApiError::Config(format!("{} is not set", API_KEY_ENV)))?;
        let config = Self::new(api_key)?;

        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_platform_url() {
        let config = ClientConfig::new("rk-123").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "rk-123");
    }

    #[test]
    fn rejects_blank_key() {
        assert!(matches!(ClientConfig::new(""), Err(ApiError::Config(_))));
        assert!(matches!(ClientConfig::new("   "), Err(ApiError::Config(_))));
    }

    #[test]
    fn trims_trailing_slash_from_override() {
        let config = ClientConfig::new("k").unwrap().with_base_url("http://localhost:9000/v1/");
        assert_eq!(config.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn debug_output_hides_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
