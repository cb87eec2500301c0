use crate::error::{PlannerError, Result};
use crate::types::NormalizationMode;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://fastapi-ai-planner.onrender.com".to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Process-wide settings, validated once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub mode: NormalizationMode,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn builder(api_key: Option<String>) -> ConfigBuilder {
        ConfigBuilder {
            api_key,
            api_url: None,
            mode: None,
            request_timeout: None,
            allowed_origins: None,
        }
    }
}

// The key must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("mode", &self.mode)
            .field("request_timeout", &self.request_timeout)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

pub struct ConfigBuilder {
    api_key: Option<String>,
    api_url: Option<String>,
    mode: Option<NormalizationMode>,
    request_timeout: Option<Duration>,
    allowed_origins: Option<Vec<String>>,
}

impl ConfigBuilder {
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn mode(mut self, mode: NormalizationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Some(origins);
        self
    }

    /// Fails with [`PlannerError::MissingApiKey`] when no usable key was given.
    pub fn build(self) -> Result<Config> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(PlannerError::MissingApiKey)?;

        Ok(Config {
            api_key,
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            mode: self.mode.unwrap_or_default(),
            request_timeout: self
                .request_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            allowed_origins: self
                .allowed_origins
                .unwrap_or_else(default_allowed_origins),
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected() {
        let err = Config::builder(None).build().unwrap_err();
        assert!(matches!(err, PlannerError::MissingApiKey));
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = Config::builder(Some("   ".into())).build().unwrap_err();
        assert!(matches!(err, PlannerError::MissingApiKey));
    }

    #[test]
    fn defaults_are_applied() {
        let config = Config::builder(Some("sk-test".into())).build().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.mode, NormalizationMode::Json);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.allowed_origins, default_allowed_origins());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::builder(Some("sk-test".into()))
            .api_url("http://127.0.0.1:9999/v1/chat/completions")
            .mode(NormalizationMode::Sections)
            .request_timeout(Duration::from_secs(5))
            .allowed_origins(vec!["http://example.com".into()])
            .build()
            .unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9999/v1/chat/completions");
        assert_eq!(config.mode, NormalizationMode::Sections);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.allowed_origins, vec!["http://example.com"]);
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = Config::builder(Some("sk-secret-value".into()))
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn origin_list_is_split_and_trimmed() {
        assert_eq!(
            parse_origin_list(" http://a.test, ,https://b.test "),
            vec!["http://a.test", "https://b.test"]
        );
        assert!(parse_origin_list("").is_empty());
    }
}
