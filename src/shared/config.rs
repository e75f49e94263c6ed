//! Runtime configuration
//!
//! Only the catalog base URL comes from the environment (optionally via a
//! `.env` file). Everything else is a code-level setting with `with_*`
//! overrides.

use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

/// Environment variable holding the catalog service base URL
pub const API_BASE_URL_ENV: &str = "PARTS_API_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://blue-collar-ai-backend-production.up.railway.app";

/// Marker left in deployments that never configured a real backend
const PLACEHOLDER_MARKER: &str = "your-railway-url";

/// Whether the credit gate only disables the manual submit control or
/// blocks every input path at zero balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreditPolicy {
    #[default]
    Advisory,
    Enforced,
}

/// How resolutions of overlapping attempts are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Only the most recently issued attempt may change the search state
    #[default]
    LatestAttemptWins,
    /// Every resolution is applied in the order it arrives
    LastResolvedWins,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub starting_credits: u32,
    pub credit_policy: CreditPolicy,
    pub stale_policy: StalePolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            starting_credits: 8,
            credit_policy: CreditPolicy::Advisory,
            stale_policy: StalePolicy::LatestAttemptWins,
        }
    }
}

impl SearchSettings {
    pub fn with_starting_credits(mut self, credits: u32) -> Self {
        self.starting_credits = credits;
        self
    }

    pub fn with_credit_policy(mut self, policy: CreditPolicy) -> Self {
        self.credit_policy = policy;
        self
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }
}

/// Delays and canned results of the simulated capture services
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSettings {
    pub voice_delay: Duration,
    pub voice_transcript: String,
    pub image_delay: Duration,
    pub image_query: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            voice_delay: Duration::from_millis(2000),
            voice_transcript: "6203 bearing".to_string(),
            image_delay: Duration::from_millis(1500),
            image_query: "6203-2Z bearing".to_string(),
        }
    }
}

impl CaptureSettings {
    pub fn with_voice(mut self, delay: Duration, transcript: impl Into<String>) -> Self {
        self.voice_delay = delay;
        self.voice_transcript = transcript.into();
        self
    }

    pub fn with_image(mut self, delay: Duration, query: impl Into<String>) -> Self {
        self.image_delay = delay;
        self.image_query = query.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub search: SearchSettings,
    pub capture: CaptureSettings,
}

impl AppConfig {
    /// Build a config for the given base URL with default settings
    pub fn new(api_base_url: &str) -> AppResult<Self> {
        Ok(Self {
            api_base_url: Self::normalize_base_url(api_base_url)?,
            search: SearchSettings::default(),
            capture: CaptureSettings::default(),
        })
    }

    /// Load configuration from the environment, honouring a `.env` file
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self::new(&base_url)
    }

    pub fn with_search(mut self, search: SearchSettings) -> Self {
        self.search = search;
        self
    }

    pub fn with_capture(mut self, capture: CaptureSettings) -> Self {
        self.capture = capture;
        self
    }

    /// True when the base URL was never replaced with a real deployment
    pub fn is_placeholder_base_url(&self) -> bool {
        self.api_base_url.contains(PLACEHOLDER_MARKER)
    }

    fn normalize_base_url(raw: &str) -> AppResult<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::ConfigError(format!(
                "{} must not be empty",
                API_BASE_URL_ENV
            )));
        }

        reqwest::Url::parse(trimmed).map_err(|e| {
            AppError::ConfigError(format!("Invalid catalog base URL '{}': {}", trimmed, e))
        })?;

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_session_rules() {
        let config = AppConfig::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(config.search.starting_credits, 8);
        assert_eq!(config.search.credit_policy, CreditPolicy::Advisory);
        assert_eq!(config.search.stale_policy, StalePolicy::LatestAttemptWins);
        assert_eq!(config.capture.voice_transcript, "6203 bearing");
        assert_eq!(config.capture.image_query, "6203-2Z bearing");
        assert!(!config.is_placeholder_base_url());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::new("http://localhost:8080/ ").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            AppConfig::new("not a url"),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(AppConfig::new("  "), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_placeholder_detection() {
        let config = AppConfig::new("https://your-railway-url.up.railway.app").unwrap();
        assert!(config.is_placeholder_base_url());
    }
}
