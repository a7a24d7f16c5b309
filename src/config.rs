//! Configuration management and validation.
//!
//! Provides the configuration structures for sheet locations, display
//! defaults and fetch behaviour, with JSON file loading and validation.

use crate::constants::{
    APPLICATIONS_SHEET_URL, COMMUNITY_SHEET_URL, DEFAULT_IMAGE_WIDTH, DEFAULT_INITIAL_BACKOFF_MS,
    DEFAULT_MAX_RETRIES, DEFAULT_PREVIEW_LIMIT, DEFAULT_TIMEOUT_SECS, FALLBACK_IMAGE,
    MAX_BACKOFF_MS, MAX_FETCH_RETRIES, NEWS_SHEET_URL,
};
use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where each published sheet is read from (URL or local path)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSources {
    pub community: String,
    pub news: String,
    pub applications: String,
}

impl Default for SheetSources {
    fn default() -> Self {
        Self {
            community: COMMUNITY_SHEET_URL.to_string(),
            news: NEWS_SHEET_URL.to_string(),
            applications: APPLICATIONS_SHEET_URL.to_string(),
        }
    }
}

/// Network retrieval settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout
    pub timeout_secs: u64,

    /// Retries after the first failed attempt
    pub max_retries: u32,

    /// Backoff before the first retry, doubled on each further retry
    pub initial_backoff_ms: u64,

    /// Append a timestamp query parameter so stale exports are not served
    pub cache_bust: bool,
}

impl FetchConfig {
    /// Wait before retry number `retry` (1-based), doubling and capped at `MAX_BACKOFF_MS`
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let factor = 2u64.checked_pow(retry.saturating_sub(1)).unwrap_or(u64::MAX);
        let delay = self.initial_backoff_ms.saturating_mul(factor);
        Duration::from_millis(delay.min(MAX_BACKOFF_MS))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            cache_bust: true,
        }
    }
}

/// Global configuration for content loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub sources: SheetSources,

    /// Items shown in home-page previews
    pub preview_limit: usize,

    /// Image used whenever a sheet image link is missing or unusable
    pub fallback_image: String,

    /// Requested width of converted Drive images
    pub image_width: u32,

    pub fetch: FetchConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sources: SheetSources::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            fallback_image: FALLBACK_IMAGE.to_string(),
            image_width: DEFAULT_IMAGE_WIDTH,
            fetch: FetchConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Default config file location, `<config dir>/nextgen/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nextgen").join("config.json"))
    }

    /// Load and validate a JSON configuration file
    ///
    /// Keys missing from the file take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, or the default location if it exists, or defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.preview_limit == 0 {
            return Err(SiteError::configuration("preview_limit must be at least 1"));
        }
        if self.image_width == 0 {
            return Err(SiteError::configuration("image_width must be at least 1"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(SiteError::configuration("fetch.timeout_secs must be at least 1"));
        }
        if self.fetch.max_retries > MAX_FETCH_RETRIES {
            return Err(SiteError::configuration(format!(
                "fetch.max_retries must be at most {}",
                MAX_FETCH_RETRIES
            )));
        }

        let sources = [
            ("community", &self.sources.community),
            ("news", &self.sources.news),
            ("applications", &self.sources.applications),
        ];
        if let Some((name, _)) = sources.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SiteError::configuration(format!(
                "sources.{} must not be empty",
                name
            )));
        }

        Ok(())
    }

    pub fn with_community_source(mut self, source: impl Into<String>) -> Self {
        self.sources.community = source.into();
        self
    }

    pub fn with_news_source(mut self, source: impl Into<String>) -> Self {
        self.sources.news = source.into();
        self
    }

    pub fn with_applications_source(mut self, source: impl Into<String>) -> Self {
        self.sources.applications = source.into();
        self
    }

    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    pub fn with_fallback_image(mut self, image: impl Into<String>) -> Self {
        self.fallback_image = image.into();
        self
    }

    /// Disable the cache-busting query parameter
    pub fn without_cache_bust(mut self) -> Self {
        self.fetch.cache_bust = false;
        self
    }

    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preview_limit, 3);
        assert_eq!(config.image_width, 1200);
        assert!(config.fetch.cache_bust);
        assert!(config.sources.news.ends_with("output=csv"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(SiteConfig::default().with_preview_limit(0).validate().is_err());
        assert!(
            SiteConfig::default()
                .with_news_source("  ")
                .validate()
                .is_err()
        );

        let mut config = SiteConfig::default();
        config.fetch.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(SiteError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validation_bounds_retries() {
        let mut config = SiteConfig::default();
        config.fetch.max_retries = MAX_FETCH_RETRIES;
        assert!(config.validate().is_ok());

        config.fetch.max_retries = 70;
        assert!(matches!(
            config.validate(),
            Err(SiteError::Configuration { .. })
        ));
    }

    #[test]
    fn test_backoff_delay_doubles_and_caps() {
        let fetch = FetchConfig::default();
        assert_eq!(fetch.backoff_delay(1), Duration::from_millis(500));
        assert_eq!(fetch.backoff_delay(2), Duration::from_millis(1000));
        assert_eq!(fetch.backoff_delay(3), Duration::from_millis(2000));
        assert_eq!(fetch.backoff_delay(20), Duration::from_millis(MAX_BACKOFF_MS));

        // Exponents past u64 range saturate instead of overflowing
        assert_eq!(fetch.backoff_delay(70), Duration::from_millis(MAX_BACKOFF_MS));
        let huge = FetchConfig {
            initial_backoff_ms: u64::MAX,
            ..FetchConfig::default()
        };
        assert_eq!(huge.backoff_delay(2), Duration::from_millis(MAX_BACKOFF_MS));

        let zero = FetchConfig {
            initial_backoff_ms: 0,
            ..FetchConfig::default()
        };
        assert_eq!(zero.backoff_delay(70), Duration::ZERO);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"preview_limit": 6, "sources": {{"news": "data/news.csv"}}, "fetch": {{"max_retries": 0}}}}"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.preview_limit, 6);
        assert_eq!(config.sources.news, "data/news.csv");
        assert_eq!(config.sources.community, COMMUNITY_SHEET_URL);
        assert_eq!(config.fetch.max_retries, 0);
        assert_eq!(config.fetch.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"preview_limit": 0}}"#).unwrap();
        assert!(SiteConfig::load(file.path()).is_err());

        let mut garbage = NamedTempFile::new().unwrap();
        writeln!(garbage, "not json").unwrap();
        assert!(matches!(
            SiteConfig::load(garbage.path()),
            Err(SiteError::Json(_))
        ));
    }

    #[test]
    fn test_resolve_explicit_missing_path_errors() {
        let missing = Path::new("/nonexistent/nextgen/config.json");
        assert!(matches!(
            SiteConfig::resolve(Some(missing)),
            Err(SiteError::Io(_))
        ));
    }
}
