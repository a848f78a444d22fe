//! Provider configuration
//!
//! API keys and request settings are read once from the environment and then
//! passed explicitly into each client.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::error::NewsError;

/// Language used when the locale gives nothing usable
pub const DEFAULT_LANGUAGE: &str = "en";

/// Per-provider timeout when none is configured
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 5;

/// API keys, one per provider
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub news_api: String,
    pub guardian: String,
    pub ny_times: String,
}

/// Configuration for the provider clients
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub keys: ProviderKeys,
    /// Two-letter language code sent to NewsAPI
    pub language: String,
    /// Upper bound on a single provider call
    pub provider_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            keys: ProviderKeys::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables
    ///
    /// Expects:
    /// - NEWS_API_KEY, GUARDIAN_API_KEY, NY_TIMES_API_KEY
    /// - FEED_LANGUAGE (optional, falls back to LC_ALL / LC_MESSAGES / LANG)
    /// - FEED_PROVIDER_TIMEOUT_SECS (optional)
    ///
    /// A missing key is not an error: the provider will answer 401 and the
    /// aggregator treats that like any other failed provider.
    pub fn from_env() -> Result<Self, NewsError> {
        let keys = ProviderKeys {
            news_api: read_key("NEWS_API_KEY"),
            guardian: read_key("GUARDIAN_API_KEY"),
            ny_times: read_key("NY_TIMES_API_KEY"),
        };

        let provider_timeout = match env::var("FEED_PROVIDER_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        Ok(Self {
            keys,
            language: detect_language(),
            provider_timeout,
        })
    }
}

fn read_key(name: &str) -> String {
    match env::var(name) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            warn!("{} is not set; requests to that provider will be rejected", name);
            String::new()
        }
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, NewsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(NewsError::InvalidConfig(format!(
            "FEED_PROVIDER_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))),
    }
}

/// Pick the request language from the process locale
fn detect_language() -> String {
    ["FEED_LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find_map(|value| language_from_locale(&value))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Two-letter language code from a locale string like "de_DE.UTF-8" or "fr-CA"
pub fn language_from_locale(locale: &str) -> Option<String> {
    let lang: String = locale
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if lang.len() < 2 {
        return None;
    }
    let lang = lang.to_ascii_lowercase();
    if lang == "posix" {
        return None;
    }
    Some(lang[..2].to_string())
}
