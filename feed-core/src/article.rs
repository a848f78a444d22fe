//! The normalized article shared by every news provider

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A news article normalized from any provider
///
/// Optional fields are only set when the provider actually supplied a value.
/// `published_at` keeps the provider's native timestamp string; use
/// [`Article::published_at`] to parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Outlet or provider name (e.g., "The Guardian")
    pub source: String,
    /// Author or byline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Headline
    pub title: String,
    /// Abstract, trail text or summary
    pub description: String,
    /// Canonical link to the original article
    pub url: String,
    /// Thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    /// Publication timestamp as returned by the provider
    pub published_at: String,
}

impl Article {
    /// Parse the provider timestamp
    ///
    /// Accepts RFC 3339, `+0000`-style offsets and bare dates (midnight UTC).
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }

    /// Short date label, e.g. "Jan 1, 2024"
    pub fn display_date(&self) -> Option<String> {
        self.published_at()
            .map(|dt| dt.format("%b %-d, %Y").to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // NYT article search uses "2024-01-01T12:00:00+0000"
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
