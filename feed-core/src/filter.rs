//! Client-side filtering of an already fetched feed

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Article;

/// Recency windows offered to readers, in hours (today, last 3 days, this week)
pub const RECENCY_PRESETS: [u32; 3] = [24, 72, 168];

/// Source and recency filter over an in-memory article list
///
/// Filters are always evaluated against the full list, so the order in which
/// the reader touched them does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFilter {
    /// Sources to keep; empty means every source
    #[serde(default)]
    pub sources: BTreeSet<String>,
    /// Keep only articles published within this many hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_hours: Option<u32>,
}

impl ArticleFilter {
    pub fn is_active(&self) -> bool {
        !self.sources.is_empty() || self.within_hours.is_some()
    }

    /// Whether a single article passes every active predicate
    pub fn matches(&self, article: &Article, now: DateTime<Utc>) -> bool {
        if !self.sources.is_empty() && !self.sources.contains(&article.source) {
            return false;
        }

        match self.within_hours {
            Some(hours) => {
                let cutoff = now - Duration::hours(i64::from(hours));
                article
                    .published_at()
                    .map(|published| published > cutoff)
                    .unwrap_or(false)
            }
            None => true,
        }
    }

    /// Subsequence of `articles` matching the filter, order preserved
    pub fn apply(&self, articles: &[Article], now: DateTime<Utc>) -> Vec<Article> {
        articles
            .iter()
            .filter(|article| self.matches(article, now))
            .cloned()
            .collect()
    }
}

/// Distinct source names in a feed, sorted
pub fn distinct_sources(articles: &[Article]) -> BTreeSet<String> {
    articles.iter().map(|a| a.source.clone()).collect()
}
