//! The seam between the aggregator and the individual news providers

use async_trait::async_trait;
use feed_core::{Article, ProviderKind, QueryIntent};

use crate::error::NewsError;

/// A news provider that can answer a query intent with normalized articles
///
/// Implementations make exactly one upstream call per invocation and never
/// retry.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Which upstream this is
    fn kind(&self) -> ProviderKind;

    /// Fetch the provider payload for `intent` and normalize every article in it
    async fn fetch_articles(&self, intent: &QueryIntent) -> Result<Vec<Article>, NewsError>;
}

/// Treat blank strings from a provider as missing values
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
