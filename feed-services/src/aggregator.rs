//! News Aggregator
//!
//! Fans a query out to every configured provider at once, isolates each
//! provider's failure, normalizes what came back and merges it into one
//! shuffled feed.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use feed_core::{Article, ProviderKind, QueryIntent};
use feed_news::config::DEFAULT_PROVIDER_TIMEOUT_SECS;
use feed_news::{FeedConfig, GuardianClient, NewsApiClient, NewsError, NewsProvider, NyTimesClient};

use crate::shuffle::shuffle;

/// Configuration for NewsAggregator
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Upper bound on a single provider call; slower providers contribute nothing
    pub provider_timeout: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl From<&FeedConfig> for AggregatorConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            provider_timeout: config.provider_timeout,
        }
    }
}

/// Result of asking one provider for articles
#[derive(Debug)]
pub enum ProviderOutcome {
    Fetched {
        provider: ProviderKind,
        articles: Vec<Article>,
    },
    Failed {
        provider: ProviderKind,
        error: NewsError,
    },
}

impl ProviderOutcome {
    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderOutcome::Fetched { provider, .. } | ProviderOutcome::Failed { provider, .. } => {
                *provider
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderOutcome::Fetched { .. })
    }

    /// Articles contributed by this provider; none if it failed
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            ProviderOutcome::Fetched { articles, .. } => articles,
            ProviderOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Concatenate provider results in the order given
pub fn merge_outcomes(outcomes: Vec<ProviderOutcome>) -> Vec<Article> {
    outcomes
        .into_iter()
        .flat_map(ProviderOutcome::into_articles)
        .collect()
}

fn shuffled(mut articles: Vec<Article>) -> Vec<Article> {
    shuffle(&mut articles, &mut rand::rng());
    articles
}

/// Orchestrates every provider for a query
pub struct NewsAggregator {
    providers: Vec<Arc<dyn NewsProvider>>,
    config: AggregatorConfig,
}

impl NewsAggregator {
    /// Create an aggregator over NewsAPI, The Guardian and The New York Times
    pub fn new(feed_config: &FeedConfig) -> Self {
        let providers: Vec<Arc<dyn NewsProvider>> = vec![
            Arc::new(NewsApiClient::from_config(feed_config)),
            Arc::new(GuardianClient::from_config(feed_config)),
            Arc::new(NyTimesClient::from_config(feed_config)),
        ];
        Self::with_providers(providers, AggregatorConfig::from(feed_config))
    }

    /// Create an aggregator over an explicit provider list
    ///
    /// Providers are queried and merged in the given order. A provider kind may
    /// only appear once; later duplicates are dropped.
    pub fn with_providers(providers: Vec<Arc<dyn NewsProvider>>, config: AggregatorConfig) -> Self {
        let mut seen = HashSet::new();
        let providers = providers
            .into_iter()
            .filter(|provider| {
                let kind = provider.kind();
                if seen.insert(kind) {
                    true
                } else {
                    warn!("Ignoring duplicate provider {}", kind);
                    false
                }
            })
            .collect();

        info!(
            "Initializing NewsAggregator (provider timeout {:?})",
            config.provider_timeout
        );
        Self { providers, config }
    }

    /// Provider kinds in aggregation order
    pub fn providers(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Fetch the feed for an optional query
    ///
    /// Never fails: providers that error or time out are logged and simply
    /// contribute no articles. If every provider fails the feed is empty.
    pub async fn fetch_news(&self, query: Option<&str>) -> Vec<Article> {
        let intent = QueryIntent::from_query(query);
        self.fetch_intent(&intent).await
    }

    /// Fetch, merge and shuffle the feed for an intent
    #[instrument(skip(self))]
    pub async fn fetch_intent(&self, intent: &QueryIntent) -> Vec<Article> {
        let outcomes = self.collect(intent).await;
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();

        let articles = shuffled(merge_outcomes(outcomes));

        info!(
            "Aggregated {} articles from {}/{} providers",
            articles.len(),
            succeeded,
            self.providers.len()
        );
        articles
    }

    /// Query every provider concurrently, one outcome per provider in order
    pub async fn collect(&self, intent: &QueryIntent) -> Vec<ProviderOutcome> {
        let calls = self
            .providers
            .iter()
            .map(|provider| self.call_provider(provider.as_ref(), intent));
        join_all(calls).await
    }

    async fn call_provider(&self, provider: &dyn NewsProvider, intent: &QueryIntent) -> ProviderOutcome {
        let kind = provider.kind();
        let timeout = self.config.provider_timeout;

        let result = match tokio::time::timeout(timeout, provider.fetch_articles(intent)).await {
            Ok(result) => result,
            Err(_) => Err(NewsError::Timeout {
                provider: kind,
                after: timeout,
            }),
        };

        match result {
            Ok(articles) => {
                debug!("Got {} articles from {}", articles.len(), kind);
                ProviderOutcome::Fetched {
                    provider: kind,
                    articles,
                }
            }
            Err(error) => {
                warn!("Failed to fetch news from {}: {}", kind, error);
                ProviderOutcome::Failed {
                    provider: kind,
                    error,
                }
            }
        }
    }
}
