//! Feed Session
//!
//! Holds the reader's current feed, the sources seen so far and the active
//! filter. Loads may overlap; only the most recently issued one is applied.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use feed_core::{distinct_sources, Article, ArticleFilter, QueryIntent};

use crate::aggregator::NewsAggregator;

/// What happened to the result of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The feed was replaced with `count` articles
    Applied { ticket: u64, count: usize },
    /// A newer load was issued while this one was in flight; result discarded
    Stale { ticket: u64, latest: u64 },
}

#[derive(Debug, Default)]
struct FeedState {
    intent: QueryIntent,
    articles: Vec<Article>,
    sources: BTreeSet<String>,
    filter: ArticleFilter,
    applied_ticket: u64,
}

/// Reader-facing feed state on top of a [`NewsAggregator`]
pub struct FeedSession {
    aggregator: NewsAggregator,
    latest_ticket: AtomicU64,
    state: RwLock<FeedState>,
}

impl FeedSession {
    pub fn new(aggregator: NewsAggregator) -> Self {
        Self {
            aggregator,
            latest_ticket: AtomicU64::new(0),
            state: RwLock::new(FeedState::default()),
        }
    }

    /// Load the front page (`None`) or a search, replacing the current feed
    ///
    /// Applying a load clears the active filter. Results of a load that has
    /// been overtaken by a newer one are dropped.
    pub async fn load(&self, query: Option<&str>) -> LoadOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let intent = QueryIntent::from_query(query);

        let articles = self.aggregator.fetch_intent(&intent).await;

        let mut state = self.state.write().await;
        let latest = self.latest_ticket.load(Ordering::SeqCst);
        if ticket != latest || ticket < state.applied_ticket {
            debug!(
                "Discarding stale feed load {} (latest {}) for {:?}",
                ticket, latest, intent
            );
            return LoadOutcome::Stale { ticket, latest };
        }

        let count = articles.len();
        state.sources.extend(distinct_sources(&articles));
        state.articles = articles;
        state.intent = intent;
        state.filter = ArticleFilter::default();
        state.applied_ticket = ticket;

        info!("Feed load {} applied with {} articles", ticket, count);
        LoadOutcome::Applied { ticket, count }
    }

    /// Replace the active filter
    pub async fn set_filter(&self, filter: ArticleFilter) {
        self.state.write().await.filter = filter;
    }

    pub async fn filter(&self) -> ArticleFilter {
        self.state.read().await.filter.clone()
    }

    /// Articles passing the active filter, evaluated against the full feed
    pub async fn visible(&self) -> Vec<Article> {
        self.visible_at(Utc::now()).await
    }

    pub async fn visible_at(&self, now: DateTime<Utc>) -> Vec<Article> {
        let state = self.state.read().await;
        state.filter.apply(&state.articles, now)
    }

    /// The full, unfiltered feed
    pub async fn articles(&self) -> Vec<Article> {
        self.state.read().await.articles.clone()
    }

    /// Every source seen across loads, for the source picker
    pub async fn sources(&self) -> BTreeSet<String> {
        self.state.read().await.sources.clone()
    }

    /// Intent of the feed currently shown
    pub async fn intent(&self) -> QueryIntent {
        self.state.read().await.intent.clone()
    }
}
