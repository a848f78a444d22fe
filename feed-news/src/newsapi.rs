//! NewsAPI client
//!
//! Top headlines for the front page, the `everything` index for searches.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use feed_core::{Article, ProviderKind, QueryIntent};

use crate::config::{FeedConfig, DEFAULT_LANGUAGE};
use crate::error::NewsError;
use crate::http::{endpoint_url, get_json};
use crate::provider::{non_blank, NewsProvider};
use crate::types::{well_formed, NewsApiArticle, NewsApiResponse};

/// Base URL for NewsAPI
const NEWS_API_BASE: &str = "https://newsapi.org/v2";

/// Articles requested per call
pub const NEWS_API_PAGE_SIZE: u32 = 10;

/// NewsAPI endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsApiEndpoint {
    Everything,
    TopHeadlines,
}

impl NewsApiEndpoint {
    pub fn for_intent(intent: &QueryIntent) -> Self {
        if intent.is_search() {
            NewsApiEndpoint::Everything
        } else {
            NewsApiEndpoint::TopHeadlines
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NewsApiEndpoint::Everything => "everything",
            NewsApiEndpoint::TopHeadlines => "top-headlines",
        }
    }
}

/// NewsAPI client
#[derive(Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    language: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    pub fn new(api_key: String, language: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            language,
            base_url: NEWS_API_BASE.to_string(),
        }
    }

    /// Create a client from the shared feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.keys.news_api.clone(), config.language.clone())
    }

    /// Point the client at another host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for an intent
    pub fn request_url(&self, intent: &QueryIntent) -> Result<Url, NewsError> {
        let page_size = NEWS_API_PAGE_SIZE.to_string();
        let language = if self.language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            self.language.as_str()
        };

        let mut params = vec![
            ("apiKey", self.api_key.as_str()),
            ("language", language),
            ("pageSize", page_size.as_str()),
        ];
        if let Some(term) = intent.term() {
            params.push(("q", term));
        }

        endpoint_url(
            &self.base_url,
            NewsApiEndpoint::for_intent(intent).path(),
            &params,
        )
    }

    /// Fetch the raw NewsAPI payload
    #[instrument(skip(self))]
    pub async fn fetch(&self, intent: &QueryIntent) -> Result<NewsApiResponse, NewsError> {
        let url = self.request_url(intent)?;
        get_json(&self.client, url).await
    }
}

impl NewsApiResponse {
    /// Normalize every well-formed article in the envelope
    pub fn into_articles(self) -> Vec<Article> {
        well_formed(self.articles, "NewsAPI")
            .into_iter()
            .map(normalize_article)
            .collect()
    }
}

/// Map a NewsAPI article to the common shape
pub fn normalize_article(raw: NewsApiArticle) -> Article {
    Article {
        source: raw.source.name,
        author: non_blank(raw.author.as_deref()),
        title: raw.title,
        description: raw.description,
        url: raw.url,
        url_to_image: non_blank(raw.url_to_image.as_deref()),
        published_at: raw.published_at,
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::NewsApi
    }

    async fn fetch_articles(&self, intent: &QueryIntent) -> Result<Vec<Article>, NewsError> {
        let articles = self.fetch(intent).await?.into_articles();
        info!("Received {} articles from NewsAPI", articles.len());
        Ok(articles)
    }
}
