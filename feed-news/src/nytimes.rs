//! New York Times client
//!
//! Most-viewed articles of the last seven days for the front page, article
//! search for queries. The two endpoints answer with different schemas, so
//! each has its own normalizer.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use feed_core::{Article, ProviderKind, QueryIntent};

use crate::config::FeedConfig;
use crate::error::NewsError;
use crate::http::{endpoint_url, get_json};
use crate::provider::{non_blank, NewsProvider};
use crate::types::{
    well_formed, NyTimesPopularArticle, NyTimesPopularResponse, NyTimesSearchArticle,
    NyTimesSearchResponse,
};

/// Base URL for the NYT APIs
const NY_TIMES_API_BASE: &str = "https://api.nytimes.com/svc";

/// Site root that article search multimedia paths are relative to
pub const NY_TIMES_SITE: &str = "https://www.nytimes.com/";

/// Image rendition used for cards from the most popular endpoint
const POPULAR_IMAGE_FORMAT: &str = "mediumThreeByTwo440";

/// NYT endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NyTimesEndpoint {
    /// Most viewed over the trailing 7 days
    MostPopular,
    Search,
}

impl NyTimesEndpoint {
    pub fn for_intent(intent: &QueryIntent) -> Self {
        if intent.is_search() {
            NyTimesEndpoint::Search
        } else {
            NyTimesEndpoint::MostPopular
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NyTimesEndpoint::MostPopular => "mostpopular/v2/viewed/7.json",
            NyTimesEndpoint::Search => "search/v2/articlesearch.json",
        }
    }
}

/// Raw payload from whichever endpoint the intent selected
#[derive(Debug)]
pub enum NyTimesResponse {
    Popular(NyTimesPopularResponse),
    Search(NyTimesSearchResponse),
}

impl NyTimesResponse {
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            NyTimesResponse::Popular(popular) => popular.into_articles(),
            NyTimesResponse::Search(search) => search.into_articles(),
        }
    }
}

/// New York Times client
#[derive(Clone)]
pub struct NyTimesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NyTimesClient {
    /// Create a new NYT client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: NY_TIMES_API_BASE.to_string(),
        }
    }

    /// Create a client from the shared feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.keys.ny_times.clone())
    }

    /// Point the client at another host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for an intent
    pub fn request_url(&self, intent: &QueryIntent) -> Result<Url, NewsError> {
        let mut params = vec![("api-key", self.api_key.as_str())];
        if let Some(term) = intent.term() {
            params.push(("q", term));
        }

        endpoint_url(
            &self.base_url,
            NyTimesEndpoint::for_intent(intent).path(),
            &params,
        )
    }

    /// Fetch the raw payload of the endpoint matching `intent`
    #[instrument(skip(self))]
    pub async fn fetch(&self, intent: &QueryIntent) -> Result<NyTimesResponse, NewsError> {
        let url = self.request_url(intent)?;
        match NyTimesEndpoint::for_intent(intent) {
            NyTimesEndpoint::MostPopular => {
                get_json(&self.client, url).await.map(NyTimesResponse::Popular)
            }
            NyTimesEndpoint::Search => {
                get_json(&self.client, url).await.map(NyTimesResponse::Search)
            }
        }
    }
}

impl NyTimesPopularResponse {
    pub fn into_articles(self) -> Vec<Article> {
        well_formed(self.results, "NYT popular")
            .into_iter()
            .map(normalize_popular_article)
            .collect()
    }
}

impl NyTimesSearchResponse {
    pub fn into_articles(self) -> Vec<Article> {
        well_formed(self.response.docs, "NYT search")
            .into_iter()
            .map(normalize_search_article)
            .collect()
    }
}

/// Map a most-popular article to the common shape
pub fn normalize_popular_article(raw: NyTimesPopularArticle) -> Article {
    let url_to_image = raw
        .media
        .first()
        .and_then(|media| {
            media
                .media_metadata
                .iter()
                .find(|meta| meta.format == POPULAR_IMAGE_FORMAT)
        })
        .and_then(|meta| non_blank(Some(meta.url.as_str())));

    Article {
        source: raw.source,
        author: non_blank(raw.byline.as_deref()),
        title: raw.title,
        description: raw.summary,
        url: raw.url,
        url_to_image,
        published_at: raw.published_date,
    }
}

/// Map an article search document to the common shape
pub fn normalize_search_article(raw: NyTimesSearchArticle) -> Article {
    let url_to_image = raw
        .multimedia
        .first()
        .and_then(|media| resolve_site_path(&media.url));

    Article {
        source: raw.source,
        author: non_blank(raw.byline.as_ref().and_then(|b| b.original.as_deref())),
        title: raw.headline.main,
        description: raw.summary,
        url: raw.web_url,
        url_to_image,
        published_at: raw.pub_date,
    }
}

/// Resolve a multimedia path against the NYT site root
fn resolve_site_path(path: &str) -> Option<String> {
    if path.trim().is_empty() {
        return None;
    }
    Url::parse(NY_TIMES_SITE)
        .and_then(|site| site.join(path))
        .ok()
        .map(String::from)
}

#[async_trait]
impl NewsProvider for NyTimesClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::NyTimes
    }

    async fn fetch_articles(&self, intent: &QueryIntent) -> Result<Vec<Article>, NewsError> {
        let articles = self.fetch(intent).await?.into_articles();
        info!("Received {} articles from The New York Times", articles.len());
        Ok(articles)
    }
}
