//! The Guardian Open Platform client
//!
//! A single content search endpoint serves both the front page (no `q`) and
//! keyword searches.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use feed_core::{Article, ProviderKind, QueryIntent};

use crate::config::FeedConfig;
use crate::error::NewsError;
use crate::http::{endpoint_url, get_json};
use crate::provider::{non_blank, NewsProvider};
use crate::types::{well_formed, GuardianArticle, GuardianResponse};

/// Base URL for the Guardian content API
const GUARDIAN_API_BASE: &str = "https://content.guardianapis.com";

const SEARCH_ENDPOINT: &str = "search";

/// Source label for every Guardian article
pub const GUARDIAN_SOURCE: &str = "The Guardian";

/// Element relation holding the card image
const THUMBNAIL_RELATION: &str = "thumbnail";

/// The Guardian client
#[derive(Clone)]
pub struct GuardianClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GuardianClient {
    /// Create a new Guardian client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GUARDIAN_API_BASE.to_string(),
        }
    }

    /// Create a client from the shared feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.keys.guardian.clone())
    }

    /// Point the client at another host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for an intent
    pub fn request_url(&self, intent: &QueryIntent) -> Result<Url, NewsError> {
        let mut params = vec![
            ("api-key", self.api_key.as_str()),
            ("show-elements", "image"),
            ("show-tags", "contributor"),
            ("show-fields", "trailText"),
        ];
        if let Some(term) = intent.term() {
            params.push(("q", term));
        }

        endpoint_url(&self.base_url, SEARCH_ENDPOINT, &params)
    }

    /// Fetch the raw Guardian payload
    #[instrument(skip(self))]
    pub async fn fetch(&self, intent: &QueryIntent) -> Result<GuardianResponse, NewsError> {
        let url = self.request_url(intent)?;
        get_json(&self.client, url).await
    }
}

impl GuardianResponse {
    /// Normalize every well-formed result in `response.results`
    pub fn into_articles(self) -> Vec<Article> {
        well_formed(self.response.results, "Guardian")
            .into_iter()
            .map(normalize_article)
            .collect()
    }
}

/// Map a Guardian content item to the common shape
pub fn normalize_article(raw: GuardianArticle) -> Article {
    let author = non_blank(raw.tags.first().map(|tag| tag.web_title.as_str()));

    let url_to_image = raw
        .elements
        .iter()
        .find(|element| element.relation == THUMBNAIL_RELATION)
        .and_then(|element| element.assets.first())
        .and_then(|asset| non_blank(Some(asset.file.as_str())));

    Article {
        source: GUARDIAN_SOURCE.to_string(),
        author,
        title: raw.web_title,
        description: raw.fields.trail_text,
        url: raw.web_url,
        url_to_image,
        published_at: raw.web_publication_date,
    }
}

#[async_trait]
impl NewsProvider for GuardianClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Guardian
    }

    async fn fetch_articles(&self, intent: &QueryIntent) -> Result<Vec<Article>, NewsError> {
        let articles = self.fetch(intent).await?.into_articles();
        info!("Received {} articles from The Guardian", articles.len());
        Ok(articles)
    }
}
