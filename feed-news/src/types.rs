//! API-specific types for NewsAPI, The Guardian and The New York Times

use serde::Deserialize;
use tracing::debug;

/// One entry of a provider's article list
///
/// Entries that do not match the provider schema are kept as raw JSON so one
/// bad record does not sink the whole response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Record<T> {
    Parsed(T),
    Malformed(serde_json::Value),
}

/// Keep the well-formed records of a provider list
pub(crate) fn well_formed<T>(records: Vec<Record<T>>, provider: &str) -> Vec<T> {
    let total = records.len();
    let parsed: Vec<T> = records
        .into_iter()
        .filter_map(|record| match record {
            Record::Parsed(article) => Some(article),
            Record::Malformed(_) => None,
        })
        .collect();

    if parsed.len() < total {
        debug!(
            "Dropped {} malformed {} records out of {}",
            total - parsed.len(),
            provider,
            total
        );
    }
    parsed
}

// ============================================================================
// NewsAPI Types
// ============================================================================

/// NewsAPI response envelope (both endpoints)
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<Record<NewsApiArticle>>,
}

/// A single NewsAPI article
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub source: NewsApiSource,
    pub author: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

/// Outlet that published a NewsAPI article
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSource {
    pub id: Option<String>,
    pub name: String,
}

// ============================================================================
// Guardian Types
// ============================================================================

/// Guardian content search response
#[derive(Debug, Deserialize)]
pub struct GuardianResponse {
    pub response: GuardianResults,
}

#[derive(Debug, Deserialize)]
pub struct GuardianResults {
    #[serde(default)]
    pub results: Vec<Record<GuardianArticle>>,
}

/// A single Guardian content item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianArticle {
    pub id: Option<String>,
    pub section_name: Option<String>,
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: String,
    /// Contributor tags (requested with `show-tags=contributor`)
    #[serde(default)]
    pub tags: Vec<GuardianTag>,
    /// Image elements (requested with `show-elements=image`)
    #[serde(default)]
    pub elements: Vec<GuardianElement>,
    pub fields: GuardianFields,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianTag {
    pub web_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuardianElement {
    pub relation: String,
    #[serde(default)]
    pub assets: Vec<GuardianAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuardianAsset {
    pub file: String,
}

/// Extra fields (requested with `show-fields=trailText`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianFields {
    pub trail_text: String,
}

// ============================================================================
// New York Times Types
// ============================================================================

/// Most popular (viewed) response
#[derive(Debug, Deserialize)]
pub struct NyTimesPopularResponse {
    #[serde(default)]
    pub results: Vec<Record<NyTimesPopularArticle>>,
}

/// A single most-popular article
#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesPopularArticle {
    pub id: Option<u64>,
    pub url: String,
    pub byline: Option<String>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub published_date: String,
    pub source: String,
    #[serde(default)]
    pub media: Vec<NyTimesPopularMedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesPopularMedia {
    #[serde(rename = "media-metadata", default)]
    pub media_metadata: Vec<NyTimesMediaMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesMediaMetadata {
    pub url: String,
    pub format: String,
}

/// Article search response
#[derive(Debug, Deserialize)]
pub struct NyTimesSearchResponse {
    pub response: NyTimesSearchDocs,
}

#[derive(Debug, Deserialize)]
pub struct NyTimesSearchDocs {
    #[serde(default)]
    pub docs: Vec<Record<NyTimesSearchArticle>>,
}

/// A single article search document
#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesSearchArticle {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub web_url: String,
    #[serde(default)]
    pub byline: Option<NyTimesByline>,
    pub headline: NyTimesHeadline,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub pub_date: String,
    pub source: String,
    #[serde(default)]
    pub multimedia: Vec<NyTimesMultimedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesByline {
    pub original: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesHeadline {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NyTimesMultimedia {
    pub url: String,
}
