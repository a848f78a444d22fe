//! End-to-end aggregation against mocked NewsAPI, Guardian and NYT servers
//!
//! Run with: cargo test -p feed-services --test aggregate_providers

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use feed_core::{Article, ProviderKind, QueryIntent};
use feed_news::types::{GuardianResponse, NewsApiResponse, NyTimesPopularResponse};
use feed_news::{GuardianClient, NewsApiClient, NewsError, NewsProvider, NyTimesClient};
use feed_services::{AggregatorConfig, NewsAggregator, ProviderOutcome};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn news_api_body() -> Value {
    json!({
        "status": "ok",
        "articles": [
            {
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": "Jane Doe",
                "title": "Markets rally",
                "description": "Stocks rose on Tuesday.",
                "url": "https://www.bbc.co.uk/news/1",
                "urlToImage": "https://ichef.bbci.co.uk/1.jpg",
                "publishedAt": "2024-01-02T08:00:00Z"
            },
            {
                "source": {"id": null, "name": "Reuters"},
                "author": null,
                "title": "Rain expected",
                "description": "Forecast for the weekend.",
                "url": "https://www.reuters.com/2",
                "urlToImage": null,
                "publishedAt": "2024-01-02T09:00:00Z"
            }
        ]
    })
}

fn guardian_body() -> Value {
    json!({
        "response": {
            "status": "ok",
            "results": [
                {
                    "webTitle": "X",
                    "webUrl": "https://www.theguardian.com/x",
                    "webPublicationDate": "2024-01-01T00:00:00Z",
                    "tags": [],
                    "elements": [],
                    "fields": {"trailText": "Trail"}
                }
            ]
        }
    })
}

fn ny_times_popular_body() -> Value {
    json!({
        "status": "OK",
        "results": [
            {
                "url": "https://www.nytimes.com/2024/01/02/us/story.html",
                "byline": "By Sam Lee",
                "title": "Storm hits coast",
                "abstract": "Thousands without power.",
                "published_date": "2024-01-02",
                "source": "New York Times",
                "media": []
            }
        ]
    })
}

fn ny_times_search_body() -> Value {
    json!({
        "response": {
            "docs": [
                {
                    "web_url": "https://www.nytimes.com/2024/01/03/tech/ai.html",
                    "byline": {"original": "By Kim Park"},
                    "headline": {"main": "AI rules drafted"},
                    "abstract": "Regulators publish a draft.",
                    "pub_date": "2024-01-03T12:00:00+0000",
                    "source": "The New York Times",
                    "multimedia": []
                }
            ]
        }
    })
}

/// The normalized records the front page should produce
fn expected_front_page() -> HashSet<Article> {
    let news_api: NewsApiResponse = serde_json::from_value(news_api_body()).unwrap();
    let guardian: GuardianResponse = serde_json::from_value(guardian_body()).unwrap();
    let ny_times: NyTimesPopularResponse = serde_json::from_value(ny_times_popular_body()).unwrap();

    news_api
        .into_articles()
        .into_iter()
        .chain(guardian.into_articles())
        .chain(ny_times.into_articles())
        .collect()
}

struct Upstreams {
    news_api: MockServer,
    guardian: MockServer,
    ny_times: MockServer,
}

impl Upstreams {
    async fn start() -> Self {
        Self {
            news_api: MockServer::start().await,
            guardian: MockServer::start().await,
            ny_times: MockServer::start().await,
        }
    }

    fn aggregator(&self, config: AggregatorConfig) -> NewsAggregator {
        let providers: Vec<Arc<dyn NewsProvider>> = vec![
            Arc::new(
                NewsApiClient::new("news-key".into(), "en".into()).with_base_url(self.news_api.uri()),
            ),
            Arc::new(GuardianClient::new("guardian-key".into()).with_base_url(self.guardian.uri())),
            Arc::new(NyTimesClient::new("nyt-key".into()).with_base_url(self.ny_times.uri())),
        ];
        NewsAggregator::with_providers(providers, config)
    }

    async fn serve_front_page(&self) {
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .respond_with(ResponseTemplate::new(200).set_body_json(news_api_body()))
            .mount(&self.news_api)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(guardian_body()))
            .mount(&self.guardian)
            .await;
        Mock::given(method("GET"))
            .and(path("/mostpopular/v2/viewed/7.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ny_times_popular_body()))
            .mount(&self.ny_times)
            .await;
    }
}

async fn fail_with(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_front_page_merges_all_providers() {
    let upstreams = Upstreams::start().await;
    upstreams.serve_front_page().await;

    let feed = upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(None)
        .await;

    assert_eq!(feed.len(), 2 + 1 + 1);
    let got: HashSet<Article> = feed.into_iter().collect();
    assert_eq!(got, expected_front_page());
}

#[tokio::test]
async fn test_guardian_record_without_thumbnail() {
    let upstreams = Upstreams::start().await;
    upstreams.serve_front_page().await;

    let feed = upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(None)
        .await;

    let guardian = feed.iter().find(|a| a.title == "X").unwrap();
    assert_eq!(guardian.source, "The Guardian");
    assert_eq!(guardian.published_at, "2024-01-01T00:00:00Z");
    assert_eq!(guardian.url_to_image, None);
    assert_eq!(guardian.author, None);
}

#[tokio::test]
async fn test_failing_provider_contributes_nothing() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_api_body()))
        .mount(&upstreams.news_api)
        .await;
    fail_with(&upstreams.guardian, 500).await;
    Mock::given(method("GET"))
        .and(path("/mostpopular/v2/viewed/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ny_times_popular_body()))
        .mount(&upstreams.ny_times)
        .await;

    let feed = upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(None)
        .await;

    let expected: HashSet<Article> = expected_front_page()
        .into_iter()
        .filter(|a| a.source != "The Guardian")
        .collect();
    assert_eq!(feed.len(), 3);
    assert_eq!(feed.into_iter().collect::<HashSet<_>>(), expected);
}

#[tokio::test]
async fn test_all_providers_failing_is_empty() {
    let upstreams = Upstreams::start().await;
    fail_with(&upstreams.news_api, 401).await;
    fail_with(&upstreams.guardian, 403).await;
    fail_with(&upstreams.ny_times, 500).await;

    let feed = upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(Some("election"))
        .await;

    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_search_routes_to_search_endpoints() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_api_body()))
        .mount(&upstreams.news_api)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guardian_body()))
        .mount(&upstreams.guardian)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/v2/articlesearch.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ny_times_search_body()))
        .mount(&upstreams.ny_times)
        .await;

    let feed = upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(Some("ai"))
        .await;
    assert_eq!(feed.len(), 4);
    assert!(feed.iter().any(|a| a.title == "AI rules drafted"));

    let news_api_requests = upstreams.news_api.received_requests().await.unwrap();
    assert_eq!(news_api_requests.len(), 1);
    assert_eq!(news_api_requests[0].url.path(), "/everything");

    let ny_times_requests = upstreams.ny_times.received_requests().await.unwrap();
    assert_eq!(ny_times_requests.len(), 1);
    assert_eq!(ny_times_requests[0].url.path(), "/search/v2/articlesearch.json");
    assert!(ny_times_requests[0]
        .url
        .query_pairs()
        .any(|(k, v)| k == "q" && v == "ai"));
}

#[tokio::test]
async fn test_front_page_never_hits_search_endpoints() {
    let upstreams = Upstreams::start().await;
    upstreams.serve_front_page().await;

    upstreams
        .aggregator(AggregatorConfig::default())
        .fetch_news(Some("   "))
        .await;

    let news_api_requests = upstreams.news_api.received_requests().await.unwrap();
    assert_eq!(news_api_requests[0].url.path(), "/top-headlines");
    let ny_times_requests = upstreams.ny_times.received_requests().await.unwrap();
    assert_eq!(ny_times_requests[0].url.path(), "/mostpopular/v2/viewed/7.json");
}

#[tokio::test]
async fn test_hanging_provider_is_cut_off() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(news_api_body()))
        .mount(&upstreams.news_api)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(guardian_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&upstreams.guardian)
        .await;
    fail_with(&upstreams.ny_times, 503).await;

    let feed = upstreams
        .aggregator(AggregatorConfig {
            provider_timeout: Duration::from_millis(300),
        })
        .fetch_news(None)
        .await;

    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|a| a.source != "The Guardian"));
}

#[tokio::test]
async fn test_hanging_provider_reports_timeout() {
    let upstreams = Upstreams::start().await;
    upstreams.serve_front_page().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ny_times_popular_body())
                .set_delay(Duration::from_secs(3)),
        )
        .with_priority(1)
        .mount(&upstreams.ny_times)
        .await;

    let outcomes = upstreams
        .aggregator(AggregatorConfig {
            provider_timeout: Duration::from_millis(300),
        })
        .collect(&QueryIntent::FrontPage)
        .await;

    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_success());
    match &outcomes[2] {
        ProviderOutcome::Failed {
            provider: ProviderKind::NyTimes,
            error: NewsError::Timeout { after, .. },
        } => assert_eq!(*after, Duration::from_millis(300)),
        other => panic!("expected NYT timeout, got {:?}", other),
    }
}
