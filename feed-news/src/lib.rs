//! News provider clients for the aggregated feed
//!
//! This crate provides clients for fetching news from:
//! - NewsAPI: top headlines and the `everything` search index
//! - The Guardian: content search
//! - The New York Times: most popular and article search
//!
//! Each client turns a [`feed_core::QueryIntent`] into one HTTP call and
//! normalizes the provider payload into [`feed_core::Article`]s.

pub mod config;
pub mod error;
pub mod guardian;
mod http;
pub mod newsapi;
pub mod nytimes;
pub mod provider;
pub mod types;

pub use config::{FeedConfig, ProviderKeys};
pub use error::NewsError;
pub use guardian::GuardianClient;
pub use newsapi::NewsApiClient;
pub use nytimes::{NyTimesClient, NyTimesResponse};
pub use provider::NewsProvider;
