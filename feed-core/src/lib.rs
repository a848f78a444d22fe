//! Core types for the news feed aggregator
//!
//! This crate defines the shared data structures used across the feed,
//! including the normalized article, query intent, provider identities and
//! the client-side article filter.

pub mod article;
pub mod filter;
pub mod provider;
pub mod query;

pub use article::Article;
pub use filter::{distinct_sources, ArticleFilter, RECENCY_PRESETS};
pub use provider::ProviderKind;
pub use query::QueryIntent;
