//! Aggregation services for the news feed
//!
//! This crate provides the service layer that fans out to every news
//! provider, merges their normalized articles into one feed and keeps the
//! reader's feed state.

pub mod aggregator;
pub mod feed_session;
pub mod shuffle;

pub use aggregator::{merge_outcomes, AggregatorConfig, NewsAggregator, ProviderOutcome};
pub use feed_session::{FeedSession, LoadOutcome};
pub use shuffle::shuffle;
