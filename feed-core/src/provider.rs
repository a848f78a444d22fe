//! Provider definitions for upstream news sources

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported upstream news providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// NewsAPI - headlines and full-text search across outlets
    NewsApi,
    /// The Guardian Open Platform - single content search endpoint
    Guardian,
    /// The New York Times - most popular and article search
    NyTimes,
}

impl ProviderKind {
    /// Every provider, in aggregation order
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::NewsApi,
        ProviderKind::Guardian,
        ProviderKind::NyTimes,
    ];

    /// Get the full display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::NewsApi => "NewsAPI",
            ProviderKind::Guardian => "The Guardian",
            ProviderKind::NyTimes => "The New York Times",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newsapi" | "news-api" => Ok(ProviderKind::NewsApi),
            "guardian" | "theguardian" => Ok(ProviderKind::Guardian),
            "nytimes" | "nyt" => Ok(ProviderKind::NyTimes),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}
