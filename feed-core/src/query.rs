//! Query intent for a feed request

/// Whether the caller wants the front page or a keyword search
///
/// Providers with two endpoints pick one based on this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum QueryIntent {
    /// No query: trending / top headlines / most popular
    #[default]
    FrontPage,
    /// Full-text search for a non-empty term
    Search(String),
}

impl QueryIntent {
    /// Build an intent from an optional raw query; blank queries mean front page
    pub fn from_query(query: Option<&str>) -> Self {
        match query.map(str::trim) {
            Some(q) if !q.is_empty() => QueryIntent::Search(q.to_string()),
            _ => QueryIntent::FrontPage,
        }
    }

    /// The search term, if any
    pub fn term(&self) -> Option<&str> {
        match self {
            QueryIntent::FrontPage => None,
            QueryIntent::Search(q) => Some(q),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, QueryIntent::Search(_))
    }
}
