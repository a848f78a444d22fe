//! CLI argument definitions using clap derive macros.

use clap::Parser;

use feed_core::{ArticleFilter, RECENCY_PRESETS};

/// Read the aggregated news feed from NewsAPI, The Guardian and the NYT.
///
/// Without a query the front page of every provider is loaded; with one, each
/// provider is searched for it. Results from all providers are mixed together.
#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(author, version, about)]
pub struct Args {
    /// Search term (omit or leave blank for the front page)
    pub query: Option<String>,

    /// Only show articles from this source (repeatable)
    #[arg(short, long = "source", value_name = "NAME")]
    pub sources: Vec<String>,

    /// Only show articles published within the last 24, 72 or 168 hours
    #[arg(short = 'w', long, value_name = "HOURS", value_parser = parse_recency)]
    pub within_hours: Option<u32>,

    /// Print the feed as JSON instead of text cards
    #[arg(long)]
    pub json: bool,

    /// Per-provider timeout in seconds (1-60), overrides FEED_PROVIDER_TIMEOUT_SECS
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=60))]
    pub timeout_secs: Option<u64>,

    /// Print the distinct sources of the loaded feed and exit
    #[arg(long)]
    pub list_sources: bool,
}

impl Args {
    /// Filter selected on the command line
    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter {
            sources: self.sources.iter().cloned().collect(),
            within_hours: self.within_hours,
        }
    }
}

fn parse_recency(raw: &str) -> Result<u32, String> {
    let hours: u32 = raw
        .parse()
        .map_err(|_| format!("`{}` is not a number of hours", raw))?;
    if RECENCY_PRESETS.contains(&hours) {
        Ok(hours)
    } else {
        Err(format!("expected one of {:?}", RECENCY_PRESETS))
    }
}
