//! News Feed Reader
//!
//! Loads the aggregated feed from NewsAPI, The Guardian and the NYT and
//! prints it, optionally narrowed by source and recency.

mod cli;
mod render;

use std::time::Duration;

use clap::Parser;
use feed_news::FeedConfig;
use feed_services::{FeedSession, LoadOutcome, NewsAggregator};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Args;

fn load_env_file(name: &str) {
    if let Err(e) = dotenvy::from_filename(name) {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load {}: {}", name, e);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // .env.local wins over .env: dotenvy never overrides a variable already set
    load_env_file(".env.local");
    load_env_file(".env");

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,feed_cli=debug")),
        )
        .init();

    let mut config = FeedConfig::from_env()?;
    if let Some(secs) = args.timeout_secs {
        config.provider_timeout = Duration::from_secs(secs);
    }
    debug!(
        "Language {}, provider timeout {:?}",
        config.language, config.provider_timeout
    );

    let session = FeedSession::new(NewsAggregator::new(&config));

    match session.load(args.query.as_deref()).await {
        LoadOutcome::Applied { count, .. } => info!("Loaded {} articles", count),
        LoadOutcome::Stale { ticket, latest } => {
            anyhow::bail!("feed load {} was superseded by {}", ticket, latest)
        }
    }

    if args.list_sources {
        for source in session.sources().await {
            println!("{}", source);
        }
        return Ok(());
    }

    session.set_filter(args.filter()).await;
    let articles = session.visible().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        print!("{}", render::render_feed(&articles));
    }

    Ok(())
}
