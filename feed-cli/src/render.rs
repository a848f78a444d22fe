//! Plain-text rendering of the feed

use feed_core::Article;

const NO_ARTICLES: &str = "No articles found.";

/// Render one article as a text card
///
/// ```text
/// Markets rally
/// Jan 2, 2024 · BBC News
/// Stocks rose on Tuesday.
/// By Jane Doe
/// https://www.bbc.co.uk/news/1
/// Image: https://ichef.bbci.co.uk/1.jpg
/// ```
pub fn render_card(article: &Article) -> String {
    let mut lines = vec![article.title.clone()];

    lines.push(match article.display_date() {
        Some(date) => format!("{} · {}", date, article.source),
        None => article.source.clone(),
    });

    if !article.description.trim().is_empty() {
        lines.push(article.description.clone());
    }
    if let Some(author) = &article.author {
        lines.push(format!("By {}", author.trim_start_matches("By ").trim()));
    }
    lines.push(article.url.clone());
    if let Some(image) = &article.url_to_image {
        lines.push(format!("Image: {}", image));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}

/// Render the feed as cards separated by blank lines
pub fn render_feed(articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("{}\n", NO_ARTICLES);
    }

    articles
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
