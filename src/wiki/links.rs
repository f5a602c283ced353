// Article link discovery for one seed page.
//
// Only direct links from the seed page are enumerated; the crawl is one
// level deep. An href counts as an article link when it contains the
// "/wiki/" marker segment and no ":" (which excludes namespace pages like
// Category:/File:/Talk: as well as absolute URLs to other hosts).

use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;

use crate::config::Language;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;

/// Fetch a seed page and return its ordered, deduplicated article links.
/// The seed URL itself is always element zero.
pub async fn enumerate_links(
    fetcher: &dyn PageFetcher,
    seed: &str,
    language: Language,
) -> Result<Vec<String>, CrawlError> {
    let bytes = fetcher.fetch(seed).await?;
    let html = String::from_utf8_lossy(&bytes);
    collect_article_links(&html, seed, language)
}

/// Walk the anchors of the page body and build absolute article URLs.
///
/// Identity is the absolute URL string: the language's canonical domain
/// prefixed to the raw href, with no further normalization, so two hrefs
/// that differ only in fragment stay distinct.
pub fn collect_article_links(
    html: &str,
    seed: &str,
    language: Language,
) -> Result<Vec<String>, CrawlError> {
    let document = Html::parse_document(html);

    let body_selector = Selector::parse("#bodyContent").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let body = document
        .select(&body_selector)
        .next()
        .ok_or_else(|| CrawlError::structure(seed, "no bodyContent container"))?;

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(seed.to_string());
    let mut links = vec![seed.to_string()];

    for anchor in body.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains("/wiki/") || href.contains(':') {
            continue;
        }

        let full_url = format!("{}{}", language.canonical_domain(), href);
        if seen.insert(full_url.clone()) {
            links.push(full_url);
        }
    }

    debug!(seed, count = links.len(), "Collected article links");
    Ok(links)
}
