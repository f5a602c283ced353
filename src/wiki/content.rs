// Article text extraction.
//
// The main content container on a Wikipedia article is `mw-content-text`.
// Body text is everything in paragraph and list elements up to the
// language-specific references heading; past that point the page is
// citations, external links, and navigation boilerplate, none of which
// belongs in the corpus. Script and style subtrees never contribute text.

use regex::Regex;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::Language;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;

/// Fetch one article and return its cleaned body text. May be empty when the
/// page has no extractable paragraphs.
pub async fn extract_content(
    fetcher: &dyn PageFetcher,
    url: &str,
    language: Language,
) -> Result<String, CrawlError> {
    let bytes = fetcher.fetch(url).await?;
    let html = String::from_utf8_lossy(&bytes);
    clean_article_text(&html, url, language)
}

/// Extract and normalize the body text of an article page.
pub fn clean_article_text(
    html: &str,
    url: &str,
    language: Language,
) -> Result<String, CrawlError> {
    let document = Html::parse_document(html);

    let content_selector = Selector::parse("#mw-content-text").unwrap();
    let content = document
        .select(&content_selector)
        .next()
        .ok_or_else(|| CrawlError::structure(url, "no mw-content-text container"))?;

    let headings = find_reference_headings(&content, language);

    let raw = if headings.is_empty() {
        // No references section on this page: take the whole container.
        element_text(&content)
    } else {
        let mut sections = Vec::new();
        for node in content.descendants() {
            if headings.contains(&node.id()) {
                break;
            }
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            if matches!(element.value().name(), "p" | "ul" | "ol") {
                sections.push(element_text(&element));
            }
        }
        debug!(url, sections = sections.len(), "Truncated at references heading");
        sections.join("\n")
    };

    Ok(normalize_text(&raw))
}

/// Locate the references heading(s) for the language.
///
/// English articles use a single "References" h2. Dutch articles use one of
/// three phrasings; each is searched for independently and every match
/// terminates the walk, so a page carrying any of them truncates correctly.
fn find_reference_headings(content: &ElementRef, language: Language) -> Vec<NodeId> {
    let h2_selector = Selector::parse("h2").unwrap();
    let phrases: &[&str] = match language {
        Language::English => &["references"],
        Language::Dutch => &["referenties", "bronnen, noten en/of referenties", "noten"],
    };

    let mut found = Vec::new();
    for phrase in phrases {
        let hit = content
            .select(&h2_selector)
            .find(|h2| h2.text().collect::<String>().to_lowercase().contains(phrase));
        if let Some(h2) = hit {
            found.push(h2.id());
        }
    }
    found
}

/// Full text of an element, concatenated in document order, with script and
/// style subtrees skipped.
fn element_text(element: &ElementRef) -> String {
    let mut out = String::new();
    push_text(element, &mut out);
    out
}

fn push_text(element: &ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if matches!(child_element.value().name(), "script" | "style") {
                continue;
            }
            push_text(&child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Normalize extracted text: drop footnote markers, split the run-together
/// double-space phrases the source markup produces, trim every phrase, and
/// rejoin the survivors with single newlines.
fn normalize_text(text: &str) -> String {
    let footnote = Regex::new(r"\[\d+\]").unwrap();
    let stripped = footnote.replace_all(text, "");

    let mut phrases: Vec<&str> = Vec::new();
    for line in stripped.lines() {
        for phrase in line.trim().split("  ") {
            let phrase = phrase.trim();
            if !phrase.is_empty() {
                phrases.push(phrase);
            }
        }
    }
    phrases.join("\n")
}
