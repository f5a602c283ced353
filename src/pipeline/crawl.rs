// Crawl-and-rank pipeline: seeds in input order, bounded-concurrency
// article fetching within each seed.
//
// Per-seed corpora never mix: the TF-IDF engine sees exactly the documents
// of one seed, and the aggregator merge is order-independent, so the final
// ranking does not depend on fetch completion order. Document order inside
// a corpus follows link order regardless of which fetch finishes first.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::RunOptions;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::rank::aggregate::{rank_terms, RankedTerm};
use crate::rank::tfidf::TfidfEngine;
use crate::wiki::{content, links};

/// Running counters reported alongside the ranking.
#[derive(Debug, Default, Clone)]
pub struct CrawlStats {
    /// Article links discovered across all seeds, seeds included.
    pub links_discovered: usize,
    /// Articles fetched and extracted (empty documents included).
    pub articles_scraped: usize,
    /// Seeds dropped for producing no corpus or for failing outright.
    pub seeds_skipped: usize,
}

/// Run the full pipeline over the given seeds.
///
/// With `keep_going` set (the default), a failed article drops that
/// document and a failed or empty seed is skipped; with it cleared, the
/// first failure aborts the run with an error naming the offending URL.
pub async fn run(
    fetcher: &dyn PageFetcher,
    seeds: &[String],
    options: &RunOptions,
    extra_stopwords: &HashSet<String>,
) -> Result<(Vec<RankedTerm>, CrawlStats)> {
    options.validate()?;

    let engine = TfidfEngine::new(options, extra_stopwords);
    let mut stats = CrawlStats::default();
    let mut tables: Vec<BTreeMap<String, f64>> = Vec::new();

    for seed in seeds {
        match process_seed(fetcher, seed, options, &engine, &mut stats).await {
            Ok(table) => tables.push(table),
            Err(CrawlError::EmptyCorpus { seed }) => {
                warn!(seed, "Seed produced no usable documents, skipping");
                stats.seeds_skipped += 1;
            }
            Err(error) if options.keep_going => {
                warn!(seed, error = %error, "Seed failed, skipping");
                stats.seeds_skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok((rank_terms(&tables, options.top_n), stats))
}

/// Enumerate one seed's links, build its corpus, and score it.
async fn process_seed(
    fetcher: &dyn PageFetcher,
    seed: &str,
    options: &RunOptions,
    engine: &TfidfEngine,
    stats: &mut CrawlStats,
) -> Result<BTreeMap<String, f64>, CrawlError> {
    let links = links::enumerate_links(fetcher, seed, options.language).await?;
    stats.links_discovered += links.len();
    info!(seed, links = links.len(), "Enumerated article links");

    let pb = ProgressBar::new(links.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Articles [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let language = options.language;
    let results: Vec<Result<String, CrawlError>> = stream::iter(links.iter().map(|link| {
        let pb = pb.clone();
        async move {
            let result = content::extract_content(fetcher, link, language).await;
            pb.inc(1);
            result
        }
    }))
    .buffered(options.concurrency)
    .collect()
    .await;
    pb.finish_and_clear();

    let mut documents = Vec::new();
    for (link, result) in links.iter().zip(results) {
        match result {
            Ok(text) => {
                stats.articles_scraped += 1;
                if text.is_empty() {
                    // Zero extractable paragraphs: excluded from the corpus
                    // before vectorization.
                    warn!(url = %link, "Empty document, dropping");
                } else {
                    documents.push(text);
                }
            }
            Err(error) if options.keep_going => {
                warn!(url = %link, error = %error, "Failed to scrape article, dropping document");
            }
            Err(error) => return Err(error),
        }
    }

    if documents.is_empty() {
        return Err(CrawlError::EmptyCorpus {
            seed: seed.to_string(),
        });
    }

    info!(seed, documents = documents.len(), "Scoring corpus");
    Ok(engine.seed_scores(&documents))
}
