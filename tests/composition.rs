// Composition tests: the full pipeline run against an in-memory page set.
//
// These exercise the data flow between modules:
//   LinkEnumerator -> ContentExtractor -> TfidfEngine -> Aggregator
// with a fake fetcher instead of the network, so every run is fully
// deterministic.

use std::collections::{HashMap, HashSet};
use std::fs;

use async_trait::async_trait;

use lexicrawl::config::{Language, RunOptions};
use lexicrawl::error::CrawlError;
use lexicrawl::fetch::PageFetcher;
use lexicrawl::output::wordlist::write_wordlist;
use lexicrawl::pipeline::crawl;

/// Serves canned pages by exact URL; any other URL fails like a dead host.
struct FakeFetcher {
    pages: HashMap<String, String>,
}

impl FakeFetcher {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CrawlError> {
        self.pages
            .get(url)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| CrawlError::network(url, "no such fixture"))
    }
}

fn options(keep_going: bool) -> RunOptions {
    RunOptions {
        language: Language::English,
        top_n: 100,
        ngram_min: 1,
        ngram_max: 1,
        concurrency: 4,
        keep_going,
    }
}

fn article(body: &str) -> String {
    format!(
        r#"<html><body><div id="mw-content-text"><p>{body}</p><h2>References</h2><p>refs</p></div></body></html>"#
    )
}

/// A seed page linking to the given articles, with no body text of its own
/// (its empty document is dropped before scoring).
fn seed_page(hrefs: &[&str]) -> String {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{href}">link</a>"#))
        .collect();
    format!(
        r#"<html><body><div id="bodyContent">{anchors}</div><div id="mw-content-text"></div></body></html>"#
    )
}

const SEED: &str = "https://en.wikipedia.org/wiki/Seed";

fn alpha_beta_gamma_fetcher() -> FakeFetcher {
    FakeFetcher::new(&[
        (SEED, &seed_page(&["/wiki/Alpha", "/wiki/Gamma"])),
        (
            "https://en.wikipedia.org/wiki/Alpha",
            &article("alpha alpha beta"),
        ),
        (
            "https://en.wikipedia.org/wiki/Gamma",
            &article("beta gamma gamma gamma"),
        ),
    ])
}

#[tokio::test]
async fn pipeline_reproduces_the_hand_computed_ranking() {
    let fetcher = alpha_beta_gamma_fetcher();
    let (ranking, stats) = crawl::run(&fetcher, &[SEED.to_string()], &options(true), &HashSet::new())
        .await
        .unwrap();

    let rows: Vec<(&str, i64)> = ranking.iter().map(|r| (r.term.as_str(), r.score)).collect();
    assert_eq!(rows, vec![("gamma", 4865), ("alpha", 4710), ("beta", 2829)]);

    // Seed plus two articles discovered and scraped; the seed's own empty
    // document is dropped, not counted as a skipped seed.
    assert_eq!(stats.links_discovered, 3);
    assert_eq!(stats.articles_scraped, 3);
    assert_eq!(stats.seeds_skipped, 0);
}

#[tokio::test]
async fn rerunning_identical_input_writes_identical_bytes() {
    let fetcher = alpha_beta_gamma_fetcher();
    let dir = tempfile::tempdir().unwrap();

    let mut outputs = Vec::new();
    for name in ["first.txt", "second.txt"] {
        let (ranking, _) =
            crawl::run(&fetcher, &[SEED.to_string()], &options(true), &HashSet::new())
                .await
                .unwrap();
        let path = dir.path().join(name);
        write_wordlist(path.to_str().unwrap(), &ranking, true).unwrap();
        outputs.push(fs::read(&path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], b"4865 gamma\n4710 alpha\n2829 beta\n");
}

#[tokio::test]
async fn failed_article_is_dropped_when_keep_going() {
    let fetcher = FakeFetcher::new(&[
        (SEED, &seed_page(&["/wiki/Alpha", "/wiki/Missing"])),
        (
            "https://en.wikipedia.org/wiki/Alpha",
            &article("tide tide moon"),
        ),
        // /wiki/Missing is absent: the fetch fails with a network error
    ]);

    let (ranking, stats) = crawl::run(&fetcher, &[SEED.to_string()], &options(true), &HashSet::new())
        .await
        .unwrap();

    assert!(ranking.iter().any(|r| r.term == "tide"));
    assert_eq!(stats.links_discovered, 3);
    assert_eq!(stats.articles_scraped, 2);
}

#[tokio::test]
async fn failed_article_aborts_under_fail_fast_and_names_the_url() {
    let fetcher = FakeFetcher::new(&[
        (SEED, &seed_page(&["/wiki/Alpha", "/wiki/Missing"])),
        (
            "https://en.wikipedia.org/wiki/Alpha",
            &article("tide tide moon"),
        ),
    ]);

    let err = crawl::run(&fetcher, &[SEED.to_string()], &options(false), &HashSet::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("/wiki/Missing"));
}

#[tokio::test]
async fn empty_seed_is_skipped_but_other_seeds_still_score() {
    let empty_seed = "https://en.wikipedia.org/wiki/Empty";
    let fetcher = FakeFetcher::new(&[
        // every document of this seed is empty
        (empty_seed, &seed_page(&[])),
        (SEED, &seed_page(&["/wiki/Alpha"])),
        (
            "https://en.wikipedia.org/wiki/Alpha",
            &article("tide tide moon"),
        ),
    ]);

    let seeds = vec![empty_seed.to_string(), SEED.to_string()];
    let (ranking, stats) = crawl::run(&fetcher, &seeds, &options(true), &HashSet::new())
        .await
        .unwrap();

    assert_eq!(stats.seeds_skipped, 1);
    assert!(ranking.iter().any(|r| r.term == "tide"));
}

#[tokio::test]
async fn run_with_only_empty_seeds_succeeds_with_an_empty_wordlist() {
    let empty_seed = "https://en.wikipedia.org/wiki/Empty";
    let fetcher = FakeFetcher::new(&[(empty_seed, &seed_page(&[]))]);

    let (ranking, stats) = crawl::run(
        &fetcher,
        &[empty_seed.to_string()],
        &options(true),
        &HashSet::new(),
    )
    .await
    .unwrap();

    assert!(ranking.is_empty());
    assert_eq!(stats.seeds_skipped, 1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    write_wordlist(path.to_str().unwrap(), &ranking, false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[tokio::test]
async fn shared_terms_average_across_seeds() {
    let seed_b = "https://en.wikipedia.org/wiki/SeedB";
    let fetcher = FakeFetcher::new(&[
        (SEED, &seed_page(&["/wiki/TideOnly"])),
        (
            "https://en.wikipedia.org/wiki/TideOnly",
            &article("tide tide"),
        ),
        (seed_b, &seed_page(&["/wiki/TideMoon"])),
        (
            "https://en.wikipedia.org/wiki/TideMoon",
            &article("tide moon"),
        ),
    ]);

    // Seed A: "tide" is the whole document, normalized weight 1.0 -> 10000.
    // Seed B: "tide" and "moon" each 1/sqrt(2) -> 7071.
    // Cross-seed: tide = mean(10000, 7071) = 8535.5, emitted truncated.
    let seeds = vec![SEED.to_string(), seed_b.to_string()];
    let (ranking, _) = crawl::run(&fetcher, &seeds, &options(true), &HashSet::new())
        .await
        .unwrap();

    let rows: Vec<(&str, i64)> = ranking.iter().map(|r| (r.term.as_str(), r.score)).collect();
    assert_eq!(rows, vec![("tide", 8535), ("moon", 7071)]);
}

#[tokio::test]
async fn invalid_ngram_range_fails_before_any_fetch() {
    let fetcher = FakeFetcher::new(&[]);
    let mut bad = options(true);
    bad.ngram_min = 3;
    bad.ngram_max = 1;

    let err = crawl::run(&fetcher, &[SEED.to_string()], &bad, &HashSet::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ngram_min"));
}

#[tokio::test]
async fn top_n_zero_produces_an_empty_ranking() {
    let fetcher = alpha_beta_gamma_fetcher();
    let mut zero = options(true);
    zero.top_n = 0;

    let (ranking, _) = crawl::run(&fetcher, &[SEED.to_string()], &zero, &HashSet::new())
        .await
        .unwrap();
    assert!(ranking.is_empty());
}
