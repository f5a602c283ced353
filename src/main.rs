use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use lexicrawl::config::{self, Config, Language, RunOptions};
use lexicrawl::error::CrawlError;
use lexicrawl::fetch::HttpFetcher;
use lexicrawl::output::{terminal, wordlist};
use lexicrawl::pipeline::crawl;

/// Lexicrawl: TF-IDF wordlists from Wikipedia.
///
/// Crawls each seed article's outbound links one level deep, extracts clean
/// body text, and ranks vocabulary terms by aggregated TF-IDF importance.
#[derive(Parser)]
#[command(name = "lexicrawl", version, about)]
struct Cli {
    /// Seed URL, or path to a file with one seed URL per line
    #[arg(long)]
    input: String,

    /// Output wordlist path
    #[arg(long)]
    output: String,

    /// Number of terms to emit
    #[arg(long, default_value = "10000")]
    top: usize,

    /// Minimum n-gram size
    #[arg(long, default_value = "1")]
    ngram_min: usize,

    /// Maximum n-gram size
    #[arg(long, default_value = "1")]
    ngram_max: usize,

    /// Prefix each term with its integer score
    #[arg(long)]
    include_weights: bool,

    /// Wikipedia edition to crawl: en, eng, or nl
    #[arg(long)]
    language: String,

    /// Concurrent article fetches within one seed
    #[arg(long, default_value = "8")]
    concurrency: usize,

    /// Abort the whole run on the first failed article instead of
    /// dropping it and continuing
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexicrawl=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let language = Language::parse(&cli.language)?;
    let options = RunOptions {
        language,
        top_n: cli.top,
        ngram_min: cli.ngram_min,
        ngram_max: cli.ngram_max,
        concurrency: cli.concurrency,
        keep_going: !cli.fail_fast,
    };
    options.validate()?;

    let seeds = resolve_seeds(&cli.input)?;
    info!(seeds = seeds.len(), language = language.label(), "Resolved seed list");

    // The extra stopword file is a Dutch-run concern; English runs get the
    // general-purpose list inside the scoring engine instead.
    let extra_stopwords = match language {
        Language::Dutch => config::load_extra_stopwords(&config.stopword_file),
        Language::English => HashSet::new(),
    };

    let fetcher = HttpFetcher::new(&config)?;

    println!("Start scraping ({}).", language.label());
    let started = Instant::now();

    let (ranking, stats) = crawl::run(&fetcher, &seeds, &options, &extra_stopwords).await?;

    let path = wordlist::write_wordlist(&cli.output, &ranking, cli.include_weights)?;

    terminal::display_ranking(&ranking);
    terminal::display_summary(&stats, started.elapsed().as_secs_f64());
    println!(
        "{}",
        format!("Wordlist saved to: {}", path.display()).bold()
    );

    Ok(())
}

/// Resolve the input argument into an ordered seed list: a readable file
/// means one URL per line, anything else is a single literal URL. Every
/// seed must parse as an absolute URL.
fn resolve_seeds(input: &str) -> Result<Vec<String>> {
    let seeds: Vec<String> = if Path::new(input).is_file() {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read seed file {input}"))?
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        vec![input.trim().to_string()]
    };

    if seeds.is_empty() {
        return Err(CrawlError::Config(format!("seed file {input} is empty")).into());
    }
    for seed in &seeds {
        url::Url::parse(seed)
            .map_err(|e| CrawlError::Config(format!("invalid seed URL {seed}: {e}")))?;
    }

    Ok(seeds)
}
