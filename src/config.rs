use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::error::CrawlError;

/// Which Wikipedia edition to crawl.
///
/// The language decides the canonical domain links are resolved against,
/// which references heading ends an article, and which boilerplate
/// stopwords the tokenizer filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Dutch,
}

impl Language {
    /// Parse a CLI language tag. "en" and "eng" both mean English.
    pub fn parse(tag: &str) -> Result<Self, CrawlError> {
        match tag.to_ascii_uppercase().as_str() {
            "EN" | "ENG" => Ok(Language::English),
            "NL" => Ok(Language::Dutch),
            other => Err(CrawlError::Config(format!(
                "unknown language {other:?} (expected en, eng, or nl)"
            ))),
        }
    }

    /// Domain that relative article hrefs are resolved against.
    pub fn canonical_domain(self) -> &'static str {
        match self {
            Language::English => "https://en.wikipedia.org",
            Language::Dutch => "https://nl.wikipedia.org",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Dutch => "NL",
        }
    }
}

/// Per-run parameters, validated once before any fetch.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub language: Language,
    /// Number of terms to emit.
    pub top_n: usize,
    /// Inclusive n-gram range, 1-based.
    pub ngram_min: usize,
    pub ngram_max: usize,
    /// Concurrent article fetches within one seed.
    pub concurrency: usize,
    /// Drop failed articles and seeds instead of aborting the run.
    pub keep_going: bool,
}

impl RunOptions {
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.ngram_min < 1 {
            return Err(CrawlError::Config(
                "ngram_min must be at least 1".to_string(),
            ));
        }
        if self.ngram_min > self.ngram_max {
            return Err(CrawlError::Config(format!(
                "ngram_min ({}) must not exceed ngram_max ({})",
                self.ngram_min, self.ngram_max
            )));
        }
        if self.concurrency < 1 {
            return Err(CrawlError::Config(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Ambient configuration loaded from environment variables.
///
/// Run parameters come from the CLI; these are the knobs that rarely change
/// between runs. The .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    pub user_agent: String,
    pub timeout: Duration,
    /// Extra-stopword file consulted for Dutch runs.
    pub stopword_file: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let timeout_secs = env::var("LEXICRAWL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            user_agent: env::var("LEXICRAWL_USER_AGENT")
                .unwrap_or_else(|_| "lexicrawl/0.1 (wordlist research)".to_string()),
            timeout: Duration::from_secs(timeout_secs),
            stopword_file: env::var("LEXICRAWL_STOPWORDS")
                .unwrap_or_else(|_| "stopwoorden.txt".to_string()),
        })
    }
}

/// Load the caller-supplied extra stopword file: one entry per line,
/// lowercased. Returns an empty set if the file is missing or unreadable.
pub fn load_extra_stopwords(path: &str) -> HashSet<String> {
    if !Path::new(path).is_file() {
        return HashSet::new();
    }
    match fs::read_to_string(path) {
        Ok(contents) => {
            let words: HashSet<String> = contents
                .lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|line| !line.is_empty())
                .collect();
            info!(path, count = words.len(), "Loaded extra stopwords");
            words
        }
        Err(_) => HashSet::new(),
    }
}
