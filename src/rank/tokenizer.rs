// Token extraction with Wikipedia-boilerplate filtering.
//
// The token stream feeds directly into n-gram vocabulary construction, so
// the rules here (length >= 3, embedded apostrophes/hyphens, stopword
// filtering) are part of the scoring contract rather than a cosmetic
// cleanup step.

use std::collections::HashSet;

use regex::Regex;

use crate::config::Language;

/// Citation and markup boilerplate that leaks into English article text.
const EN_BOILERPLATE: &[&str] = &[
    "citation",
    "citation needed",
    "isbn",
    "issn",
    "displaystyle",
    "wikipedia",
    "creative",
    "commons",
];

/// Dutch equivalent, plus site-navigation words.
const NL_BOILERPLATE: &[&str] = &[
    "citaat",
    "citaat nodig",
    "isbn",
    "issn",
    "displaystyle",
    "bron",
    "bewerken",
    "brontekst",
    "artikel",
    "wikipedia",
    "creative",
    "commons",
];

/// Splits cleaned article text into lowercase tokens and drops the active
/// stopword set (built-in boilerplate for the language, unioned with the
/// caller-supplied extra set).
pub struct Tokenizer {
    pattern: Regex,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new(language: Language, extra_stopwords: &HashSet<String>) -> Self {
        let builtin = match language {
            Language::English => EN_BOILERPLATE,
            Language::Dutch => NL_BOILERPLATE,
        };

        let mut stopwords: HashSet<String> =
            builtin.iter().map(|word| word.to_string()).collect();
        stopwords.extend(extra_stopwords.iter().cloned());

        Self {
            pattern: Regex::new(r"\b[a-zA-Z'-]{3,}\b").unwrap(),
            stopwords,
        }
    }

    /// Lowercase alphabetic runs of length >= 3, boilerplate removed.
    /// Order and duplicates are preserved; term frequency downstream
    /// depends on repetition.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|word| !self.stopwords.contains(word))
            .collect()
    }
}
