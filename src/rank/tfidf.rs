// TF-IDF scoring for one seed's corpus.
//
// Each article is a separate document for IDF computation: words that
// appear in every article get downweighted, while words distinctive to a
// few articles get boosted. The exact weighting contract:
//
//   tf(t, d)  = raw count of term t in document d
//   idf(t)    = ln((1 + n_docs) / (1 + df(t))) + 1     (smoothed)
//   w(t, d)   = tf * idf, then each document vector is divided by its
//               Euclidean norm
//   score(t)  = mean of the normalized w(t, d) over ALL documents in the
//               corpus (absent terms contribute zero)
//
// Ordered maps keep the floating-point reduction order fixed, so identical
// corpora always produce bit-identical scores.

use std::collections::{BTreeMap, HashSet};

use stop_words::{get, LANGUAGE};

use crate::config::{Language, RunOptions};
use crate::rank::tokenizer::Tokenizer;

pub struct TfidfEngine {
    tokenizer: Tokenizer,
    /// Applied to the token stream before n-gram assembly. English runs use
    /// the general-purpose English list on top of the tokenizer's
    /// boilerplate filter; Dutch runs reuse the extra stopword set.
    vector_stopwords: HashSet<String>,
    ngram_min: usize,
    ngram_max: usize,
}

impl TfidfEngine {
    pub fn new(options: &RunOptions, extra_stopwords: &HashSet<String>) -> Self {
        let tokenizer = Tokenizer::new(options.language, extra_stopwords);

        let vector_stopwords: HashSet<String> = match options.language {
            Language::English => get(LANGUAGE::English).into_iter().collect(),
            Language::Dutch => extra_stopwords.clone(),
        };

        Self {
            tokenizer,
            vector_stopwords,
            ngram_min: options.ngram_min,
            ngram_max: options.ngram_max,
        }
    }

    /// Mean normalized TF-IDF weight per vocabulary term, unsorted.
    ///
    /// The caller guarantees `documents` holds the usable documents of
    /// exactly one seed; empty documents must already be dropped.
    pub fn seed_scores(&self, documents: &[String]) -> BTreeMap<String, f64> {
        let n_docs = documents.len();

        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|document| self.term_counts(document))
            .collect();

        // Document frequency per term across the corpus.
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc_counts in &counts {
            for term in doc_counts.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut sums: BTreeMap<String, f64> = BTreeMap::new();
        for doc_counts in &counts {
            let weights: Vec<(&String, f64)> = doc_counts
                .iter()
                .map(|(term, &tf)| {
                    let idf = ((1 + n_docs) as f64 / (1 + df[term.as_str()]) as f64).ln() + 1.0;
                    (term, tf as f64 * idf)
                })
                .collect();

            let norm = weights
                .iter()
                .map(|(_, weight)| weight * weight)
                .sum::<f64>()
                .sqrt();
            if norm == 0.0 {
                // A document whose text survived extraction but tokenized to
                // nothing: an all-zero row, still counted in n_docs.
                continue;
            }

            for (term, weight) in weights {
                *sums.entry(term.clone()).or_insert(0.0) += weight / norm;
            }
        }

        sums.into_iter()
            .map(|(term, sum)| (term, sum / n_docs as f64))
            .collect()
    }

    /// Raw n-gram counts for one document. The vectorizer-level stopword
    /// pass runs on tokens, before n-grams are assembled, so a stopword
    /// never appears inside a larger n-gram either.
    fn term_counts(&self, text: &str) -> BTreeMap<String, usize> {
        let mut tokens = self.tokenizer.tokenize(text);
        if !self.vector_stopwords.is_empty() {
            tokens.retain(|token| !self.vector_stopwords.contains(token));
        }

        let mut counts = BTreeMap::new();
        for n in self.ngram_min..=self.ngram_max {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }
}
