// Colored terminal output for the ranking preview and run summary.
//
// This module handles all terminal-specific formatting; the wordlist file
// itself is written by the wordlist module.

use colored::Colorize;

use crate::pipeline::crawl::CrawlStats;
use crate::rank::aggregate::RankedTerm;

/// How many terms the preview shows at most.
const PREVIEW_LIMIT: usize = 20;

/// Display the head of the ranking in the terminal.
pub fn display_ranking(terms: &[RankedTerm]) {
    if terms.is_empty() {
        println!("No terms survived scoring; the wordlist is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top terms ({} total) ===", terms.len()).bold()
    );
    println!();
    println!("  {:>4}  {:>7}  Term", "Rank".dimmed(), "Score".dimmed());
    println!("  {}", "-".repeat(40).dimmed());

    for (i, ranked) in terms.iter().take(PREVIEW_LIMIT).enumerate() {
        println!("  {:>4}. {:>7}  {}", i + 1, ranked.score, ranked.term);
    }

    if terms.len() > PREVIEW_LIMIT {
        println!("  {}", format!("... {} more", terms.len() - PREVIEW_LIMIT).dimmed());
    }
    println!();
}

/// Display the crawl summary after a completed run.
pub fn display_summary(stats: &CrawlStats, elapsed_secs: f64) {
    println!("\n{}", "Crawl complete.".bold());
    println!("  Links discovered: {}", stats.links_discovered);
    println!("  Articles scraped: {}", stats.articles_scraped);
    if stats.seeds_skipped > 0 {
        println!(
            "  {}",
            format!("Seeds skipped: {}", stats.seeds_skipped).yellow()
        );
    }
    println!("Generating the wordlist took {elapsed_secs:.2} seconds.");
}
