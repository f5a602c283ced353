// Wordlist file generation.
//
// One term per line, highest score first. With weights enabled the integer
// score precedes the term, separated by a single space, the format
// downstream wordlist consumers expect.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::rank::aggregate::RankedTerm;

/// Write the ranking to `path`, returning the path on success.
pub fn write_wordlist(
    path: &str,
    terms: &[RankedTerm],
    include_weights: bool,
) -> Result<PathBuf> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file {path}"))?;
    let mut writer = BufWriter::new(file);

    for ranked in terms {
        if include_weights {
            writeln!(writer, "{} {}", ranked.score, ranked.term)?;
        } else {
            writeln!(writer, "{}", ranked.term)?;
        }
    }

    writer.flush()?;
    Ok(PathBuf::from(path))
}
