//! Result sinks for the `emhun` binary: where mined itemsets go once
//! [`crate::miner::Miner::run`] returns them. Not part of the core
//! library's public mining API (§4.6 EXPANSION) — the core returns a
//! plain `Vec` and leaves output formatting to the caller.

use crate::result::HighUtilityItemset;
use std::io::{self, Write};

/// Somewhere a finished set of itemsets can be written to.
pub trait ResultSink {
    fn write(&mut self, itemsets: &[HighUtilityItemset]) -> io::Result<()>;
}

/// Writes one itemset per line as `item item ... #UTIL: value`, the
/// SPMF convention also used by the SCT input format's glossary entry.
pub struct StdoutSink<W: Write> {
    out: W,
}

impl StdoutSink<io::Stdout> {
    pub fn new() -> Self {
        StdoutSink { out: io::stdout() }
    }
}

impl Default for StdoutSink<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ResultSink for StdoutSink<W> {
    fn write(&mut self, itemsets: &[HighUtilityItemset]) -> io::Result<()> {
        for itemset in itemsets {
            let items = itemset.items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            writeln!(self.out, "{items} #UTIL: {}", itemset.utility)?;
        }
        Ok(())
    }
}

/// Writes itemsets as CSV: one `items,utility` row per itemset, items
/// space-separated within the first column.
pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        CsvSink { out }
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn write(&mut self, itemsets: &[HighUtilityItemset]) -> io::Result<()> {
        writeln!(self.out, "items,utility")?;
        for itemset in itemsets {
            let items = itemset.items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
            writeln!(self.out, "\"{items}\",{}", itemset.utility)?;
        }
        Ok(())
    }
}
