//! Reads the SCT transaction-file format (SPMF-style): one transaction
//! per line, `item item ...:transactionUtility:utility utility ...`.
//!
//! This is the external parser collaborator §1 names out of scope for
//! the mining core; it exists only to feed [`crate::transaction::TransactionRow`]
//! into [`crate::transaction::Database::from_rows`].

use crate::item::ItemId;
use crate::transaction::TransactionRow;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SctError {
    #[error("I/O error reading transaction file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 colon-separated fields, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: could not parse item id {value:?}: {source}")]
    BadItemId { line: usize, value: String, source: std::num::ParseIntError },

    #[error("line {line}: could not parse utility {value:?}: {source}")]
    BadUtility { line: usize, value: String, source: std::num::ParseFloatError },

    #[error("line {line}: item count {items} does not match utility count {utilities}")]
    FieldMismatch { line: usize, items: usize, utilities: usize },
}

/// Parses every non-blank line of `reader` as one SCT transaction row.
///
/// The whole-transaction utility field (the second colon-separated
/// field) is read and discarded; [`crate::transaction::Transaction`]
/// recomputes it from the per-item utilities so the two can never
/// silently disagree.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<TransactionRow>, SctError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_line(line_no, line)?);
    }
    Ok(rows)
}

fn parse_line(line_no: usize, line: &str) -> Result<TransactionRow, SctError> {
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() != 3 {
        return Err(SctError::WrongFieldCount { line: line_no, found: fields.len() });
    }

    let items = fields[0]
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u32>()
                .map(ItemId)
                .map_err(|source| SctError::BadItemId { line: line_no, value: tok.to_string(), source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let utilities = fields[2]
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|source| SctError::BadUtility { line: line_no, value: tok.to_string(), source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if items.len() != utilities.len() {
        return Err(SctError::FieldMismatch { line: line_no, items: items.len(), utilities: utilities.len() });
    }

    Ok(TransactionRow { items, utilities })
}
