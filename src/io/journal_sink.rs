//! Journal entry input and JSON submission
//!
//! Journal lines are read from a CSV file (`ledger_id,ledger_name,debit,credit,
//! line_narration`). A validated [`JournalDocument`] is written as pretty JSON
//! by [`JsonJournalSink`], standing in for the backend endpoint.

use crate::core::traits::JournalSink;
use crate::core::validator::validate_balanced;
use crate::io::csv_format::{convert_journal_line, CsvJournalLineRecord};
use crate::io::sync_reader::{at_line, numbered_records, open_csv};
use crate::types::{JournalDocument, JournalLine, JournalReceipt, LedgerError};
use log::info;
use std::io::Write;
use std::path::Path;

/// Read every line of a journal entry file in order
///
/// A malformed row is fatal; the entry is submitted whole or not at all.
pub fn read_journal_lines(path: &Path) -> Result<Vec<JournalLine>, LedgerError> {
    let reader = open_csv(path)?;

    numbered_records::<_, CsvJournalLineRecord>(reader)?
        .map(|(line, record)| {
            record
                .and_then(convert_journal_line)
                .map_err(|e| at_line(line, e))
        })
        .collect()
}

/// Journal sink writing each accepted document as JSON
#[derive(Debug)]
pub struct JsonJournalSink<W: Write> {
    writer: W,
    submitted: usize,
}

impl<W: Write> JsonJournalSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            submitted: 0,
        }
    }

    /// Number of documents accepted so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> JournalSink for JsonJournalSink<W> {
    /// Re-validates the document before writing it
    fn submit(&mut self, document: &JournalDocument) -> Result<JournalReceipt, LedgerError> {
        validate_balanced(&document.lines)?;

        serde_json::to_writer_pretty(&mut self.writer, document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;

        self.submitted += 1;
        info!(
            "Journal entry for company {} dated {} accepted ({} lines)",
            document.company_id,
            document.date,
            document.lines.len()
        );

        Ok(JournalReceipt {
            lines: document.lines.len(),
            amount: document.total_debit,
        })
    }
}
