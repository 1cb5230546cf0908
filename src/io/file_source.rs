//! File-backed report source
//!
//! [`CsvReportSource`] loads a ledger master file and a transactions file and
//! serves them through [`ReportSource`]. Lines keep file order; the
//! transactions file is expected to be chronological.

use crate::core::traits::ReportSource;
use crate::io::csv_format::{convert_ledger_record, CsvLedgerRecord};
use crate::io::sync_reader::{at_line, numbered_records, open_csv, SyncReader};
use crate::types::{DateRange, LedgerDetails, LedgerError, LedgerId, PostedLine, TransactionLine};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Load every ledger of a ledger master file
///
/// Unlike transaction lines, a malformed ledger row is fatal. A repeated id
/// keeps its first row.
pub fn load_ledgers(path: &Path) -> Result<Vec<LedgerDetails>, LedgerError> {
    let reader = open_csv(path)?;
    let mut ledgers: Vec<LedgerDetails> = Vec::new();
    let mut seen: HashMap<LedgerId, u64> = HashMap::new();

    for (line, record) in numbered_records::<_, CsvLedgerRecord>(reader)? {
        let ledger = record
            .and_then(convert_ledger_record)
            .map_err(|e| at_line(line, e))?;

        if let Some(first) = seen.get(&ledger.id) {
            warn!(
                "Duplicate ledger '{}' at line {} ignored (first defined at line {})",
                ledger.id, line, first
            );
            continue;
        }
        seen.insert(ledger.id.clone(), line);
        ledgers.push(ledger);
    }

    debug!("Loaded {} ledgers from {}", ledgers.len(), path.display());
    Ok(ledgers)
}

/// Ledgers and their posted lines held in memory
#[derive(Debug, Clone, Default)]
pub struct CsvReportSource {
    ledgers: BTreeMap<LedgerId, LedgerDetails>,
    lines: HashMap<LedgerId, Vec<TransactionLine>>,
}

impl CsvReportSource {
    /// Load both files
    ///
    /// Malformed transaction rows and rows for unknown ledgers are logged and
    /// skipped.
    pub fn open(ledgers_path: &Path, transactions_path: &Path) -> Result<Self, LedgerError> {
        let ledgers = load_ledgers(ledgers_path)?;

        let mut posted = Vec::new();
        for result in SyncReader::new(transactions_path)? {
            match result {
                Ok(line) => posted.push(line),
                Err(e) => warn!("Skipping record: {}", e),
            }
        }

        Ok(Self::from_parts(ledgers, posted))
    }

    pub fn from_parts(
        ledgers: impl IntoIterator<Item = LedgerDetails>,
        posted: impl IntoIterator<Item = PostedLine>,
    ) -> Self {
        let ledgers: BTreeMap<LedgerId, LedgerDetails> = ledgers
            .into_iter()
            .map(|ledger| (ledger.id.clone(), ledger))
            .collect();

        let mut lines: HashMap<LedgerId, Vec<TransactionLine>> = HashMap::new();
        for PostedLine { ledger_id, line } in posted {
            if !ledgers.contains_key(&ledger_id) {
                warn!(
                    "Line of journal {} references unknown ledger '{}'",
                    line.journal_id, ledger_id
                );
                continue;
            }
            lines.entry(ledger_id).or_default().push(line);
        }

        Self { ledgers, lines }
    }
}

impl ReportSource for CsvReportSource {
    fn ledger_details(&self, ledger_id: &str) -> Result<LedgerDetails, LedgerError> {
        self.ledgers
            .get(ledger_id)
            .cloned()
            .ok_or_else(|| LedgerError::unknown_ledger(ledger_id))
    }

    fn ledger_lines(
        &self,
        ledger_id: &str,
        range: &DateRange,
    ) -> Result<Vec<TransactionLine>, LedgerError> {
        if !self.ledgers.contains_key(ledger_id) {
            return Err(LedgerError::unknown_ledger(ledger_id));
        }

        Ok(self
            .lines
            .get(ledger_id)
            .map(|lines| {
                lines
                    .iter()
                    .filter(|line| range.contains(line.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn ledger_ids(&self) -> Vec<String> {
        self.ledgers.keys().cloned().collect()
    }
}
